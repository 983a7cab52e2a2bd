use log::debug;

use crate::{ExerciseID, ExerciseRecord, Goal, Level, Muscle, Name, Profile, Tuning};

/// An exercise annotated with the volume and duration planned for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleItem {
    pub id: ExerciseID,
    pub name: Name,
    pub muscles: Vec<Muscle>,
    pub sets: u32,
    pub reps: u32,
    /// Duration in minutes.
    pub time: u32,
    pub is_compound: bool,
}

/// Derive the schedulable items for a profile.
///
/// Exercises targeting an injured muscle are dropped, as are exercises whose
/// equipment is entirely unavailable. The result is deterministic for a given
/// catalog, profile and tuning.
#[must_use]
pub fn build_items(
    exercises: &[ExerciseRecord],
    profile: &Profile,
    tuning: &Tuning,
) -> Vec<ScheduleItem> {
    let reps = reps(profile.goal, profile.level, tuning);

    exercises
        .iter()
        .filter(|e| {
            if e.targets_any(&profile.injuries) {
                debug!("excluding {}: targets injured muscle", e.name);
                return false;
            }
            if let Some(equipment) = &profile.equipment {
                if !e.is_available_with(equipment) {
                    debug!("excluding {}: equipment not available", e.name);
                    return false;
                }
            }
            true
        })
        .filter_map(|e| {
            let muscles = e.distinct_target_muscles();
            if muscles.is_empty() {
                debug!("excluding {}: no target muscles", e.name);
                return None;
            }
            let is_compound = tuning.is_compound(&muscles, &e.equipment);
            let sets = sets(is_compound, profile.goal, profile.level, tuning);
            Some(ScheduleItem {
                id: e.id.clone(),
                name: e.name.clone(),
                muscles,
                sets,
                reps,
                time: sets * tuning.minutes_per_set,
                is_compound,
            })
        })
        .collect()
}

#[must_use]
pub fn reps(goal: Goal, level: Level, tuning: &Tuning) -> u32 {
    let Some(level) = level.known() else {
        return tuning.default_reps;
    };
    let parameters = tuning.goal_parameters(goal);
    let min = f64::from(parameters.rep_min);
    let max = f64::from(parameters.rep_max);
    to_count(min + (max - min) * f64::from(level) / 4.0)
}

#[must_use]
pub fn sets(is_compound: bool, goal: Goal, level: Level, tuning: &Tuning) -> u32 {
    let base_sets = if is_compound {
        tuning.compound_base_sets
    } else {
        tuning.isolation_base_sets
    };
    let level = level.known().unwrap_or(2);
    let sets = to_count(
        f64::from(base_sets)
            * tuning.goal_parameters(goal).set_multiplier
            * (1.0 + f64::from(level) * tuning.level_set_bonus),
    );
    sets.clamp(tuning.min_sets, tuning.max_sets.max(tuning.min_sets))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}
