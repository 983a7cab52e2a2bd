//! Weekly planning under a per-session time budget and a per-muscle fatigue
//! budget.
//!
//! Each day is planned by a 0/1 knapsack over the exercises that still make
//! progress towards an unmet weekly set target. The fatigue budget of a
//! muscle ("stamina") is shared by all days of the week and only ever
//! decreases, so the days have to be planned strictly in order.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};

use crate::{
    DaySchedule, InvalidArgument, Level, Muscle, MuscleSummary, PlanError, ScheduleItem,
    ScheduledExercise, Tuning, WeeklyPlan, knapsack,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleState {
    /// Sets still needed this week.
    pub remaining_target: u32,
    pub stamina_limit: u32,
    pub stamina_remaining: u32,
}

/// Progress and fatigue of all muscles, carried from one day to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekState {
    target_per_muscle: u32,
    muscles: BTreeMap<Muscle, MuscleState>,
}

impl WeekState {
    /// Fresh state for every muscle targeted by any item.
    #[must_use]
    pub fn new(items: &[ScheduleItem], level: Level, tuning: &Tuning) -> Self {
        let stamina_limit = tuning.stamina_limit(level);
        let muscles = items
            .iter()
            .flat_map(|i| i.muscles.iter())
            .map(|m| {
                (
                    m.clone(),
                    MuscleState {
                        remaining_target: tuning.weekly_target_sets,
                        stamina_limit,
                        stamina_remaining: stamina_limit,
                    },
                )
            })
            .collect();
        Self {
            target_per_muscle: tuning.weekly_target_sets,
            muscles,
        }
    }

    #[must_use]
    pub fn target_per_muscle(&self) -> u32 {
        self.target_per_muscle
    }

    #[must_use]
    pub fn muscle(&self, muscle: &Muscle) -> Option<&MuscleState> {
        self.muscles.get(muscle)
    }

    pub fn muscles(&self) -> impl Iterator<Item = (&Muscle, &MuscleState)> {
        self.muscles.iter()
    }

    /// Contribution of an item towards the unmet targets of its muscles.
    #[must_use]
    pub fn value(&self, item: &ScheduleItem) -> u32 {
        distinct_muscles(item)
            .iter()
            .filter_map(|m| self.muscles.get(*m))
            .filter(|s| s.remaining_target > 0)
            .map(|s| item.sets.min(s.remaining_target))
            .sum()
    }

    /// Whether every targeted muscle has enough stamina left for the item.
    #[must_use]
    pub fn is_feasible(&self, costs: &BTreeMap<Muscle, u32>) -> bool {
        costs.iter().all(|(m, cost)| {
            self.muscles
                .get(m)
                .is_some_and(|s| *cost <= s.stamina_remaining)
        })
    }

    fn commit(&mut self, item: &ScheduleItem, costs: &BTreeMap<Muscle, u32>) {
        for muscle in distinct_muscles(item) {
            if let Some(state) = self.muscles.get_mut(muscle) {
                state.remaining_target = state.remaining_target.saturating_sub(item.sets);
            }
        }
        for (muscle, cost) in costs {
            if let Some(state) = self.muscles.get_mut(muscle) {
                state.stamina_remaining = state.stamina_remaining.saturating_sub(*cost);
            }
        }
    }

    fn summary(&self) -> BTreeMap<Muscle, MuscleSummary> {
        self.muscles
            .iter()
            .map(|(m, s)| {
                (
                    m.clone(),
                    MuscleSummary {
                        sets_done: self.target_per_muscle - s.remaining_target,
                        stamina_limit: s.stamina_limit,
                        stamina_used: s.stamina_limit - s.stamina_remaining,
                        stamina_remaining: s.stamina_remaining,
                    },
                )
            })
            .collect()
    }
}

/// Weekly fatigue cost of an item, split evenly over its distinct target
/// muscles.
///
/// Each muscle is charged `max(1, floor(sets × reps × intensity) / n)`.
#[must_use]
pub fn stamina_costs(item: &ScheduleItem, tuning: &Tuning) -> BTreeMap<Muscle, u32> {
    let muscles = distinct_muscles(item);
    if muscles.is_empty() {
        return BTreeMap::new();
    }
    let total = total_cost(item, tuning);
    let per_muscle = (total / u32::try_from(muscles.len()).unwrap_or(u32::MAX)).max(1);
    muscles.into_iter().map(|m| (m.clone(), per_muscle)).collect()
}

fn distinct_muscles(item: &ScheduleItem) -> BTreeSet<&Muscle> {
    item.muscles.iter().collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn total_cost(item: &ScheduleItem, tuning: &Tuning) -> u32 {
    let volume = f64::from(item.sets) * f64::from(item.reps);
    (volume * tuning.intensity(item.is_compound)).floor().max(0.0) as u32
}

/// Plans the days of one week over a fixed set of items.
pub struct Planner<'a> {
    items: &'a [ScheduleItem],
    costs: Vec<BTreeMap<Muscle, u32>>,
    time_per_session: u32,
}

impl<'a> Planner<'a> {
    #[must_use]
    pub fn new(items: &'a [ScheduleItem], time_per_session: u32, tuning: &Tuning) -> Self {
        Self {
            items,
            costs: items.iter().map(|i| stamina_costs(i, tuning)).collect(),
            time_per_session,
        }
    }

    /// Plan a single day and return the state to hand to the next day.
    #[must_use]
    pub fn plan_day(&self, day: usize, mut state: WeekState) -> (WeekState, DaySchedule) {
        let label = format!("day_{}", day + 1);
        let values = self
            .items
            .iter()
            .map(|i| state.value(i))
            .collect::<Vec<_>>();

        let mut candidates = self
            .schedulable(&state)
            .filter(|i| values[*i] > 0)
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            candidates = self
                .schedulable(&state)
                .filter(|i| self.items[*i].is_compound)
                .collect();
            if candidates.is_empty() {
                debug!("{label}: no feasible exercise left, resting");
                return (state, DaySchedule::rest(label));
            }
            debug!(
                "{label}: no exercise improves a target, considering {} compound exercises",
                candidates.len()
            );
        }

        let selection = knapsack::solve(
            &candidates
                .iter()
                .map(|i| knapsack::Candidate {
                    weight: self.items[*i].time,
                    value: values[*i],
                })
                .collect::<Vec<_>>(),
            self.time_per_session,
        );

        let mut exercises = vec![];
        for index in selection.indices.iter().map(|c| candidates[*c]) {
            let item = &self.items[index];
            let costs = &self.costs[index];
            state.commit(item, costs);
            exercises.push(ScheduledExercise {
                id: item.id.clone(),
                name: item.name.clone(),
                sets: item.sets,
                reps: item.reps,
                time: item.time,
                muscles: item.muscles.clone(),
                stamina_costs: costs.clone(),
            });
        }

        debug!(
            "{label}: {} exercises, {} min, value {}",
            exercises.len(),
            selection.weight,
            selection.value
        );

        (
            state,
            DaySchedule {
                label,
                exercises,
                total_minutes: selection.weight,
            },
        )
    }

    /// Indices of items with target muscles whose costs fit the remaining stamina.
    fn schedulable<'s>(&'s self, state: &'s WeekState) -> impl Iterator<Item = usize> + 's {
        (0..self.items.len()).filter(move |i| {
            !self.items[*i].muscles.is_empty() && state.is_feasible(&self.costs[*i])
        })
    }
}

/// Distribute the items over `num_days` sessions of `time_per_session` minutes.
///
/// The days are planned in order, each one starting from the state left by
/// the previous day. Fatigue is not recovered within the week.
pub fn optimize(
    items: &[ScheduleItem],
    num_days: u32,
    time_per_session: u32,
    level: Level,
    tuning: &Tuning,
) -> Result<WeeklyPlan, PlanError> {
    if num_days == 0 {
        return Err(InvalidArgument::NoTrainingDays.into());
    }
    if time_per_session == 0 {
        return Err(InvalidArgument::NoSessionTime.into());
    }
    if level.known().is_none() {
        warn!("unknown level {}, using default stamina limit", level.value());
    }

    let planner = Planner::new(items, time_per_session, tuning);
    let mut state = WeekState::new(items, level, tuning);
    let mut days = vec![];

    for day in 0..num_days as usize {
        let (next_state, schedule) = planner.plan_day(day, state);
        state = next_state;
        days.push(schedule);
    }

    let plan = WeeklyPlan {
        days,
        target_per_muscle: state.target_per_muscle(),
        muscles: state.summary(),
    };

    info!(
        "planned {} days with {} exercises in {} min",
        plan.days.len(),
        plan.days.iter().map(|d| d.exercises.len()).sum::<usize>(),
        plan.total_minutes()
    );

    Ok(plan)
}
