use std::collections::{BTreeMap, BTreeSet};

use crate::{Equipment, Goal, Level, Muscle};

/// Heuristic constants of the planner.
///
/// `Tuning::default()` is the reference tuning; alternative profiles can be
/// constructed without touching the planner itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Work, rest and setup time of a single set.
    pub minutes_per_set: u32,
    pub weekly_target_sets: u32,
    /// Weekly fatigue budget per muscle, keyed by experience level.
    pub stamina_limits: BTreeMap<i32, u32>,
    pub default_stamina_limit: u32,
    /// Reps assumed when the experience level is not in the table.
    pub default_reps: u32,
    pub compound_muscles: BTreeSet<Muscle>,
    pub compound_equipment: BTreeSet<Equipment>,
    pub compound_intensity: f64,
    pub isolation_intensity: f64,
    pub compound_base_sets: u32,
    pub isolation_base_sets: u32,
    pub min_sets: u32,
    pub max_sets: u32,
    /// Relative increase of the set count per experience level.
    pub level_set_bonus: f64,
    pub strength: GoalParameters,
    pub hypertrophy: GoalParameters,
    pub endurance: GoalParameters,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalParameters {
    pub rep_min: u32,
    pub rep_max: u32,
    pub set_multiplier: f64,
}

impl Tuning {
    #[must_use]
    pub fn stamina_limit(&self, level: Level) -> u32 {
        self.stamina_limits
            .get(&level.value())
            .copied()
            .unwrap_or(self.default_stamina_limit)
    }

    #[must_use]
    pub fn goal_parameters(&self, goal: Goal) -> &GoalParameters {
        match goal {
            Goal::Strength => &self.strength,
            Goal::Hypertrophy => &self.hypertrophy,
            Goal::Endurance => &self.endurance,
        }
    }

    /// Large muscle groups or multi-joint equipment make an exercise compound.
    #[must_use]
    pub fn is_compound(&self, target_muscles: &[Muscle], equipment: &[Equipment]) -> bool {
        target_muscles
            .iter()
            .any(|m| self.compound_muscles.contains(m))
            || equipment.iter().any(|e| self.compound_equipment.contains(e))
    }

    #[must_use]
    pub fn intensity(&self, is_compound: bool) -> f64 {
        if is_compound {
            self.compound_intensity
        } else {
            self.isolation_intensity
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            minutes_per_set: 4,
            weekly_target_sets: 10,
            stamina_limits: BTreeMap::from([(0, 80), (1, 110), (2, 140), (3, 180), (4, 220)]),
            default_stamina_limit: 140,
            default_reps: 10,
            compound_muscles: [
                "glutes",
                "quads",
                "pectorals",
                "lats",
                "upper back",
                "hamstrings",
            ]
            .into_iter()
            .filter_map(|m| Muscle::new(m).ok())
            .collect(),
            compound_equipment: [
                "barbell",
                "dumbbell",
                "kettlebell",
                "olympic barbell",
                "smith machine",
                "leverage machine",
                "trap bar",
            ]
            .into_iter()
            .filter_map(|e| Equipment::new(e).ok())
            .collect(),
            compound_intensity: 1.5,
            isolation_intensity: 1.0,
            compound_base_sets: 4,
            isolation_base_sets: 3,
            min_sets: 2,
            max_sets: 6,
            level_set_bonus: 0.05,
            strength: GoalParameters {
                rep_min: 3,
                rep_max: 6,
                set_multiplier: 1.25,
            },
            hypertrophy: GoalParameters {
                rep_min: 6,
                rep_max: 12,
                set_multiplier: 1.0,
            },
            endurance: GoalParameters {
                rep_min: 12,
                rep_max: 20,
                set_multiplier: 0.8,
            },
        }
    }
}
