use std::{collections::BTreeMap, fmt};

use crate::{ExerciseID, Muscle, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledExercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: u32,
    pub reps: u32,
    /// Duration in minutes.
    pub time: u32,
    pub muscles: Vec<Muscle>,
    pub stamina_costs: BTreeMap<Muscle, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub label: String,
    pub exercises: Vec<ScheduledExercise>,
    pub total_minutes: u32,
}

impl DaySchedule {
    #[must_use]
    pub fn rest(label: String) -> Self {
        Self {
            label,
            exercises: vec![],
            total_minutes: 0,
        }
    }

    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuscleSummary {
    pub sets_done: u32,
    pub stamina_limit: u32,
    pub stamina_used: u32,
    pub stamina_remaining: u32,
}

/// Result of planning one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    pub days: Vec<DaySchedule>,
    pub target_per_muscle: u32,
    pub muscles: BTreeMap<Muscle, MuscleSummary>,
}

impl WeeklyPlan {
    #[must_use]
    pub fn day(&self, label: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.label == label)
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.days.iter().map(|d| d.total_minutes).sum()
    }

    #[must_use]
    pub fn weekly_sets_done(&self) -> BTreeMap<Muscle, u32> {
        self.summary(|s| s.sets_done)
    }

    #[must_use]
    pub fn stamina_limit_per_muscle(&self) -> BTreeMap<Muscle, u32> {
        self.summary(|s| s.stamina_limit)
    }

    #[must_use]
    pub fn stamina_used(&self) -> BTreeMap<Muscle, u32> {
        self.summary(|s| s.stamina_used)
    }

    #[must_use]
    pub fn stamina_remaining(&self) -> BTreeMap<Muscle, u32> {
        self.summary(|s| s.stamina_remaining)
    }

    fn summary(&self, field: impl Fn(&MuscleSummary) -> u32) -> BTreeMap<Muscle, u32> {
        self.muscles
            .iter()
            .map(|(m, s)| (m.clone(), field(s)))
            .collect()
    }
}

impl fmt::Display for WeeklyPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Weekly plan:")?;
        for day in &self.days {
            writeln!(f)?;
            writeln!(f, "{}: total_time_min={}", day.label, day.total_minutes)?;
            if day.is_rest_day() {
                writeln!(f, "  (rest)")?;
            }
            for exercise in &day.exercises {
                write!(
                    f,
                    "  - {} ({}x{} reps, {} min) -> {}",
                    exercise.name,
                    exercise.sets,
                    exercise.reps,
                    exercise.time,
                    exercise
                        .muscles
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )?;
                if !exercise.stamina_costs.is_empty() {
                    write!(
                        f,
                        " [{}]",
                        exercise
                            .stamina_costs
                            .iter()
                            .map(|(m, c)| format!("{m}: {c}"))
                            .collect::<Vec<_>>()
                            .join(", ")
                    )?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Weekly sets per muscle (done / target):")?;
        for (muscle, summary) in &self.muscles {
            writeln!(
                f,
                "  - {muscle}: {}/{}",
                summary.sets_done, self.target_per_muscle
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Stamina per muscle (used / limit):")?;
        for (muscle, summary) in &self.muscles {
            writeln!(
                f,
                "  - {muscle}: {}/{} (remaining: {})",
                summary.stamina_used, summary.stamina_limit, summary.stamina_remaining
            )?;
        }
        Ok(())
    }
}
