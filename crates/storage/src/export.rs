use std::{collections::BTreeMap, fs, path::Path};

use serde::Serialize;
use setwise_domain as domain;

use crate::JsonError;

/// Weekly plan in the exchange format consumed by the front end.
///
/// Every day appears twice in `schedule`: `day_N` lists the exercises and
/// `day_N_meta` holds the total duration of that day.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub schedule: BTreeMap<String, Day>,
    pub weekly_sets_done: BTreeMap<String, u32>,
    pub weekly_target_per_muscle: u32,
    pub stamina_limit_per_muscle: BTreeMap<String, u32>,
    pub stamina_used: BTreeMap<String, u32>,
    pub stamina_remaining: BTreeMap<String, u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Day {
    Exercises(Vec<Exercise>),
    Meta { total_time_min: u32 },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub time_min: u32,
    pub muscles: Vec<String>,
    pub stamina_costs: BTreeMap<String, u32>,
}

impl From<&domain::ScheduledExercise> for Exercise {
    fn from(value: &domain::ScheduledExercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            sets: value.sets,
            reps: value.reps,
            time_min: value.time,
            muscles: value.muscles.iter().map(ToString::to_string).collect(),
            stamina_costs: by_name(&value.stamina_costs),
        }
    }
}

impl From<&domain::WeeklyPlan> for Plan {
    fn from(value: &domain::WeeklyPlan) -> Self {
        let mut schedule = BTreeMap::new();
        for day in &value.days {
            schedule.insert(
                day.label.clone(),
                Day::Exercises(day.exercises.iter().map(Exercise::from).collect()),
            );
            schedule.insert(
                format!("{}_meta", day.label),
                Day::Meta {
                    total_time_min: day.total_minutes,
                },
            );
        }
        Self {
            schedule,
            weekly_sets_done: by_name(&value.weekly_sets_done()),
            weekly_target_per_muscle: value.target_per_muscle,
            stamina_limit_per_muscle: by_name(&value.stamina_limit_per_muscle()),
            stamina_used: by_name(&value.stamina_used()),
            stamina_remaining: by_name(&value.stamina_remaining()),
        }
    }
}

fn by_name(values: &BTreeMap<domain::Muscle, u32>) -> BTreeMap<String, u32> {
    values.iter().map(|(m, v)| (m.to_string(), *v)).collect()
}

pub fn to_json(plan: &domain::WeeklyPlan) -> Result<String, JsonError> {
    Ok(serde_json::to_string_pretty(&Plan::from(plan))?)
}

pub fn write_plan(plan: &domain::WeeklyPlan, path: impl AsRef<Path>) -> Result<(), JsonError> {
    fs::write(path, to_json(plan)?)?;
    Ok(())
}
