use std::{collections::BTreeSet, fs, path::Path};

use log::warn;
use setwise_domain as domain;

use crate::JsonError;

/// User profile as entered in the front end.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub injuries: Vec<String>,
    /// Missing means no equipment constraint.
    #[serde(default)]
    pub equipments: Option<Vec<String>>,
}

fn default_level() -> i32 {
    domain::Level::INTERMEDIATE.value()
}

impl From<Profile> for domain::Profile {
    fn from(value: Profile) -> Self {
        Self {
            level: domain::Level::from(value.level),
            goal: domain::Goal::from(value.goal.as_str()),
            age: value.age,
            injuries: value
                .injuries
                .iter()
                .filter_map(|m| {
                    domain::Muscle::new(m)
                        .map_err(|err| warn!("ignoring injury \"{m}\": {err}"))
                        .ok()
                })
                .collect::<BTreeSet<_>>(),
            equipment: value.equipments.map(|equipments| {
                equipments
                    .iter()
                    .filter_map(|e| {
                        domain::Equipment::new(e)
                            .map_err(|err| warn!("ignoring equipment \"{e}\": {err}"))
                            .ok()
                    })
                    .collect::<BTreeSet<_>>()
            }),
        }
    }
}

impl From<&domain::Profile> for Profile {
    fn from(value: &domain::Profile) -> Self {
        Self {
            level: value.level.value(),
            goal: value.goal.to_string(),
            age: value.age,
            injuries: value.injuries.iter().map(ToString::to_string).collect(),
            equipments: value
                .equipment
                .as_ref()
                .map(|e| e.iter().map(ToString::to_string).collect()),
        }
    }
}

pub fn read_profile(path: impl AsRef<Path>) -> Result<domain::Profile, JsonError> {
    parse_profile(&fs::read_to_string(path)?)
}

pub fn parse_profile(text: &str) -> Result<domain::Profile, JsonError> {
    Ok(serde_json::from_str::<Profile>(text)?.into())
}
