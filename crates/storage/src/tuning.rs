use std::{collections::BTreeMap, fs, path::Path};

use setwise_domain as domain;

use crate::JsonError;

/// Partial tuning file. Omitted fields keep their default value.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    pub minutes_per_set: Option<u32>,
    pub weekly_target_sets: Option<u32>,
    /// Keys are experience levels.
    pub stamina_limits: Option<BTreeMap<String, u32>>,
    pub default_stamina_limit: Option<u32>,
    pub default_reps: Option<u32>,
    pub compound_muscles: Option<Vec<String>>,
    pub compound_equipment: Option<Vec<String>>,
    pub compound_intensity: Option<f64>,
    pub isolation_intensity: Option<f64>,
    pub compound_base_sets: Option<u32>,
    pub isolation_base_sets: Option<u32>,
    pub min_sets: Option<u32>,
    pub max_sets: Option<u32>,
    pub level_set_bonus: Option<f64>,
    pub strength: Option<GoalParameters>,
    pub hypertrophy: Option<GoalParameters>,
    pub endurance: Option<GoalParameters>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GoalParameters {
    pub rep_min: u32,
    pub rep_max: u32,
    pub set_multiplier: f64,
}

impl From<GoalParameters> for domain::GoalParameters {
    fn from(value: GoalParameters) -> Self {
        Self {
            rep_min: value.rep_min,
            rep_max: value.rep_max,
            set_multiplier: value.set_multiplier,
        }
    }
}

impl TryFrom<Tuning> for domain::Tuning {
    type Error = JsonError;

    fn try_from(value: Tuning) -> Result<Self, Self::Error> {
        let default = domain::Tuning::default();
        Ok(Self {
            minutes_per_set: value.minutes_per_set.unwrap_or(default.minutes_per_set),
            weekly_target_sets: value
                .weekly_target_sets
                .unwrap_or(default.weekly_target_sets),
            stamina_limits: match value.stamina_limits {
                Some(limits) => limits
                    .into_iter()
                    .map(|(level, limit)| {
                        level
                            .trim()
                            .parse::<i32>()
                            .map(|l| (l, limit))
                            .map_err(|_| JsonError::InvalidLevel(level))
                    })
                    .collect::<Result<_, _>>()?,
                None => default.stamina_limits,
            },
            default_stamina_limit: value
                .default_stamina_limit
                .unwrap_or(default.default_stamina_limit),
            default_reps: value.default_reps.unwrap_or(default.default_reps),
            compound_muscles: match value.compound_muscles {
                Some(muscles) => muscles
                    .iter()
                    .map(|m| domain::Muscle::new(m).map_err(|err| JsonError::Invalid(err.into())))
                    .collect::<Result<_, _>>()?,
                None => default.compound_muscles,
            },
            compound_equipment: match value.compound_equipment {
                Some(equipment) => equipment
                    .iter()
                    .map(|e| {
                        domain::Equipment::new(e).map_err(|err| JsonError::Invalid(err.into()))
                    })
                    .collect::<Result<_, _>>()?,
                None => default.compound_equipment,
            },
            compound_intensity: value
                .compound_intensity
                .unwrap_or(default.compound_intensity),
            isolation_intensity: value
                .isolation_intensity
                .unwrap_or(default.isolation_intensity),
            compound_base_sets: value
                .compound_base_sets
                .unwrap_or(default.compound_base_sets),
            isolation_base_sets: value
                .isolation_base_sets
                .unwrap_or(default.isolation_base_sets),
            min_sets: value.min_sets.unwrap_or(default.min_sets),
            max_sets: value.max_sets.unwrap_or(default.max_sets),
            level_set_bonus: value.level_set_bonus.unwrap_or(default.level_set_bonus),
            strength: value.strength.map_or(default.strength, From::from),
            hypertrophy: value.hypertrophy.map_or(default.hypertrophy, From::from),
            endurance: value.endurance.map_or(default.endurance, From::from),
        })
    }
}

pub fn read_tuning(path: impl AsRef<Path>) -> Result<domain::Tuning, JsonError> {
    parse_tuning(&fs::read_to_string(path)?)
}

pub fn parse_tuning(text: &str) -> Result<domain::Tuning, JsonError> {
    domain::Tuning::try_from(serde_json::from_str::<Tuning>(text)?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_tuning_empty() {
        assert_eq!(parse_tuning("{}").unwrap(), domain::Tuning::default());
    }

    #[test]
    fn test_parse_tuning() {
        let tuning = parse_tuning(
            r#"{
                "minutes_per_set": 3,
                "weekly_target_sets": 12,
                "stamina_limits": {"0": 60, " 1 ": 90},
                "compound_muscles": ["Quads"],
                "strength": {"rep_min": 1, "rep_max": 5, "set_multiplier": 1.5}
            }"#,
        )
        .unwrap();

        assert_eq!(
            tuning,
            domain::Tuning {
                minutes_per_set: 3,
                weekly_target_sets: 12,
                stamina_limits: BTreeMap::from([(0, 60), (1, 90)]),
                compound_muscles: BTreeSet::from([domain::Muscle::new("quads").unwrap()]),
                strength: domain::GoalParameters {
                    rep_min: 1,
                    rep_max: 5,
                    set_multiplier: 1.5,
                },
                ..domain::Tuning::default()
            }
        );
    }

    #[rstest]
    #[case::unknown_field(r#"{"minutes": 3}"#)]
    #[case::wrong_type(r#"{"minutes_per_set": "3"}"#)]
    fn test_parse_tuning_parse_error(#[case] text: &str) {
        assert!(matches!(parse_tuning(text), Err(JsonError::Parse(_))));
    }

    #[test]
    fn test_parse_tuning_invalid_level() {
        assert!(matches!(
            parse_tuning(r#"{"stamina_limits": {"beginner": 60}}"#),
            Err(JsonError::InvalidLevel(level)) if level == "beginner"
        ));
    }

    #[test]
    fn test_parse_tuning_invalid_muscle() {
        assert!(matches!(
            parse_tuning(r#"{"compound_muscles": [" "]}"#),
            Err(JsonError::Invalid(_))
        ));
    }
}
