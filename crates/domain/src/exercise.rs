use std::collections::BTreeSet;

use derive_more::{AsRef, Display};

use crate::ReadError;

const MAX_NAME_LENGTH: usize = 128;

/// Source of exercise records.
///
/// Implementations load the static catalog once; the planner never writes back.
pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: ExerciseID,
    pub name: Name,
    pub target_muscles: Vec<Muscle>,
    pub secondary_muscles: Vec<Muscle>,
    pub equipment: Vec<Equipment>,
}

impl ExerciseRecord {
    /// Target muscles in catalog order with duplicates removed.
    #[must_use]
    pub fn distinct_target_muscles(&self) -> Vec<Muscle> {
        let mut seen = BTreeSet::new();
        self.target_muscles
            .iter()
            .filter(|m| seen.insert(*m))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn targets_any(&self, muscles: &BTreeSet<Muscle>) -> bool {
        self.target_muscles.iter().any(|m| muscles.contains(m))
    }

    /// An exercise without listed equipment is always available.
    #[must_use]
    pub fn is_available_with(&self, equipment: &BTreeSet<Equipment>) -> bool {
        self.equipment.is_empty() || self.equipment.iter().any(|e| equipment.contains(e))
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl ExerciseID {
    pub fn new(value: &str) -> Result<Self, ExerciseIDError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ExerciseIDError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseIDError {
    #[error("Exercise ID must not be empty")]
    Empty,
}

/// Display name of an exercise with runs of whitespace collapsed.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, NameError> {
        let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");

        match collapsed.chars().count() {
            0 => Err(NameError::Empty),
            len if len > MAX_NAME_LENGTH => Err(NameError::TooLong(len)),
            _ => Ok(Self(collapsed)),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Exercise name must not be empty")]
    Empty,
    #[error("Exercise name must not exceed 128 characters ({0})")]
    TooLong(usize),
}

/// Muscle name as used by the catalog, normalized to lower case.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Muscle(String);

impl Muscle {
    pub fn new(value: &str) -> Result<Self, MuscleError> {
        let normalized = normalize(value);

        if normalized.is_empty() {
            return Err(MuscleError::Empty);
        }

        Ok(Self(normalized))
    }
}

impl TryFrom<&str> for Muscle {
    type Error = MuscleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Muscle::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleError {
    #[error("Muscle must not be empty")]
    Empty,
}

/// Equipment tag as used by the catalog, normalized to lower case.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Equipment(String);

impl Equipment {
    pub fn new(value: &str) -> Result<Self, EquipmentError> {
        let normalized = normalize(value);

        if normalized.is_empty() {
            return Err(EquipmentError::Empty);
        }

        Ok(Self(normalized))
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Equipment::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("Equipment must not be empty")]
    Empty,
}

fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
