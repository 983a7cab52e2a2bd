use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use setwise_domain as domain;

/// Exercise catalog stored as a JSON array.
pub struct JsonCatalog {
    source: Source,
}

enum Source {
    File(PathBuf),
    Text(String),
}

impl JsonCatalog {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }

    pub fn from_json(text: impl Into<String>) -> Self {
        Self {
            source: Source::Text(text.into()),
        }
    }

    fn read_text(&self) -> Result<String, domain::ReadError> {
        match &self.source {
            Source::File(path) => fs::read_to_string(path).map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    domain::StorageError::NotFound(path.display().to_string()).into()
                } else {
                    domain::StorageError::Other(err.into()).into()
                }
            }),
            Source::Text(text) => Ok(text.clone()),
        }
    }
}

impl domain::ExerciseRepository for JsonCatalog {
    fn read_exercises(&self) -> Result<Vec<domain::ExerciseRecord>, domain::ReadError> {
        let exercises: Vec<Exercise> = serde_json::from_str(&self.read_text()?)
            .map_err(|err| domain::ReadError::Other(err.into()))?;
        let total = exercises.len();
        let records = exercises
            .into_iter()
            .filter_map(|e| {
                let id = e.exercise_id.clone();
                domain::ExerciseRecord::try_from(e)
                    .map_err(|err| warn!("skipping exercise \"{id}\": {err}"))
                    .ok()
            })
            .collect::<Vec<_>>();
        debug!("read {} of {total} exercises", records.len());
        Ok(records)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub exercise_id: String,
    pub name: String,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub equipments: Vec<String>,
}

impl From<domain::ExerciseRecord> for Exercise {
    fn from(value: domain::ExerciseRecord) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::ExerciseRecord> for Exercise {
    fn from(value: &domain::ExerciseRecord) -> Self {
        Self {
            exercise_id: value.id.to_string(),
            name: value.name.to_string(),
            target_muscles: value.target_muscles.iter().map(ToString::to_string).collect(),
            secondary_muscles: value
                .secondary_muscles
                .iter()
                .map(ToString::to_string)
                .collect(),
            equipments: value.equipment.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseRecord {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::ExerciseID::new(&value.exercise_id)?,
            name: domain::Name::new(&value.name)?,
            target_muscles: value
                .target_muscles
                .iter()
                .map(|m| domain::Muscle::new(m).map_err(From::from))
                .collect::<Result<Vec<_>, ExerciseError>>()?,
            secondary_muscles: value
                .secondary_muscles
                .iter()
                .map(|m| domain::Muscle::new(m).map_err(From::from))
                .collect::<Result<Vec<_>, ExerciseError>>()?,
            equipment: value
                .equipments
                .iter()
                .map(|e| domain::Equipment::new(e).map_err(From::from))
                .collect::<Result<Vec<_>, ExerciseError>>()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidID(#[from] domain::ExerciseIDError),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidMuscle(#[from] domain::MuscleError),
    #[error(transparent)]
    InvalidEquipment(#[from] domain::EquipmentError),
}
