use std::{collections::BTreeSet, fmt};

use derive_more::Into;
use log::warn;

use crate::{Equipment, Muscle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub level: Level,
    pub goal: Goal,
    pub age: Option<u32>,
    pub injuries: BTreeSet<Muscle>,
    /// `None` means no equipment constraint.
    pub equipment: Option<BTreeSet<Equipment>>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            level: Level::INTERMEDIATE,
            goal: Goal::Hypertrophy,
            age: None,
            injuries: BTreeSet::new(),
            equipment: None,
        }
    }
}

/// Experience level.
///
/// Any value is accepted. Values outside of 0 to 4 are treated as unknown and
/// resolve to the default tuning.
#[derive(Into, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const BEGINNER: Level = Level(0);
    pub const BASIC: Level = Level(1);
    pub const INTERMEDIATE: Level = Level(2);
    pub const ADVANCED: Level = Level(3);
    pub const PROFESSIONAL: Level = Level(4);

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub fn known(self) -> Option<u8> {
        u8::try_from(self.0).ok().filter(|l| *l <= 4)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self.known() {
            Some(0) => "Beginner",
            Some(1) => "Basic",
            Some(2) => "Intermediate",
            Some(3) => "Advanced",
            Some(4) => "Professional",
            _ => "Unknown",
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    Strength,
    #[default]
    Hypertrophy,
    Endurance,
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "strength" | "fuerza" => Goal::Strength,
            "hypertrophy" | "hipertrofia" => Goal::Hypertrophy,
            "endurance" | "resistencia" => Goal::Endurance,
            other => {
                warn!("unknown goal \"{other}\", falling back to hypertrophy");
                Goal::Hypertrophy
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Goal::Strength => "strength",
                Goal::Hypertrophy => "hypertrophy",
                Goal::Endurance => "endurance",
            }
        )
    }
}
