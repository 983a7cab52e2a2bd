use log::{debug, error, info};

use crate::{
    ExerciseRepository, PlanError, Profile, ReadError, StorageError, Tuning, WeeklyPlan,
    build_items, optimize,
};

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NotFound(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

pub struct Service<R> {
    repository: R,
}

impl<R: ExerciseRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Read the catalog and plan a week for the given profile.
    pub fn generate_plan(
        &self,
        profile: &Profile,
        num_days: u32,
        time_per_session: u32,
        tuning: &Tuning,
    ) -> Result<WeeklyPlan, PlanError> {
        let exercises = log_on_error!(self.repository.read_exercises(), "read", "exercises")?;
        let items = build_items(&exercises, profile, tuning);
        info!(
            "{} of {} exercises schedulable for level {}, goal {}",
            items.len(),
            exercises.len(),
            profile.level,
            profile.goal
        );
        optimize(&items, num_days, time_per_session, profile.level, tuning)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ExerciseID, ExerciseRecord, InvalidArgument, Muscle, Name};

    struct Catalog {
        exercises: Vec<ExerciseRecord>,
        reads: Cell<usize>,
    }

    impl ExerciseRepository for Catalog {
        fn read_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.exercises.clone())
        }
    }

    struct Unavailable;

    impl ExerciseRepository for Unavailable {
        fn read_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError> {
            Err(StorageError::NotFound("exercises.json".to_string()).into())
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            exercises: vec![ExerciseRecord {
                id: ExerciseID::new("push-up").unwrap(),
                name: Name::new("Push-up").unwrap(),
                target_muscles: vec![Muscle::new("pectorals").unwrap()],
                secondary_muscles: vec![Muscle::new("triceps").unwrap()],
                equipment: vec![],
            }],
            reads: Cell::new(0),
        }
    }

    #[test]
    fn test_generate_plan() {
        let service = Service::new(catalog());
        let plan = service
            .generate_plan(&Profile::default(), 2, 60, &Tuning::default())
            .unwrap();

        assert_eq!(service.repository.reads.get(), 1);
        assert_eq!(plan.days.len(), 2);
        assert_eq!(
            plan.days
                .iter()
                .map(|d| d.exercises.len())
                .collect::<Vec<_>>(),
            vec![1, 1]
        );
        assert_eq!(plan.weekly_sets_done()[&Muscle::new("pectorals").unwrap()], 8);
    }

    #[test]
    fn test_generate_plan_read_error() {
        let service = Service::new(Unavailable);

        assert!(matches!(
            service.generate_plan(&Profile::default(), 2, 60, &Tuning::default()),
            Err(PlanError::Read(ReadError::Storage(StorageError::NotFound(_))))
        ));
    }

    #[test]
    fn test_generate_plan_invalid_argument() {
        let service = Service::new(catalog());

        assert!(matches!(
            service.generate_plan(&Profile::default(), 0, 60, &Tuning::default()),
            Err(PlanError::InvalidArgument(InvalidArgument::NoTrainingDays))
        ));
    }
}
