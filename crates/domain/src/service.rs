use log::{debug, error};

use crate::{
    CreateError, DeleteError, ReadError, Removal, Workout, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
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

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn delete_workout(&self, index: usize) -> Result<Workout, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(index),
            DeleteError,
            "delete",
            "workout"
        )
    }

    async fn delete_exercise(
        &self,
        workout_index: usize,
        exercise_index: usize,
    ) -> Result<Removal, DeleteError> {
        log_on_error!(
            self.repository
                .delete_exercise(workout_index, exercise_index),
            DeleteError,
            "delete",
            "exercise"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use crate::{
        ChartSeries, DateFormat, Exercise, Reps, SaveError, Set, StorageError,
        ValidationError, Weight, WorkoutDraft, remove_exercise, remove_workout,
    };

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        workouts: RefCell<Vec<Workout>>,
        unavailable: Cell<bool>,
    }

    impl FakeRepository {
        fn check(&self) -> Result<(), StorageError> {
            if self.unavailable.get() {
                return Err(StorageError::Unavailable);
            }
            Ok(())
        }
    }

    impl WorkoutRepository for FakeRepository {
        async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
            self.check()?;
            Ok(self.workouts.borrow().clone())
        }

        async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
            self.check()?;
            self.workouts.borrow_mut().push(workout.clone());
            Ok(workout)
        }

        async fn delete_workout(&self, index: usize) -> Result<Workout, DeleteError> {
            self.check()?;
            remove_workout(&mut self.workouts.borrow_mut(), index).ok_or(DeleteError::NotFound)
        }

        async fn delete_exercise(
            &self,
            workout_index: usize,
            exercise_index: usize,
        ) -> Result<Removal, DeleteError> {
            self.check()?;
            remove_exercise(
                &mut self.workouts.borrow_mut(),
                workout_index,
                exercise_index,
            )
            .ok_or(DeleteError::NotFound)
        }
    }

    #[test]
    fn test_get_workouts() {
        let service = Service::new(FakeRepository::default());
        service.repository().workouts.borrow_mut().push(workout());

        assert_eq!(block_on(service.get_workouts()).unwrap(), vec![workout()]);
    }

    #[test]
    fn test_get_workouts_unavailable() {
        let service = Service::new(FakeRepository::default());
        service.repository().unavailable.set(true);

        assert!(matches!(
            block_on(service.get_workouts()),
            Err(ReadError::Storage(StorageError::Unavailable))
        ));
    }

    #[test]
    fn test_save_draft() {
        let service = Service::new(FakeRepository::default());
        let mut draft = WorkoutDraft::default();
        draft.set_name("Leg Day");
        draft.set_exercise_name(0, "Squat").unwrap();
        draft.set_reps(0, 0, "5").unwrap();
        draft.set_weight(0, 0, "100").unwrap();

        let saved = block_on(service.save_draft(&draft)).unwrap();

        assert_eq!(saved.name, "Leg Day");
        assert_eq!(saved.date.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(
            saved.exercises,
            vec![Exercise {
                name: String::from("Squat"),
                sets: vec![Set::new(Reps::new(5), Weight::new(100.0).unwrap())],
            }]
        );
        assert_eq!(*service.repository().workouts.borrow(), vec![saved]);
    }

    #[test]
    fn test_save_incomplete_draft() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            block_on(service.save_draft(&WorkoutDraft::default())),
            Err(SaveError::Validation(ValidationError::Incomplete))
        ));
        assert!(service.repository().workouts.borrow().is_empty());
    }

    #[test]
    fn test_delete_workout() {
        let service = Service::new(FakeRepository::default());
        service.repository().workouts.borrow_mut().push(workout());

        assert_eq!(block_on(service.delete_workout(0)).unwrap(), workout());
        assert!(matches!(
            block_on(service.delete_workout(0)),
            Err(DeleteError::NotFound)
        ));
    }

    #[test]
    fn test_delete_exercise() {
        let service = Service::new(FakeRepository::default());
        service.repository().workouts.borrow_mut().push(workout());

        assert_eq!(
            block_on(service.delete_exercise(0, 0)).unwrap(),
            Removal::Workout(workout())
        );
        assert!(service.repository().workouts.borrow().is_empty());
    }

    #[test]
    fn test_get_progress() {
        let service = Service::new(FakeRepository::default());

        assert_eq!(
            block_on(service.get_progress(DateFormat::Iso)).unwrap(),
            ChartSeries::placeholder()
        );

        service.repository().workouts.borrow_mut().push(workout());

        assert_eq!(
            block_on(service.get_progress(DateFormat::Iso)).unwrap().data,
            vec![1000.0]
        );
    }

    fn workout() -> Workout {
        Workout {
            name: String::from("Leg Day"),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            exercises: vec![Exercise {
                name: String::from("Squat"),
                sets: vec![
                    Set::new(Reps::new(5), Weight::new(100.0).unwrap()),
                    Set::new(Reps::new(5), Weight::new(100.0).unwrap()),
                ],
            }],
        }
    }
}
