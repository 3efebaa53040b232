use chrono::{DateTime, SecondsFormat};
use gymlog_domain as domain;
use log::debug;
use serde_json::Number;

use crate::{JsonStorage, Key, KeyValueStore};

impl<S: KeyValueStore> JsonStorage<S> {
    async fn read_collection(&self) -> Result<Vec<domain::Workout>, domain::StorageError> {
        let workouts = self
            .read::<Vec<Workout>>(Key::Workouts)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(domain::Workout::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| domain::StorageError::InvalidData(err.into()))?;
        debug!("read {} workouts", workouts.len());
        Ok(workouts)
    }

    async fn write_collection(
        &self,
        workouts: &[domain::Workout],
    ) -> Result<(), domain::StorageError> {
        self.write(
            Key::Workouts,
            &workouts.iter().map(Workout::from).collect::<Vec<_>>(),
        )
        .await
    }
}

impl<S: KeyValueStore> domain::WorkoutRepository for JsonStorage<S> {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self.read_collection().await?)
    }

    async fn create_workout(
        &self,
        workout: domain::Workout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = self.read_collection().await?;
        workouts.push(workout.clone());
        self.write_collection(&workouts).await?;
        Ok(workout)
    }

    async fn delete_workout(&self, index: usize) -> Result<domain::Workout, domain::DeleteError> {
        let mut workouts = self.read_collection().await?;
        let workout =
            domain::remove_workout(&mut workouts, index).ok_or(domain::DeleteError::NotFound)?;
        self.write_collection(&workouts).await?;
        Ok(workout)
    }

    async fn delete_exercise(
        &self,
        workout_index: usize,
        exercise_index: usize,
    ) -> Result<domain::Removal, domain::DeleteError> {
        let mut workouts = self.read_collection().await?;
        let removal = domain::remove_exercise(&mut workouts, workout_index, exercise_index)
            .ok_or(domain::DeleteError::NotFound)?;
        self.write_collection(&workouts).await?;
        Ok(removal)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
struct Workout {
    name: String,
    date: String,
    exercises: Vec<Exercise>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            name: value.name.clone(),
            date: value.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = InvalidWorkout;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            date: DateTime::parse_from_rfc3339(&value.date)?.to_utc(),
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
struct Exercise {
    name: String,
    sets: Vec<Set>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.clone(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = InvalidWorkout;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            sets: value
                .sets
                .into_iter()
                .map(domain::Set::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

// `null` values stem from numbers which failed to parse when the set was entered. Numbers are
// kept as written, so rewriting the collection does not alter workouts which were not modified.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
struct Set {
    reps: Option<Number>,
    weight: Option<Number>,
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            reps: value.reps.map(|reps| Number::from(i64::from(reps))),
            weight: value.weight.and_then(|weight| number(f64::from(weight))),
        }
    }
}

impl TryFrom<Set> for domain::Set {
    type Error = InvalidWorkout;

    fn try_from(value: Set) -> Result<Self, Self::Error> {
        Ok(Self {
            reps: value.reps.as_ref().map(reps).transpose()?,
            weight: value.weight.as_ref().map(weight).transpose()?,
        })
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Encode a number like `JSON.stringify`: integral values without fraction, non-finite values as `null`.
#[allow(clippy::cast_possible_truncation)]
fn number(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

fn reps(value: &Number) -> Result<domain::Reps, InvalidWorkout> {
    value
        .as_i64()
        .map(domain::Reps::new)
        .ok_or_else(|| InvalidWorkout::Reps(value.clone()))
}

fn weight(value: &Number) -> Result<domain::Weight, InvalidWorkout> {
    value
        .as_f64()
        .and_then(|weight| domain::Weight::new(weight).ok())
        .ok_or_else(|| InvalidWorkout::Weight(value.clone()))
}

#[derive(thiserror::Error, Debug)]
enum InvalidWorkout {
    #[error("invalid date: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("invalid reps: {0}")]
    Reps(Number),
    #[error("invalid weight: {0}")]
    Weight(Number),
}
