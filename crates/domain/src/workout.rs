use chrono::{DateTime, SubsecRound, Utc};
use derive_more::{Display, Into};

use crate::{
    ChartSeries, CreateError, DateFormat, DeleteError, ReadError, ValidationError, WorkoutDraft,
    progress,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    async fn delete_workout(&self, index: usize) -> Result<Workout, DeleteError>;
    async fn delete_exercise(
        &self,
        workout_index: usize,
        exercise_index: usize,
    ) -> Result<Removal, DeleteError>;

    /// Validate the draft, stamp it with the current time and append it to the collection.
    ///
    /// The timestamp is truncated to milliseconds, the precision in which dates are persisted.
    /// The draft is left untouched. Clearing it after a successful save is up to the caller.
    async fn save_draft(&self, draft: &WorkoutDraft) -> Result<Workout, SaveError> {
        let workout = draft.to_workout(Utc::now().trunc_subsecs(3))?;
        Ok(self.create_workout(workout).await?)
    }

    async fn get_progress(&self, format: DateFormat) -> Result<ChartSeries, ReadError> {
        Ok(progress(&self.get_workouts().await?, format))
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    async fn delete_workout(&self, index: usize) -> Result<Workout, DeleteError>;
    async fn delete_exercise(
        &self,
        workout_index: usize,
        exercise_index: usize,
    ) -> Result<Removal, DeleteError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Create(#[from] CreateError),
}

/// A saved workout.
///
/// Names and values are kept exactly as stored. Input is validated by [`WorkoutDraft`] before
/// it becomes a workout, but collections written by earlier versions may contain names
/// consisting of whitespace or negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub name: String,
    pub date: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Sum of reps × weight over all sets, never below zero.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .map(Exercise::volume)
            .sum::<f64>()
            .max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: Vec<Set>,
}

impl Exercise {
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(Set::volume).sum()
    }
}

/// A performed set.
///
/// A value of `None` stands for a stored value which is not a number. Such values count as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Set {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
}

impl Set {
    #[must_use]
    pub fn new(reps: Reps, weight: Weight) -> Self {
        Self {
            reps: Some(reps),
            weight: Some(weight),
        }
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        match (self.reps, self.weight) {
            #[allow(clippy::cast_precision_loss)]
            (Some(reps), Some(weight)) => reps.0 as f64 * weight.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(i64);

impl Reps {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Ok(Reps::new(i64::from(parsed_value))),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepsError {
    #[error("Reps must be a non-negative integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f64>() {
            Ok(parsed_value) if parsed_value < 0.0 => Err(WeightError::Negative),
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be a decimal number")]
    ParseError,
}

/// The result of deleting an exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Exercise(Exercise),
    /// The exercise was the last one, so its whole workout was removed.
    Workout(Workout),
}

/// Remove the workout at `index`, keeping the order of the remaining workouts.
pub fn remove_workout(workouts: &mut Vec<Workout>, index: usize) -> Option<Workout> {
    if index >= workouts.len() {
        return None;
    }
    Some(workouts.remove(index))
}

/// Remove an exercise from a workout.
///
/// A workout never ends up without exercises: if the removed exercise was its last one, the
/// workout is removed as a whole and returned as it was before the removal.
pub fn remove_exercise(
    workouts: &mut Vec<Workout>,
    workout_index: usize,
    exercise_index: usize,
) -> Option<Removal> {
    let workout = workouts.get_mut(workout_index)?;

    if exercise_index >= workout.exercises.len() {
        return None;
    }

    let exercise = workout.exercises.remove(exercise_index);

    if workout.exercises.is_empty() {
        let mut workout = workouts.remove(workout_index);
        workout.exercises.push(exercise);
        return Some(Removal::Workout(workout));
    }

    Some(Removal::Exercise(exercise))
}
