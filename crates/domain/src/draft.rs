use chrono::{DateTime, Utc};

use crate::{Exercise, Name, Reps, RepsError, Set, Weight, WeightError, Workout};

/// Editable state of a workout which has not been saved yet.
///
/// Exercises and sets are addressed by their position. Values are kept as entered and only
/// parsed when the draft is turned into a [`Workout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub name: String,
    pub exercises: Vec<ExerciseDraft>,
}

impl Default for WorkoutDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            exercises: vec![ExerciseDraft::default()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: Vec<SetDraft>,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: vec![SetDraft::default()],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetDraft {
    pub reps: String,
    pub weight: String,
}

impl WorkoutDraft {
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_exercise_name(&mut self, exercise: usize, name: &str) -> Result<(), DraftError> {
        self.exercise_mut(exercise)?.name = name.to_string();
        Ok(())
    }

    pub fn set_reps(&mut self, exercise: usize, set: usize, reps: &str) -> Result<(), DraftError> {
        self.set_mut(exercise, set)?.reps = reps.to_string();
        Ok(())
    }

    pub fn set_weight(
        &mut self,
        exercise: usize,
        set: usize,
        weight: &str,
    ) -> Result<(), DraftError> {
        self.set_mut(exercise, set)?.weight = weight.to_string();
        Ok(())
    }

    pub fn add_exercise(&mut self) {
        self.exercises.push(ExerciseDraft::default());
    }

    pub fn add_set(&mut self, exercise: usize) -> Result<(), DraftError> {
        self.exercise_mut(exercise)?.sets.push(SetDraft::default());
        Ok(())
    }

    pub fn remove_exercise(&mut self, exercise: usize) -> Result<ExerciseDraft, DraftError> {
        if exercise >= self.exercises.len() {
            return Err(DraftError::ExerciseNotFound(exercise));
        }
        Ok(self.exercises.remove(exercise))
    }

    pub fn remove_set(&mut self, exercise: usize, set: usize) -> Result<SetDraft, DraftError> {
        let sets = &mut self.exercise_mut(exercise)?.sets;
        if set >= sets.len() {
            return Err(DraftError::SetNotFound(exercise, set));
        }
        Ok(sets.remove(set))
    }

    /// Reset the draft to the state of a freshly opened form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether all required fields are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.exercises.iter().all(|e| {
                !e.name.trim().is_empty()
                    && e
                        .sets
                        .iter()
                        .all(|s| !s.reps.trim().is_empty() && !s.weight.trim().is_empty())
            })
    }

    pub fn to_workout(&self, date: DateTime<Utc>) -> Result<Workout, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::Incomplete);
        }

        if self.exercises.is_empty() {
            return Err(ValidationError::NoExercises);
        }

        let exercises = self
            .exercises
            .iter()
            .enumerate()
            .map(|(exercise_idx, exercise)| -> Result<Exercise, ValidationError> {
                let sets = exercise
                    .sets
                    .iter()
                    .enumerate()
                    .map(|(set_idx, set)| -> Result<Set, ValidationError> {
                        let reps = Reps::try_from(set.reps.as_str()).map_err(|error| {
                            ValidationError::Reps {
                                exercise: exercise_idx,
                                set: set_idx,
                                error,
                            }
                        })?;
                        let weight = Weight::try_from(set.weight.as_str()).map_err(|error| {
                            ValidationError::Weight {
                                exercise: exercise_idx,
                                set: set_idx,
                                error,
                            }
                        })?;
                        Ok(Set::new(reps, weight))
                    })
                    .collect::<Result<Vec<_>, ValidationError>>()?;
                Ok(Exercise {
                    name: Name::new(&exercise.name)
                        .map_err(|_| ValidationError::Incomplete)?
                        .into(),
                    sets,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Workout {
            name: Name::new(&self.name)
                .map_err(|_| ValidationError::Incomplete)?
                .into(),
            date,
            exercises,
        })
    }

    fn exercise_mut(&mut self, exercise: usize) -> Result<&mut ExerciseDraft, DraftError> {
        self.exercises
            .get_mut(exercise)
            .ok_or(DraftError::ExerciseNotFound(exercise))
    }

    fn set_mut(&mut self, exercise: usize, set: usize) -> Result<&mut SetDraft, DraftError> {
        self.exercise_mut(exercise)?
            .sets
            .get_mut(set)
            .ok_or(DraftError::SetNotFound(exercise, set))
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("exercise {0} not found")]
    ExerciseNotFound(usize),
    #[error("set {1} of exercise {0} not found")]
    SetNotFound(usize, usize),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out all fields")]
    Incomplete,
    #[error("Workout must contain at least one exercise")]
    NoExercises,
    #[error("Exercise {}, set {}: {error}", .exercise + 1, .set + 1)]
    Reps {
        exercise: usize,
        set: usize,
        error: RepsError,
    },
    #[error("Exercise {}, set {}: {error}", .exercise + 1, .set + 1)]
    Weight {
        exercise: usize,
        set: usize,
        error: WeightError,
    },
}
