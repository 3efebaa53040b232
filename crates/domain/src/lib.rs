#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod draft;
mod error;
mod name;
mod progress;
mod service;
mod workout;

pub use draft::{DraftError, ExerciseDraft, SetDraft, ValidationError, WorkoutDraft};
pub use error::{CreateError, DeleteError, ReadError, StorageError};
pub use name::{Name, NameError};
pub use progress::{ChartSeries, DateFormat, format_date, progress, progress_in};
pub use service::Service;
pub use workout::{
    Exercise, Removal, Reps, RepsError, SaveError, Set, Weight, WeightError, Workout,
    WorkoutRepository, WorkoutService, remove_exercise, remove_workout,
};
