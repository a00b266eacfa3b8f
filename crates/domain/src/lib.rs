#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod draft;
pub mod error;
pub mod exercise;
pub mod muscle_group;
pub mod name;
pub mod range;
pub mod service;
pub mod session;

pub use config::{Config, GroupConfig, TemplateEntry, TemplateWeights};
pub use draft::{Draft, ExerciseMut, ValidationError};
pub use error::{ReadError, SaveError, StorageError, WriteError};
pub use exercise::{
    DEFAULT_REPS, Exercise, NUM_SETS, Reps, RepsError, SetEntry, SetKind, Weight, WeightError,
};
pub use muscle_group::MuscleGroup;
pub use name::{MAX_NAME_LEN, Name, NameError};
pub use range::WeightPair;
pub use service::Service;
pub use session::{HISTORY_CAPACITY, HistoryLog, HistoryRepository, SessionRecord, SessionService};
