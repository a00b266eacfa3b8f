#![warn(clippy::pedantic)]

pub mod log;
pub mod workout;

pub use workout::{Workout, WorkoutError};
