#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use gymlog_domain::MuscleGroup;

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
pub mod model;

const KEY_HISTORY: &str = "gym_logs";

/// Key under which the history of a muscle group is stored.
#[must_use]
pub fn history_key(group: MuscleGroup) -> String {
    format!("{KEY_HISTORY}/{}", group.id())
}
