//! Serialized form of the session history.
//!
//! The history of a muscle group is stored as a JSON array of session
//! records, newest first. Empty weights and reps are stored as `null`.

use chrono::{DateTime, Utc};
use gymlog_domain as domain;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub timestamp: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub order: usize,
    #[serde(default)]
    pub note: String,
    pub sets: Vec<Set>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Set {
    #[serde(rename = "type")]
    pub kind: String,
    pub weight: Option<f32>,
    pub reps: Option<u32>,
    #[serde(default)]
    pub note: String,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("invalid exercise name: {0}")]
    Name(#[from] domain::NameError),
    #[error("invalid weight: {0}")]
    Weight(#[from] domain::WeightError),
    #[error("invalid reps: {0}")]
    Reps(#[from] domain::RepsError),
    #[error("exercise \"{name}\" has {count} sets instead of {}", domain::NUM_SETS)]
    SetCount { name: String, count: usize },
}

impl From<&domain::SessionRecord> for SessionRecord {
    fn from(value: &domain::SessionRecord) -> Self {
        Self {
            timestamp: value.timestamp(),
            exercises: value.exercises().iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<SessionRecord> for domain::SessionRecord {
    type Error = ModelError;

    fn try_from(value: SessionRecord) -> Result<Self, Self::Error> {
        Ok(domain::SessionRecord::new(
            value.timestamp,
            value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            name: value.name.to_string(),
            order: value.order,
            note: value.note.clone(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ModelError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let set_count_error = || ModelError::SetCount {
            name: value.name.clone(),
            count: value.sets.len(),
        };
        if value.sets.len() != domain::NUM_SETS {
            return Err(set_count_error());
        }
        let sets = value
            .sets
            .iter()
            .cloned()
            .zip(domain::SetKind::ALL)
            .map(|(set, kind)| set.into_domain(kind))
            .collect::<Result<Vec<_>, _>>()?;
        let sets = <[domain::SetEntry; domain::NUM_SETS]>::try_from(sets)
            .map_err(|_| set_count_error())?;
        Ok(domain::Exercise {
            name: domain::Name::new(&value.name)?,
            sets,
            note: value.note,
            order: value.order,
        })
    }
}

impl From<&domain::SetEntry> for Set {
    fn from(value: &domain::SetEntry) -> Self {
        Self {
            kind: value.kind.label(),
            weight: value.weight.map(f32::from),
            reps: value.reps.map(u32::from),
            note: value.note.clone(),
        }
    }
}

impl Set {
    /// The kind of a set is given by its position; the stored label is only
    /// informative.
    fn into_domain(self, kind: domain::SetKind) -> Result<domain::SetEntry, ModelError> {
        Ok(domain::SetEntry {
            kind,
            weight: self.weight.map(domain::Weight::new).transpose()?,
            reps: self.reps.map(domain::Reps::new).transpose()?,
            note: self.note,
        })
    }
}

#[must_use]
pub fn encode(history: &domain::HistoryLog) -> Vec<SessionRecord> {
    history.iter().map(SessionRecord::from).collect()
}

pub fn decode(records: Vec<SessionRecord>) -> Result<domain::HistoryLog, ModelError> {
    records
        .into_iter()
        .map(domain::SessionRecord::try_from)
        .collect()
}
