use std::collections::{BTreeMap, VecDeque, vec_deque};

use chrono::{DateTime, Utc};

use crate::{Draft, Exercise, MuscleGroup, ReadError, SaveError, WriteError};

/// Number of sessions kept per muscle group.
pub const HISTORY_CAPACITY: usize = 3;

pub trait HistoryRepository {
    fn read_history(&self, group: MuscleGroup) -> Result<HistoryLog, ReadError>;
    fn write_history(&self, group: MuscleGroup, history: &HistoryLog) -> Result<(), WriteError>;
}

pub trait SessionService {
    fn load_template(&self, group: MuscleGroup) -> Vec<Exercise>;
    fn load_latest(&self, group: MuscleGroup) -> Option<SessionRecord>;
    fn save(
        &self,
        group: MuscleGroup,
        exercises: Vec<Exercise>,
    ) -> Result<SessionRecord, WriteError>;
    fn list_all(&self) -> BTreeMap<MuscleGroup, HistoryLog>;

    /// Latest session of the group, or its template if nothing was saved yet.
    fn open(&self, group: MuscleGroup) -> Draft {
        match self.load_latest(group) {
            Some(record) => Draft::from_record(group, &record),
            None => Draft::new(group, self.load_template(group)),
        }
    }

    fn save_draft(&self, draft: &Draft) -> Result<SessionRecord, SaveError> {
        draft.validate()?;
        Ok(self.save(draft.group(), draft.exercises().to_vec())?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    timestamp: DateTime<Utc>,
    exercises: Vec<Exercise>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, mut exercises: Vec<Exercise>) -> Self {
        exercises.sort_by_key(|e| e.order);
        for (order, exercise) in exercises.iter_mut().enumerate() {
            exercise.order = order;
        }
        Self {
            timestamp,
            exercises,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

/// Sessions of one muscle group, newest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistoryLog(VecDeque<SessionRecord>);

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record as the newest entry and evicts the oldest entries beyond
    /// the capacity.
    pub fn push(&mut self, record: SessionRecord) {
        self.0.push_front(record);
        self.0.truncate(HISTORY_CAPACITY);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&SessionRecord> {
        self.0.front()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SessionRecord> {
        self.0.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, SessionRecord> {
        self.0.iter()
    }
}

/// Takes records ordered newest first; anything beyond the capacity is dropped.
impl FromIterator<SessionRecord> for HistoryLog {
    fn from_iter<T: IntoIterator<Item = SessionRecord>>(iter: T) -> Self {
        Self(iter.into_iter().take(HISTORY_CAPACITY).collect())
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a SessionRecord;
    type IntoIter = vec_deque::Iter<'a, SessionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
