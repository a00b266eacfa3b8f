use gymlog_domain::{Draft, HistoryLog, MuscleGroup, SaveError, SessionRecord, SessionService};
use log::{info, warn};

/// Editing state of the workout screen.
///
/// The UI renders and changes the draft through this type; the draft always
/// carries the muscle group it belongs to.
pub struct Workout<S> {
    service: S,
    draft: Option<Draft>,
}

impl<S: SessionService> Workout<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            draft: None,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Opens the latest session of the group, or its template.
    pub fn start(&mut self, group: MuscleGroup) -> &mut Draft {
        self.draft.insert(self.service.open(group))
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    pub fn group(&self) -> Option<MuscleGroup> {
        self.draft.as_ref().map(Draft::group)
    }

    /// Saves the draft and discards it. If saving fails, the draft is kept so
    /// that no input is lost.
    pub fn save(&mut self) -> Result<SessionRecord, WorkoutError> {
        let draft = self.draft.as_ref().ok_or(WorkoutError::NoDraft)?;
        match self.service.save_draft(draft) {
            Ok(record) => {
                info!("saved workout of {}", draft.group());
                self.draft = None;
                Ok(record)
            }
            Err(err) => {
                warn!("failed to save workout of {}: {err}", draft.group());
                Err(err.into())
            }
        }
    }

    /// Stored sessions of the current group, newest first.
    pub fn history(&self) -> HistoryLog {
        self.group()
            .and_then(|group| self.service.list_all().remove(&group))
            .unwrap_or_default()
    }

    /// Replaces the draft by a stored session of the current group.
    pub fn load_record(&mut self, index: usize) -> Result<&mut Draft, WorkoutError> {
        let group = self.group().ok_or(WorkoutError::NoDraft)?;
        let history = self.history();
        let record = history
            .get(index)
            .ok_or(WorkoutError::NoSuchRecord(index))?;
        Ok(self.draft.insert(Draft::from_record(group, record)))
    }

    /// Discards the draft without saving.
    pub fn leave(&mut self) {
        self.draft = None;
    }
}

#[derive(thiserror::Error, Debug)]
pub enum WorkoutError {
    #[error("no workout in progress")]
    NoDraft,
    #[error("no stored session at position {0}")]
    NoSuchRecord(usize),
    #[error(transparent)]
    Save(#[from] SaveError),
}
