use std::collections::BTreeMap;

use chrono::Utc;
use log::{debug, error, info};

use crate::{
    Config, Exercise, HistoryLog, HistoryRepository, MuscleGroup, ReadError, SessionRecord,
    SessionService, WriteError,
};

pub struct Service<R> {
    repository: R,
    config: Config,
}

impl<R> Service<R> {
    pub fn new(repository: R, config: Config) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $group: expr) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} history of {}: {err}", $action, $group);
                }
                _ => {
                    error!("failed to {} history of {}: {err}", $action, $group);
                }
            },
        }
        result
    }};
}

impl<R: HistoryRepository> Service<R> {
    /// A history that cannot be read is treated as empty.
    fn history(&self, group: MuscleGroup) -> HistoryLog {
        log_on_error!(
            self.repository.read_history(group),
            ReadError,
            "read",
            group
        )
        .unwrap_or_default()
    }
}

impl<R: HistoryRepository> SessionService for Service<R> {
    fn load_template(&self, group: MuscleGroup) -> Vec<Exercise> {
        self.config.template(group)
    }

    fn load_latest(&self, group: MuscleGroup) -> Option<SessionRecord> {
        self.history(group).latest().cloned()
    }

    fn save(
        &self,
        group: MuscleGroup,
        exercises: Vec<Exercise>,
    ) -> Result<SessionRecord, WriteError> {
        let record = SessionRecord::new(Utc::now(), exercises);
        let mut history = self.history(group);
        history.push(record.clone());
        log_on_error!(
            self.repository.write_history(group, &history),
            WriteError,
            "write",
            group
        )?;
        info!(
            "saved session of {group} with {} exercises",
            record.exercises().len()
        );
        Ok(record)
    }

    fn list_all(&self) -> BTreeMap<MuscleGroup, HistoryLog> {
        self.config
            .groups()
            .map(|group| (group, self.history(group)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{Draft, Name, Reps, SaveError, StorageError, ValidationError, Weight};

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        histories: RefCell<BTreeMap<MuscleGroup, HistoryLog>>,
        corrupt: Option<MuscleGroup>,
        full: bool,
        writes: RefCell<usize>,
    }

    impl HistoryRepository for FakeRepository {
        fn read_history(&self, group: MuscleGroup) -> Result<HistoryLog, ReadError> {
            if self.corrupt == Some(group) {
                return Err(ReadError::Corrupt("expected value".to_string()));
            }
            Ok(self
                .histories
                .borrow()
                .get(&group)
                .cloned()
                .unwrap_or_default())
        }

        fn write_history(
            &self,
            group: MuscleGroup,
            history: &HistoryLog,
        ) -> Result<(), WriteError> {
            if self.full {
                return Err(WriteError::Storage(StorageError::QuotaExceeded));
            }
            *self.writes.borrow_mut() += 1;
            self.histories.borrow_mut().insert(group, history.clone());
            Ok(())
        }
    }

    fn service(repository: FakeRepository) -> Service<FakeRepository> {
        Service::new(repository, Config::default())
    }

    fn exercises(name: &str) -> Vec<Exercise> {
        let mut exercise = Exercise::new(Name::new(name).unwrap(), 0);
        for set in &mut exercise.sets[1..] {
            set.weight = Some(Weight::new(50.0).unwrap());
            set.reps = Some(Reps::new(8).unwrap());
        }
        vec![exercise]
    }

    fn first_names(history: &HistoryLog) -> Vec<String> {
        history
            .iter()
            .map(|r| r.exercises()[0].name.to_string())
            .collect()
    }

    #[test]
    fn test_load_template() {
        let service = service(FakeRepository::default());
        assert_eq!(
            service.load_template(MuscleGroup::Legs),
            Config::default().template(MuscleGroup::Legs)
        );
    }

    #[test]
    fn test_load_latest_without_history() {
        let service = service(FakeRepository::default());
        assert_eq!(service.load_latest(MuscleGroup::Chest), None);
    }

    #[test]
    fn test_load_latest_of_corrupt_history() {
        let service = service(FakeRepository {
            corrupt: Some(MuscleGroup::Chest),
            ..FakeRepository::default()
        });
        assert_eq!(service.load_latest(MuscleGroup::Chest), None);
    }

    #[test]
    fn test_save_keeps_three_most_recent() {
        let service = service(FakeRepository::default());

        for name in ["1", "2", "3", "4"] {
            service.save(MuscleGroup::Back, exercises(name)).unwrap();
        }

        let all = service.list_all();
        assert_eq!(first_names(&all[&MuscleGroup::Back]), vec!["4", "3", "2"]);
        assert_eq!(
            service.load_latest(MuscleGroup::Back).unwrap().exercises(),
            exercises("4").as_slice()
        );
        assert!(all[&MuscleGroup::Chest].is_empty());
    }

    #[test]
    fn test_save_keeps_groups_apart() {
        let service = service(FakeRepository::default());

        service.save(MuscleGroup::Back, exercises("A")).unwrap();
        service.save(MuscleGroup::Legs, exercises("B")).unwrap();

        let all = service.list_all();
        assert_eq!(all.len(), 5);
        assert_eq!(first_names(&all[&MuscleGroup::Back]), vec!["A"]);
        assert_eq!(first_names(&all[&MuscleGroup::Legs]), vec!["B"]);
    }

    #[test]
    fn test_save_replaces_corrupt_history() {
        let repository = FakeRepository {
            corrupt: Some(MuscleGroup::Arms),
            ..FakeRepository::default()
        };
        let service = service(repository);

        service.save(MuscleGroup::Arms, exercises("A")).unwrap();

        assert_eq!(*service.repository.writes.borrow(), 1);
        assert_eq!(
            first_names(&service.repository.histories.borrow()[&MuscleGroup::Arms]),
            vec!["A"]
        );
    }

    #[test]
    fn test_save_write_failure() {
        let service = service(FakeRepository {
            full: true,
            ..FakeRepository::default()
        });

        assert!(matches!(
            service.save(MuscleGroup::Chest, exercises("A")),
            Err(WriteError::Storage(StorageError::QuotaExceeded))
        ));
        assert_eq!(service.load_latest(MuscleGroup::Chest), None);
    }

    #[test]
    fn test_open() {
        let service = service(FakeRepository::default());

        let draft = service.open(MuscleGroup::Shoulders);
        assert_eq!(
            draft,
            Draft::new(
                MuscleGroup::Shoulders,
                Config::default().template(MuscleGroup::Shoulders)
            )
        );

        service
            .save(MuscleGroup::Shoulders, exercises("A"))
            .unwrap();
        let draft = service.open(MuscleGroup::Shoulders);
        assert_eq!(draft.exercises(), exercises("A").as_slice());
    }

    #[test]
    fn test_save_draft_refuses_incomplete_draft() {
        let service = service(FakeRepository::default());
        let mut draft = Draft::new(MuscleGroup::Chest, exercises("A"));
        draft.exercise_mut(0).unwrap().sets[4].reps = None;

        assert!(matches!(
            service.save_draft(&draft),
            Err(SaveError::Validation(ValidationError::IncompleteSet { set: 4, .. }))
        ));
        assert_eq!(*service.repository.writes.borrow(), 0);
    }

    #[test]
    fn test_save_draft_with_empty_warmup() {
        let service = service(FakeRepository::default());
        let draft = Draft::new(MuscleGroup::Chest, exercises("A"));

        let record = service.save_draft(&draft).unwrap();

        assert_eq!(record.exercises(), draft.exercises());
        assert_eq!(*service.repository.writes.borrow(), 1);
    }

    #[test]
    fn test_save_draft_of_template() {
        let service = service(FakeRepository::default());
        let draft = service.open(MuscleGroup::Legs);

        assert!(service.save_draft(&draft).is_ok());
        assert_eq!(
            service.load_latest(MuscleGroup::Legs).unwrap().exercises(),
            draft.exercises()
        );
    }
}
