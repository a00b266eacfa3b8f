use std::ops::{Deref, DerefMut};

use thiserror::Error;

use crate::{Exercise, MuscleGroup, Name, SessionRecord};

/// The exercises of a muscle group while they are being edited.
///
/// Every operation that changes the sequence renumbers the exercises, so that
/// their `order` always equals their position.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    group: MuscleGroup,
    exercises: Vec<Exercise>,
}

impl Draft {
    #[must_use]
    pub fn new(group: MuscleGroup, mut exercises: Vec<Exercise>) -> Self {
        exercises.sort_by_key(|e| e.order);
        let mut draft = Self { group, exercises };
        draft.renumber();
        draft
    }

    #[must_use]
    pub fn from_record(group: MuscleGroup, record: &SessionRecord) -> Self {
        Self::new(group, record.exercises().to_vec())
    }

    #[must_use]
    pub fn group(&self) -> MuscleGroup {
        self.group
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Gives access to names, sets and notes. The position of an exercise can
    /// only be changed by the reordering operations; a changed `order` is
    /// reset when the returned guard is dropped.
    pub fn exercise_mut(&mut self, index: usize) -> Option<ExerciseMut<'_>> {
        self.exercises.get_mut(index).map(|exercise| ExerciseMut {
            order: exercise.order,
            exercise,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn move_up(&mut self, index: usize) {
        if index == 0 || index >= self.exercises.len() {
            return;
        }
        self.exercises.swap(index - 1, index);
        self.renumber();
    }

    pub fn move_down(&mut self, index: usize) {
        if index >= self.exercises.len().saturating_sub(1) {
            return;
        }
        self.exercises.swap(index, index + 1);
        self.renumber();
    }

    pub fn remove(&mut self, index: usize) -> Option<Exercise> {
        if index >= self.exercises.len() {
            return None;
        }
        let exercise = self.exercises.remove(index);
        self.renumber();
        Some(exercise)
    }

    pub fn insert(&mut self, index: usize, exercise: Exercise) {
        let index = index.min(self.exercises.len());
        self.exercises.insert(index, exercise);
        self.renumber();
    }

    /// Appends an exercise with empty sets.
    pub fn add(&mut self, name: Name) {
        self.exercises.push(Exercise::new(name, self.exercises.len()));
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exercises.is_empty() {
            return Err(ValidationError::NoExercises);
        }

        for exercise in &self.exercises {
            if let Some(set) = exercise.first_incomplete_set() {
                return Err(ValidationError::IncompleteSet {
                    exercise: exercise.name.to_string(),
                    set,
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn into_exercises(self) -> Vec<Exercise> {
        self.exercises
    }

    fn renumber(&mut self) {
        for (order, exercise) in self.exercises.iter_mut().enumerate() {
            exercise.order = order;
        }
    }
}

/// Mutable access to an exercise of a [`Draft`] that keeps its position.
pub struct ExerciseMut<'a> {
    exercise: &'a mut Exercise,
    order: usize,
}

impl Deref for ExerciseMut<'_> {
    type Target = Exercise;

    fn deref(&self) -> &Exercise {
        self.exercise
    }
}

impl DerefMut for ExerciseMut<'_> {
    fn deref_mut(&mut self) -> &mut Exercise {
        self.exercise
    }
}

impl Drop for ExerciseMut<'_> {
    fn drop(&mut self) {
        self.exercise.order = self.order;
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least one exercise is required")]
    NoExercises,
    #[error("Weight and reps of set {} of \"{exercise}\" must be completed", .set + 1)]
    IncompleteSet { exercise: String, set: usize },
}
