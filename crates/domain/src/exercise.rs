use std::fmt;

use derive_more::{Display, Into};
use thiserror::Error;

use crate::Name;

pub const NUM_SETS: usize = 5;
pub const DEFAULT_REPS: Reps = Reps(12);

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub sets: [SetEntry; NUM_SETS],
    pub note: String,
    pub order: usize,
}

impl Exercise {
    /// Creates an exercise whose sets are all empty.
    #[must_use]
    pub fn new(name: Name, order: usize) -> Self {
        Self {
            name,
            sets: SetKind::ALL.map(SetEntry::new),
            note: String::new(),
            order,
        }
    }

    #[must_use]
    pub fn warmup(&self) -> &SetEntry {
        &self.sets[0]
    }

    pub fn formal(&self) -> impl Iterator<Item = &SetEntry> {
        self.sets[1..].iter()
    }

    /// Index of the first formal set that lacks a weight or reps.
    #[must_use]
    pub fn first_incomplete_set(&self) -> Option<usize> {
        self.sets
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, set)| !set.is_complete())
            .map(|(idx, _)| idx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    Warmup,
    Formal(u8),
}

impl SetKind {
    pub const ALL: [SetKind; NUM_SETS] = [
        SetKind::Warmup,
        SetKind::Formal(1),
        SetKind::Formal(2),
        SetKind::Formal(3),
        SetKind::Formal(4),
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            SetKind::Warmup => String::from("热身"),
            SetKind::Formal(n) => format!("正式{n}"),
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetEntry {
    pub kind: SetKind,
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
    pub note: String,
}

impl SetEntry {
    #[must_use]
    pub fn new(kind: SetKind) -> Self {
        Self {
            kind,
            weight: None,
            reps: None,
            note: String::new(),
        }
    }

    #[must_use]
    pub fn with(kind: SetKind, weight: Weight, reps: Reps) -> Self {
        Self {
            kind,
            weight: Some(weight),
            reps: Some(reps),
            note: String::new(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.weight.is_some() && self.reps.is_some()
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<f32> for Weight {
    type Error = WeightError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be at least 0 kg and below 1000 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}
