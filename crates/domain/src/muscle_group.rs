use std::{fmt, slice::Iter, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
}

impl MuscleGroup {
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 5] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
        ];
        MUSCLE_GROUPS.iter()
    }

    /// Stable identifier, used as part of the storage key.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MuscleGroup {
    type Err = UnknownMuscleGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MuscleGroup::iter()
            .find(|group| group.id() == s)
            .copied()
            .ok_or_else(|| UnknownMuscleGroup(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown muscle group: {0}")]
pub struct UnknownMuscleGroup(String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(MuscleGroup::Chest, "chest")]
    #[case(MuscleGroup::Back, "back")]
    #[case(MuscleGroup::Legs, "legs")]
    #[case(MuscleGroup::Shoulders, "shoulders")]
    #[case(MuscleGroup::Arms, "arms")]
    fn test_muscle_group_id(#[case] group: MuscleGroup, #[case] id: &str) {
        assert_eq!(group.id(), id);
        assert_eq!(group.to_string(), id);
        assert_eq!(id.parse::<MuscleGroup>(), Ok(group));
    }

    #[test]
    fn test_muscle_group_from_str_unknown() {
        assert_eq!(
            "胸".parse::<MuscleGroup>(),
            Err(UnknownMuscleGroup("胸".to_string()))
        );
    }

    #[test]
    fn test_muscle_group_iter() {
        assert_eq!(MuscleGroup::iter().count(), 5);
    }
}
