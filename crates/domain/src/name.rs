use derive_more::{AsRef, Display};

/// Maximum number of characters of an exercise name.
pub const MAX_NAME_LEN: usize = 64;

/// Exercise name as shown to the user. Names are not unique.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        match name.chars().count() {
            0 => Err(NameError::Empty),
            len if len > MAX_NAME_LEN => Err(NameError::TooLong(len)),
            _ => Ok(Name(name.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Exercise name must not be empty")]
    Empty,
    #[error("Exercise name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("杠铃卧推", Ok(Name("杠铃卧推".to_string())))]
    #[case("  Bench Press  ", Ok(Name("Bench Press".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(&"A".repeat(65), Err(NameError::TooLong(65)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_counts_characters() {
        let name = "胸".repeat(MAX_NAME_LEN);
        assert_eq!(Name::new(&name).map(|n| n.to_string()), Ok(name));
    }
}
