//! Parsing of free-form weight ranges as they appear in workout templates.
//!
//! A range names the warmup weight and the weight of the formal sets, e.g.
//! `"22.5-25"` or `"15～10"`. Parsing never fails: input that cannot be
//! interpreted yields a zero pair and a warning in the log.

use log::warn;

use crate::{NUM_SETS, Reps, SetEntry, SetKind, Weight};

/// Marks a bodyweight exercise without additional load.
pub const EMPTY: &str = "空";
/// Marks a weight given per side or per hand.
pub const HALF: char = '半';
pub const FULL_WIDTH_TILDE: char = '～';
pub const HYPHEN: char = '-';

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WeightPair {
    pub warmup: Weight,
    pub formal: Weight,
}

impl WeightPair {
    #[must_use]
    pub fn new(warmup: Weight, formal: Weight) -> Self {
        Self { warmup, formal }
    }

    #[must_use]
    pub fn uniform(weight: Weight) -> Self {
        Self::new(weight, weight)
    }

    /// Expands the pair into a full set list: the warmup weight for the first
    /// set and the formal weight for the remaining ones.
    #[must_use]
    pub fn sets(&self, reps: Reps) -> [SetEntry; NUM_SETS] {
        SetKind::ALL.map(|kind| {
            let weight = match kind {
                SetKind::Warmup => self.warmup,
                SetKind::Formal(_) => self.formal,
            };
            SetEntry::with(kind, weight, reps)
        })
    }
}

#[must_use]
pub fn parse(raw: &str) -> WeightPair {
    try_parse(raw).unwrap_or_else(|err| {
        warn!("{err}");
        WeightPair::default()
    })
}

pub fn try_parse(raw: &str) -> Result<WeightPair, RangeError> {
    let input = raw.trim();

    if input == EMPTY {
        return Ok(WeightPair::default());
    }

    if input.contains(HALF) {
        return parse_half(raw, input);
    }

    for separator in [FULL_WIDTH_TILDE, HYPHEN] {
        if input.contains(separator) {
            let mut segments = input.split(separator);
            let first = segments.next().and_then(leading_weight);
            let second = segments.next().and_then(leading_weight);
            if let (Some(warmup), Some(formal)) = (first, second) {
                return Ok(WeightPair::new(warmup, formal));
            }
            break;
        }
    }

    leading_weight(input)
        .map(WeightPair::uniform)
        .ok_or_else(|| RangeError::Unrecognized(raw.to_string()))
}

fn parse_half(raw: &str, input: &str) -> Result<WeightPair, RangeError> {
    if let Some((first, second)) = input.split_once(HYPHEN) {
        let warmup = leading_weight(first).unwrap_or_else(|| {
            warn!("failed to parse warmup weight of \"{raw}\"");
            Weight::ZERO
        });
        let formal = leading_weight(&second.replace(HALF, "")).unwrap_or(warmup);
        Ok(WeightPair::new(warmup, formal))
    } else {
        leading_weight(&input.replace(HALF, ""))
            .map(WeightPair::uniform)
            .ok_or_else(|| RangeError::Unrecognized(raw.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("failed to parse weight range \"{0}\"")]
    Unrecognized(String),
}

fn leading_weight(text: &str) -> Option<Weight> {
    leading_decimal(text).and_then(|value| Weight::new(value).ok())
}

/// Parses the decimal number at the start of `text`, ignoring leading
/// whitespace and any trailing characters.
#[must_use]
pub fn leading_decimal(text: &str) -> Option<f32> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f32>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
