use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A star rating between [`Rating::MIN`] and [`Rating::MAX`].
///
/// Serialized as a bare number so it can travel in JSON bodies and in the
/// `data-value` attribute of a star label unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("rating {0} is outside {min}..={max}", min = Rating::MIN, max = Rating::MAX)]
    OutOfRange(u8),
    #[error("`{0}` is not a rating")]
    Invalid(String),
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every rating, lowest first.
    pub fn all() -> impl DoubleEndedIterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| RatingError::Invalid(s.to_string()))?;
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_values() {
        assert_eq!("4".parse::<Rating>().unwrap().value(), 4);
        assert_eq!(" 1 ".parse::<Rating>().unwrap().value(), 1);
        assert_eq!("0".parse::<Rating>(), Err(RatingError::OutOfRange(0)));
        assert_eq!("6".parse::<Rating>(), Err(RatingError::OutOfRange(6)));
        assert_eq!(
            "four".parse::<Rating>(),
            Err(RatingError::Invalid("four".to_string()))
        );
    }

    #[test]
    fn all_covers_the_scale_in_order() {
        let values: Vec<u8> = Rating::all().map(Rating::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(Rating::all().rev().next().map(Rating::value), Some(5));
    }

    #[test]
    fn display_matches_the_input_value() {
        assert_eq!(Rating::new(4).unwrap().to_string(), "4");
    }
}
