//! Threshold values and their integer coercion
//!
//! A threshold may be given as an integer, a float, numeric text or a
//! `LogLevel`. Whatever the input, it must come out as a finite integer.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;

/// Raw threshold input, coerced by [`LevelValue::to_rank`].
#[derive(Debug, Clone, PartialEq)]
pub enum LevelValue {
    Int(i64),
    Float(f64),
    Text(String),
    Level(LogLevel),
}

impl LevelValue {
    /// Coerce to an integer rank.
    ///
    /// Floats must have no fractional part. Text is parsed as a number first
    /// and then held to the same rule; empty text is rejected.
    pub fn to_rank(&self) -> Result<i64> {
        match self {
            LevelValue::Int(rank) => Ok(*rank),
            LevelValue::Level(level) => Ok(i64::from(level.rank())),
            LevelValue::Float(value) => float_to_rank(*value),
            LevelValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(LoggerError::invalid_argument(
                        "level",
                        "expected an integer, got empty text",
                    ));
                }
                let value: f64 = trimmed.parse().map_err(|_| {
                    LoggerError::invalid_argument(
                        "level",
                        format!("expected an integer, got '{}'", text),
                    )
                })?;
                float_to_rank(value)
            }
        }
    }
}

fn float_to_rank(value: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Ok(value as i64)
    } else {
        Err(LoggerError::invalid_argument(
            "level",
            format!("expected an integer, got {}", value),
        ))
    }
}

macro_rules! level_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LevelValue {
                fn from(value: $ty) -> Self {
                    LevelValue::Int(i64::from(value))
                }
            }
        )*
    };
}

level_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for LevelValue {
    fn from(value: f64) -> Self {
        LevelValue::Float(value)
    }
}

impl From<f32> for LevelValue {
    fn from(value: f32) -> Self {
        LevelValue::Float(f64::from(value))
    }
}

impl From<&str> for LevelValue {
    fn from(value: &str) -> Self {
        LevelValue::Text(value.to_string())
    }
}

impl From<String> for LevelValue {
    fn from(value: String) -> Self {
        LevelValue::Text(value)
    }
}

impl From<LogLevel> for LevelValue {
    fn from(level: LogLevel) -> Self {
        LevelValue::Level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_pass_through() {
        assert_eq!(LevelValue::from(4).to_rank().unwrap(), 4);
        assert_eq!(LevelValue::from(0u8).to_rank().unwrap(), 0);
        assert_eq!(LevelValue::from(-3i64).to_rank().unwrap(), -3);
        assert_eq!(LevelValue::from(LogLevel::Finer).to_rank().unwrap(), 5);
    }

    #[test]
    fn test_whole_floats_are_accepted() {
        assert_eq!(LevelValue::from(3.0).to_rank().unwrap(), 3);
        assert_eq!(LevelValue::from(-0.0).to_rank().unwrap(), 0);
    }

    #[test]
    fn test_fractional_and_non_finite_floats_are_rejected() {
        for value in [2.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            let err = LevelValue::from(value).to_rank().unwrap_err();
            assert!(matches!(err, LoggerError::InvalidArgument { .. }), "{}", value);
        }
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        assert_eq!(LevelValue::from("3").to_rank().unwrap(), 3);
        assert_eq!(LevelValue::from(" 6 ").to_rank().unwrap(), 6);
        assert_eq!(LevelValue::from("4.0").to_rank().unwrap(), 4);
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        for text in ["", "   ", "INFO", "4.5", "three"] {
            let err = LevelValue::from(text).to_rank().unwrap_err();
            assert!(matches!(err, LoggerError::InvalidArgument { .. }), "{:?}", text);
        }
    }
}
