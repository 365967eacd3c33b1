//! Log level definitions
//!
//! The registry is a compile-time table: six levels, each with a fixed rank.
//! A lower rank is more severe, so the derived `Ord` sorts `Severe` first.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Severe = 1,
    Warning = 2,
    Info = 3,
    Fine = 4,
    Finer = 5,
    Finest = 6,
}

/// Frozen name -> rank table, most severe first.
pub const LEVELS: [(&str, u8); 6] = [
    ("SEVERE", 1),
    ("WARNING", 2),
    ("INFO", 3),
    ("FINE", 4),
    ("FINER", 5),
    ("FINEST", 6),
];

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Severe,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Fine,
        LogLevel::Finer,
        LogLevel::Finest,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(LogLevel::Severe),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Fine),
            5 => Some(LogLevel::Finer),
            6 => Some(LogLevel::Finest),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Severe => "SEVERE",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Fine => "FINE",
            LogLevel::Finer => "FINER",
            LogLevel::Finest => "FINEST",
        }
    }

    /// Name of the matching convenience method on `Logger`.
    pub fn method_name(&self) -> &'static str {
        match self {
            LogLevel::Severe => "severe",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Fine => "fine",
            LogLevel::Finer => "finer",
            LogLevel::Finest => "finest",
        }
    }

    /// Display color. Cosmetic only, never consulted for routing.
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Severe => BrightRed,
            LogLevel::Warning => Yellow,
            LogLevel::Info => Green,
            LogLevel::Fine => Cyan,
            LogLevel::Finer => Blue,
            LogLevel::Finest => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SEVERE" => Ok(LogLevel::Severe),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "FINE" => Ok(LogLevel::Fine),
            "FINER" => Ok(LogLevel::Finer),
            "FINEST" => Ok(LogLevel::Finest),
            _ => Err(LoggerError::invalid_argument(
                "level",
                format!("unknown log level '{}'", s),
            )),
        }
    }
}

/// A set of accepted levels for one stream route.
///
/// Membership only: `{Severe, Info}` is as valid as `{Severe, Warning}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    const fn bit(level: LogLevel) -> u8 {
        1 << level.rank()
    }

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        LogLevel::ALL.into_iter().collect()
    }

    pub const fn only(level: LogLevel) -> Self {
        Self {
            bits: Self::bit(level),
        }
    }

    /// All levels at least as severe as `level`.
    pub fn at_least(level: LogLevel) -> Self {
        LogLevel::ALL
            .into_iter()
            .filter(|candidate| candidate.rank() <= level.rank())
            .collect()
    }

    /// Build a set from raw ranks, rejecting anything outside the registry.
    pub fn from_ranks<I>(ranks: I) -> Result<Self, LoggerError>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        let mut set = Self::empty();
        for rank in ranks {
            let rank = rank.into();
            let level = u8::try_from(rank)
                .ok()
                .and_then(LogLevel::from_rank)
                .ok_or_else(|| {
                    LoggerError::invalid_argument("levels", format!("unknown level rank {}", rank))
                })?;
            set.insert(level);
        }
        Ok(set)
    }

    #[must_use]
    pub fn with(mut self, level: LogLevel) -> Self {
        self.insert(level);
        self
    }

    pub fn insert(&mut self, level: LogLevel) {
        self.bits |= Self::bit(level);
    }

    pub fn remove(&mut self, level: LogLevel) {
        self.bits &= !Self::bit(level);
    }

    #[inline]
    pub fn contains(&self, level: LogLevel) -> bool {
        self.bits & Self::bit(level) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = LogLevel> + '_ {
        LogLevel::ALL.into_iter().filter(move |level| self.contains(*level))
    }
}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<T: IntoIterator<Item = LogLevel>>(iter: T) -> Self {
        let mut set = Self::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl From<LogLevel> for LevelSet {
    fn from(level: LogLevel) -> Self {
        Self::only(level)
    }
}

impl<const N: usize> From<[LogLevel; N]> for LevelSet {
    fn from(levels: [LogLevel; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, level) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(level.to_str())?;
        }
        f.write_str("}")
    }
}
