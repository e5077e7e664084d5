use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Nombre de secondes dans une journée (horloge 24 h, sans DST).
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid time format (expected HH:MM:SS): {0:?}")]
    InvalidTimeFormat(String),
    #[error("time of day out of range: {0}s (must be < 86400)")]
    OutOfRange(u32),
}

/// Heure de la journée, en secondes depuis minuit local, dans `[0, 86400)`.
///
/// Modèle « cadran d'horloge » : aucune date, aucun fuseau.
/// Sérialisé en texte `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    pub fn from_seconds(secs: u32) -> Result<Self, TimeError> {
        if secs >= SECONDS_PER_DAY {
            return Err(TimeError::OutOfRange(secs));
        }
        Ok(Self(secs))
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self::from)
            .ok_or_else(|| {
                TimeError::InvalidTimeFormat(format!("{hour:02}:{minute:02}:{second:02}"))
            })
    }

    /// Parse `HH:MM:SS` : `h*3600 + m*60 + s`.
    ///
    /// Exactement deux chiffres par champ. Rejette heure > 23,
    /// minute/seconde > 59 (seconde intercalaire comprise).
    pub fn parse(raw: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidTimeFormat(raw.to_string());
        if !has_clock_shape(raw) {
            return Err(invalid());
        }
        let time = NaiveTime::parse_from_str(raw, "%H:%M:%S").map_err(|_| invalid())?;
        // chrono encode la seconde 60 dans les nanosecondes
        if time.nanosecond() >= 1_000_000_000 {
            return Err(invalid());
        }
        Ok(Self::from(time))
    }

    pub fn seconds(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 3600
    }
    pub fn minute(self) -> u32 {
        self.0 % 3600 / 60
    }
    pub fn second(self) -> u32 {
        self.0 % 60
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0).unwrap_or(NaiveTime::MIN)
    }
}

// chrono accepte "9:00:00" ou " 09:00:00" avec %H:%M:%S
fn has_clock_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 8
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
