use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeatherCondition {
    Clear,
    Rain,
    Storm,
    StormAndRain,
    Fog,
    Cloudy,
    Snow,
    Wind,
    Overcast,
    Blizzard,
    RainAndSnow,
    PartlyCloudy,
    LightRain,
    HeavyRain,
    Hail,
}

impl WeatherCondition {
    /// Selection-strip order.
    pub const ALL: [WeatherCondition; 15] = [
        WeatherCondition::Clear,
        WeatherCondition::Rain,
        WeatherCondition::Storm,
        WeatherCondition::StormAndRain,
        WeatherCondition::Fog,
        WeatherCondition::Cloudy,
        WeatherCondition::Snow,
        WeatherCondition::Wind,
        WeatherCondition::Overcast,
        WeatherCondition::Blizzard,
        WeatherCondition::RainAndSnow,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::LightRain,
        WeatherCondition::HeavyRain,
        WeatherCondition::Hail,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or_default()
    }

    /// Wraps around both ends of the strip.
    #[must_use]
    pub fn cycle(self, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let next = (self.index() as isize + step).rem_euclid(len);
        Self::ALL[next as usize]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        condition_names(self).0
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        condition_names(self).1
    }

    #[must_use]
    pub fn label_for_phase(self, phase: DayPhase) -> &'static str {
        match (self, phase) {
            (WeatherCondition::Clear, DayPhase::Night) => "Clear night",
            (WeatherCondition::PartlyCloudy, DayPhase::Night) => "Partly cloudy night",
            _ => self.label(),
        }
    }

    #[must_use]
    pub fn icon(self, phase: DayPhase) -> &'static str {
        match self {
            WeatherCondition::Clear => celestial_icon(phase),
            WeatherCondition::Rain | WeatherCondition::LightRain => "☂",
            WeatherCondition::HeavyRain => "☔",
            WeatherCondition::Storm | WeatherCondition::StormAndRain => "⚡",
            WeatherCondition::Fog => "░",
            WeatherCondition::Cloudy | WeatherCondition::Overcast => "☁",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Snow | WeatherCondition::Blizzard => "❄",
            WeatherCondition::RainAndSnow => "❆",
            WeatherCondition::Wind => "≋",
            WeatherCondition::Hail => "•",
        }
    }
}

const CONDITION_NAMES: &[(WeatherCondition, &str, &str)] = &[
    (WeatherCondition::Clear, "clear", "Clear"),
    (WeatherCondition::Rain, "rain", "Rain"),
    (WeatherCondition::Storm, "storm", "Storm"),
    (
        WeatherCondition::StormAndRain,
        "stormAndRain",
        "Storm and rain",
    ),
    (WeatherCondition::Fog, "fog", "Fog"),
    (WeatherCondition::Cloudy, "cloudy", "Cloudy"),
    (WeatherCondition::Snow, "snow", "Snow"),
    (WeatherCondition::Wind, "wind", "Wind"),
    (WeatherCondition::Overcast, "overcast", "Overcast"),
    (WeatherCondition::Blizzard, "blizzard", "Blizzard"),
    (WeatherCondition::RainAndSnow, "rainAndSnow", "Rain and snow"),
    (WeatherCondition::PartlyCloudy, "partlyCloudy", "Partly cloudy"),
    (WeatherCondition::LightRain, "lightRain", "Light rain"),
    (WeatherCondition::HeavyRain, "heavyRain", "Heavy rain"),
    (WeatherCondition::Hail, "hail", "Hail"),
];

fn condition_names(condition: WeatherCondition) -> (&'static str, &'static str) {
    CONDITION_NAMES
        .iter()
        .find_map(|(candidate, key, label)| (*candidate == condition).then_some((*key, *label)))
        .unwrap_or(("clear", "Clear"))
}

fn celestial_icon(phase: DayPhase) -> &'static str {
    match phase {
        DayPhase::Day => "☀",
        DayPhase::Night => "☾",
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weather condition `{input}`")]
pub struct ParseConditionError {
    pub input: String,
}

impl FromStr for WeatherCondition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        CONDITION_NAMES
            .iter()
            .find_map(|(condition, key, _)| (normalize_name(key) == wanted).then_some(*condition))
            .ok_or_else(|| ParseConditionError {
                input: s.to_string(),
            })
    }
}

// "stormAndRain", "storm-and-rain" and "storm_and_rain" all name the same condition.
fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPhase {
    #[default]
    Day,
    Night,
}

impl DayPhase {
    #[must_use]
    pub fn from_is_day(is_day: bool) -> Self {
        if is_day { Self::Day } else { Self::Night }
    }

    #[must_use]
    pub fn is_day(self) -> bool {
        matches!(self, Self::Day)
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

impl fmt::Display for DayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Night => "night",
        })
    }
}
