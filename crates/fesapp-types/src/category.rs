//! Categorical trip conditions
//!
//! Labels match the ones offered by the fare form ("morning peak", "off-peak", ...).
//! `from_label` is an exact match; callers that want the lenient fallback of the
//! fare calculator should go through `FareCalculator::compute`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Road traffic level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    #[default]
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Low, TrafficLevel::Moderate, TrafficLevel::Heavy];

    /// Position in a vehicle's `[low, moderate, heavy]` surcharge tiers
    pub fn index(&self) -> usize {
        match self {
            TrafficLevel::Low => 0,
            TrafficLevel::Moderate => 1,
            TrafficLevel::Heavy => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "low",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

/// Weather condition at departure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Cloudy,
    Rainy,
    Stormy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Stormy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Stormy => "stormy",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|weather| weather.label() == label)
    }
}

/// Time-of-day traffic period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum TrafficPeriod {
    #[serde(rename = "morning peak")]
    #[value(alias = "morning peak")]
    MorningPeak,
    #[serde(rename = "afternoon peak")]
    #[value(alias = "afternoon peak")]
    AfternoonPeak,
    #[serde(rename = "evening peak")]
    #[value(alias = "evening peak")]
    EveningPeak,
    #[default]
    #[serde(rename = "off-peak")]
    OffPeak,
}

impl TrafficPeriod {
    pub const ALL: [TrafficPeriod; 4] = [
        TrafficPeriod::MorningPeak,
        TrafficPeriod::AfternoonPeak,
        TrafficPeriod::EveningPeak,
        TrafficPeriod::OffPeak,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TrafficPeriod::MorningPeak => "morning peak",
            TrafficPeriod::AfternoonPeak => "afternoon peak",
            TrafficPeriod::EveningPeak => "evening peak",
            TrafficPeriod::OffPeak => "off-peak",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.label() == label)
    }
}

/// Day type of the trip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    pub fn label(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.label() == label)
    }
}

macro_rules! impl_display_as_label {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

impl_display_as_label!(TrafficLevel, WeatherCondition, TrafficPeriod, DayType);
