// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::SignedDuration;
use serde::de;

use crate::datetime::parse_duration;

/// The name of the application.
pub const APP_NAME: &str = "unilife";

/// Configuration for a campus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// If true, events without a location are rejected by the form.
    #[serde(default = "default_require_location")]
    pub require_location: bool,

    /// Order of events within a single day.
    #[serde(default)]
    pub day_order: DayOrder,

    /// Default length of a newly drafted event.
    #[serde(default)]
    pub default_duration: ConfigDuration,
}

impl Config {
    /// Configuration with every option at its default value.
    pub fn new() -> Self {
        Self {
            require_location: default_require_location(),
            day_order: DayOrder::default(),
            default_duration: ConfigDuration::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

const fn default_require_location() -> bool {
    true
}

/// How events are ordered within the list of a single day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DayOrder {
    /// Sorted by start time; events starting at the same time keep submission order.
    #[default]
    Chronological,

    /// Submission order, newest last.
    Insertion,
}

/// A duration read from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDuration(pub SignedDuration);

impl ConfigDuration {
    pub fn get(self) -> SignedDuration {
        self.0
    }
}

impl Default for ConfigDuration {
    fn default() -> Self {
        Self(SignedDuration::from_hours(1))
    }
}

impl<'de> serde::Deserialize<'de> for ConfigDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl de::Visitor<'_> for DurationVisitor {
            type Value = ConfigDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1d", "24h", "60m", or "1800s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match parse_duration(value) {
                    Ok(d) if d.is_negative() => {
                        Err(de::Error::custom("duration must not be negative"))
                    }
                    Ok(d) => Ok(ConfigDuration(d)),
                    Err(e) => Err(de::Error::custom(e.to_string())),
                }
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}
