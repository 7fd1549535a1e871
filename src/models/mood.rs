use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// The eight moods the engine can report. Persisted by lowercase name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Overwhelmed,
    Happy,
    Excited,
    Calm,
    Angry,
    Nervous,
    Sad,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Overwhelmed,
        Mood::Happy,
        Mood::Excited,
        Mood::Calm,
        Mood::Angry,
        Mood::Nervous,
        Mood::Sad,
        Mood::Tired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Overwhelmed => "overwhelmed",
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Angry => "angry",
            Mood::Nervous => "nervous",
            Mood::Sad => "sad",
            Mood::Tired => "tired",
        }
    }

    /// Capitalized display name, e.g. "Overwhelmed".
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Overwhelmed => "Overwhelmed",
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Angry => "Angry",
            Mood::Nervous => "Nervous",
            Mood::Sad => "Sad",
            Mood::Tired => "Tired",
        }
    }

    /// Asset names follow the label ("Happy", "Sad", ...).
    pub fn image_key(&self) -> &'static str {
        self.label()
    }

    pub fn color(&self) -> Rgb {
        match self {
            Mood::Overwhelmed => Rgb::new(0x8F, 0x5D, 0x46),
            Mood::Happy => Rgb::new(0xF9, 0xA5, 0xC7),
            Mood::Excited => Rgb::new(0x62, 0x2D, 0x91),
            Mood::Calm => Rgb::new(0x00, 0x00, 0xFF),
            Mood::Angry => Rgb::new(0xFF, 0x36, 0x36),
            Mood::Nervous => Rgb::new(0xFC, 0xEE, 0x21),
            Mood::Sad => Rgb::new(0x80, 0x80, 0x80),
            Mood::Tired => Rgb::new(0x03, 0xE5, 0x89),
        }
    }

    /// Text drawn on top of the mood color. Light backgrounds get dark text.
    pub fn text_tone(&self) -> TextTone {
        match self {
            Mood::Nervous | Mood::Happy | Mood::Tired => TextTone::Dark,
            _ => TextTone::Light,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == value)
            .ok_or_else(|| anyhow!("unknown mood '{value}'"))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, uppercase.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TextTone {
    Dark,
    Light,
}
