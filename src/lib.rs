//! Kalike library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod quiz;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    #[default]
    Kannada,
    Hindi,
    Geography,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Kannada, Subject::Hindi, Subject::Geography];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Kannada => "Kannada",
            Subject::Hindi => "Hindi",
            Subject::Geography => "Geography",
        }
    }

    /// Activities this subject offers, `Quiz` first.
    pub fn activities(&self) -> &'static [Activity] {
        match self {
            Subject::Kannada => &[Activity::Quiz, Activity::FlashCards],
            Subject::Hindi => &[Activity::Quiz],
            Subject::Geography => &[Activity::Quiz, Activity::CapitalMap],
        }
    }

    /// `activity` if this subject supports it, otherwise `Quiz`.
    pub fn resolve_activity(&self, activity: Activity) -> Activity {
        if self.activities().contains(&activity) {
            activity
        } else {
            Activity::Quiz
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    #[default]
    Quiz,
    FlashCards,
    CapitalMap,
}

impl Activity {
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Quiz => "Quiz",
            Activity::FlashCards => "Flash Cards",
            Activity::CapitalMap => "Capital Map",
        }
    }
}
