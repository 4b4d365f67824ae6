//! Per-day models: absence sections and the assembled day presentation.

use crate::libs::blocks::TimeBlock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared absence for a day.
///
/// Only `Day`, `Morning` and `Afternoon` are ever stored; a day with no
/// declared absence simply has no entry. `None` exists as the in-memory
/// default and as the user-facing way to clear an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceSection {
    #[default]
    None,
    Day,
    Morning,
    Afternoon,
}

impl AbsenceSection {
    /// Parses a stored or user-typed section name. Callers decide what a
    /// failed parse means; there is no silent default here.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(Self::None),
            "day" => Some(Self::Day),
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            _ => None,
        }
    }

    /// The stable name used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Day => "day",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        }
    }

    /// French display label shown in tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Présent",
            Self::Day => "Journée",
            Self::Morning => "Matin",
            Self::Afternoon => "Après-midi",
        }
    }

    /// How much of a working day this absence removes from the objective.
    pub fn day_equivalent(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Day => 1.0,
            Self::Morning | Self::Afternoon => 0.5,
        }
    }
}

/// Sparse absence map keyed by portal date key.
///
/// The invariant lives in [`set`](Self::set): assigning
/// [`AbsenceSection::None`] removes the entry, so the map only ever holds
/// actual absences and iteration never sees a "present" marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsenceMap(HashMap<String, AbsenceSection>);

impl AbsenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an absence, or clears the entry when `section` is `None`.
    pub fn set(&mut self, date_key: &str, section: AbsenceSection) {
        if section == AbsenceSection::None {
            self.0.remove(date_key);
        } else {
            self.0.insert(date_key.to_string(), section);
        }
    }

    /// The declared absence for a day, `None` variant when nothing is set.
    pub fn get(&self, date_key: &str) -> AbsenceSection {
        self.0.get(date_key).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &AbsenceSection)> {
        self.0.iter()
    }
}

impl From<HashMap<String, AbsenceSection>> for AbsenceMap {
    fn from(raw: HashMap<String, AbsenceSection>) -> Self {
        let mut map = Self::new();
        for (date_key, section) in raw {
            map.set(&date_key, section);
        }
        map
    }
}

/// One dashboard row: a calendar day with its punches and absence state.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPresentation {
    pub date_key: String,
    pub title: String,
    pub is_past: bool,
    pub absence: AbsenceSection,
    pub time_blocks: Vec<TimeBlock>,
}

impl DayPresentation {
    /// Raw presence minutes for the day, summed over display blocks.
    pub fn total_minutes(&self) -> i64 {
        self.time_blocks.iter().map(|block| block.duration_minutes.max(0)).sum()
    }

    pub fn is_fully_absent(&self) -> bool {
        self.absence == AbsenceSection::Day
    }

    pub fn is_partially_absent(&self) -> bool {
        matches!(self.absence, AbsenceSection::Morning | AbsenceSection::Afternoon)
    }
}

/// Compact per-day figures for the weekday progress row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProgressSnapshot {
    pub date_key: String,
    pub label: String,
    pub minutes: i64,
    pub progress: f64,
    pub is_today: bool,
    pub is_weekend: bool,
    pub is_absent: bool,
}
