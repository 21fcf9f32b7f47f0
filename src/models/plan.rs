//! Workout plans: dated assignments of templates to weekdays for one client.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::new_id;

/// Day-of-week tag used as a schedule key.
///
/// Serialized as the capitalized English day name ("Monday", ...), which is
/// what the mobile client writes as its schedule keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// A training plan assigning templates to weekdays over a date range.
///
/// The schedule is sparse: a weekday with no entry is a rest day. The date
/// range is inclusive on both ends and must satisfy `start_date <= end_date`;
/// the store rejects saves that violate this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub client_id: String,
    pub trainer_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Weekday -> template id. Missing day = rest day.
    #[serde(default)]
    pub schedule: BTreeMap<Weekday, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    pub fn new(
        name: &str,
        client_id: &str,
        trainer_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_id("plan"),
            client_id: client_id.to_string(),
            trainer_id: trainer_id.to_string(),
            name: name.to_string(),
            start_date,
            end_date,
            schedule: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn date_range_valid(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Whether `date` falls inside the plan's inclusive date range.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Template scheduled for a weekday, if any.
    pub fn template_for(&self, day: Weekday) -> Option<&str> {
        self.schedule.get(&day).map(String::as_str)
    }

    /// Template scheduled for a calendar date, if the plan is active then.
    pub fn template_on(&self, date: NaiveDate) -> Option<&str> {
        if !self.is_active_on(date) {
            return None;
        }
        self.template_for(Weekday::from(date.weekday()))
    }

    /// Number of scheduled (non-rest) days per week.
    pub fn training_days(&self) -> usize {
        self.schedule.len()
    }
}
