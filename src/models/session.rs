//! Workout sessions: concrete, dated records of performed (or scheduled)
//! workouts.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::new_id;

/// One set as actually performed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSet {
    pub reps: u32,
    /// Weight used in kilograms. Zero for bodyweight work.
    pub weight: f64,
    #[serde(default)]
    pub completed: bool,
}

/// Per-exercise log within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    pub exercise_id: String,
    pub sets: Vec<LoggedSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: String,
    pub client_id: String,
    pub template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl WorkoutSession {
    /// Start a new session for `client_id` performing `template_id` on `date`.
    pub fn new(client_id: &str, template_id: &str, date: NaiveDate) -> Self {
        Self {
            id: new_id("session"),
            client_id: client_id.to_string(),
            template_id: template_id.to_string(),
            plan_id: None,
            date,
            start_time: None,
            end_time: None,
            exercises: Vec::new(),
            notes: None,
            completed: false,
        }
    }

    /// Record the sets performed for one exercise, replacing any earlier log
    /// for the same exercise.
    pub fn log_exercise(&mut self, exercise_id: &str, sets: Vec<LoggedSet>) {
        self.exercises.retain(|e| e.exercise_id != exercise_id);
        self.exercises.push(SessionExercise {
            exercise_id: exercise_id.to_string(),
            sets,
        });
    }

    /// Session duration in minutes, when both start and end times are set.
    pub fn duration_minutes(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }

    /// Total sets logged across all exercises.
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}
