//! Workout templates: reusable, named prescriptions of exercises and sets.
//!
//! A template is not tied to a date. Plans assign templates to weekdays,
//! and sessions record a concrete performance of one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Exercise;
use crate::utils::new_id;

/// A prescribed set within a template exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescribedSet {
    pub reps: u32,
    /// Working weight in kilograms. Zero for bodyweight work.
    pub weight: f64,
    /// Rest after the set, in seconds.
    pub rest_time: u32,
}

/// One exercise slot in a template, with its set prescription.
///
/// Carries an embedded snapshot of the exercise so a template stays
/// renderable even if the catalog entry it references changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
    pub id: String,
    pub exercise_id: String,
    pub exercise: Exercise,
    pub sets: Vec<PrescribedSet>,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Expected duration in minutes.
    pub duration: u32,
    pub exercises: Vec<TemplateExercise>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_public: bool,
}

impl WorkoutTemplate {
    /// Create an empty template owned by `created_by`, with a fresh id.
    pub fn new(name: &str, category: &str, duration: u32, created_by: &str) -> Self {
        let now = Utc::now();
        Self {
            id: new_id("template"),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            duration,
            exercises: Vec::new(),
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
            is_public: false,
        }
    }

    /// Append an exercise slot at the end of the template.
    pub fn push_exercise(&mut self, exercise: Exercise, sets: Vec<PrescribedSet>) {
        let order = self.exercises.len() as u32;
        self.exercises.push(TemplateExercise {
            id: new_id("ex"),
            exercise_id: exercise.id.clone(),
            exercise,
            sets,
            order,
        });
        self.updated_at = Utc::now();
    }

    /// Exercise slots in prescription order.
    pub fn ordered_exercises(&self) -> Vec<&TemplateExercise> {
        let mut slots: Vec<&TemplateExercise> = self.exercises.iter().collect();
        slots.sort_by_key(|e| e.order);
        slots
    }

    /// Total number of prescribed sets across all exercises.
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}
