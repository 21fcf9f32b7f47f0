//! Data models for fitness-coaching entities.
//!
//! This module contains all the data structures the local store persists:
//!
//! - `Exercise`: catalog reference data
//! - `WorkoutTemplate`, `TemplateExercise`, `PrescribedSet`: reusable workout prescriptions
//! - `WorkoutPlan`, `Weekday`: dated weekday schedules for one client
//! - `WorkoutSession`, `SessionExercise`, `LoggedSet`: performed workout records
//! - `Client`: people coached by a trainer
//!
//! All entities serialize with camelCase field names so the on-disk JSON
//! matches what the mobile client reads and writes.

pub mod client;
pub mod exercise;
pub mod plan;
pub mod session;
pub mod template;

pub use client::Client;
pub use exercise::Exercise;
pub use plan::{Weekday, WorkoutPlan};
pub use session::{LoggedSet, SessionExercise, WorkoutSession};
pub use template::{PrescribedSet, TemplateExercise, WorkoutTemplate};
