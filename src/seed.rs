//! Default data written into empty collections on first start.
//!
//! The exercise catalog ships with the app; the sample clients and the
//! starter template give trainers something to look at before the first
//! sync. `LocalStore::initialize_default_data` only writes a collection
//! when it is empty, so re-running it never duplicates or overwrites
//! anything.

use chrono::{NaiveDate, Utc};

use crate::models::{
    Client, Exercise, PrescribedSet, TemplateExercise, WorkoutTemplate,
};

fn exercise(
    id: &str,
    name: &str,
    category: &str,
    muscle_groups: &[&str],
    instructions: &str,
    equipment: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        muscle_groups: muscle_groups.iter().map(|g| g.to_string()).collect(),
        instructions: Some(instructions.to_string()),
        equipment: Some(equipment.to_string()),
    }
}

/// The built-in exercise catalog.
pub fn default_exercises() -> Vec<Exercise> {
    vec![
        exercise(
            "1",
            "Push-ups",
            "Bodyweight",
            &["Chest", "Shoulders", "Triceps"],
            "Start in plank position, lower body to ground, push back up",
            "None",
        ),
        exercise(
            "2",
            "Squats",
            "Bodyweight",
            &["Quadriceps", "Glutes", "Hamstrings"],
            "Stand with feet shoulder-width apart, lower hips back and down",
            "None",
        ),
        exercise(
            "3",
            "Bench Press",
            "Strength",
            &["Chest", "Shoulders", "Triceps"],
            "Lie on bench, lower bar to chest, press up",
            "Barbell, Bench",
        ),
        exercise(
            "4",
            "Deadlift",
            "Strength",
            &["Hamstrings", "Glutes", "Back"],
            "Stand with feet hip-width apart, lift bar from ground",
            "Barbell",
        ),
        exercise(
            "5",
            "Pull-ups",
            "Bodyweight",
            &["Back", "Biceps"],
            "Hang from bar, pull body up until chin over bar",
            "Pull-up bar",
        ),
        exercise(
            "6",
            "Overhead Press",
            "Strength",
            &["Shoulders", "Triceps", "Core"],
            "Press weight overhead from shoulder level",
            "Barbell or Dumbbells",
        ),
        exercise(
            "7",
            "Barbell Rows",
            "Strength",
            &["Back", "Biceps"],
            "Pull barbell to lower chest while bent over",
            "Barbell",
        ),
        exercise(
            "8",
            "Lunges",
            "Bodyweight",
            &["Quadriceps", "Glutes", "Hamstrings"],
            "Step forward and lower back knee toward ground",
            "None",
        ),
    ]
}

/// Sample clients shown to trainers before the first sync.
pub fn sample_clients() -> Vec<Client> {
    let client = |id: &str, name: &str, email: &str, avatar: &str, joined: NaiveDate| Client {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
        join_date: joined,
        trainer_id: "trainer-1".to_string(),
    };
    vec![
        client(
            "client-1",
            "Sarah Johnson",
            "sarah@example.com",
            "\u{1f469}\u{200d}\u{1f4bc}",
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid seed date"),
        ),
        client(
            "client-2",
            "Mike Chen",
            "mike@example.com",
            "\u{1f468}\u{200d}\u{1f4bb}",
            NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid seed date"),
        ),
        client(
            "client-3",
            "Emma Wilson",
            "emma@example.com",
            "\u{1f469}\u{200d}\u{1f3a8}",
            NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid seed date"),
        ),
    ]
}

fn set(reps: u32, weight: f64, rest_time: u32) -> PrescribedSet {
    PrescribedSet {
        reps,
        weight,
        rest_time,
    }
}

/// The starter "Full Body Strength" template, id `template-1`.
pub fn starter_template() -> WorkoutTemplate {
    let catalog = default_exercises();
    let snapshot = |id: &str| {
        catalog
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .expect("starter template references a catalog exercise")
    };
    let slot = |slot_id: &str, exercise_id: &str, sets: Vec<PrescribedSet>, order: u32| {
        TemplateExercise {
            id: slot_id.to_string(),
            exercise_id: exercise_id.to_string(),
            exercise: snapshot(exercise_id),
            sets,
            order,
        }
    };

    let now = Utc::now();
    WorkoutTemplate {
        id: "template-1".to_string(),
        name: "Full Body Strength".to_string(),
        description: "A comprehensive full-body strength training workout".to_string(),
        category: "Strength".to_string(),
        duration: 45,
        exercises: vec![
            slot(
                "ex-1",
                "3",
                vec![set(8, 60.0, 90), set(8, 65.0, 90), set(6, 70.0, 120)],
                0,
            ),
            slot(
                "ex-2",
                "4",
                vec![set(5, 80.0, 120), set(5, 85.0, 120), set(3, 90.0, 180)],
                1,
            ),
            slot(
                "ex-3",
                "2",
                vec![set(12, 0.0, 60), set(12, 0.0, 60), set(15, 0.0, 60)],
                2,
            ),
        ],
        created_by: "trainer-1".to_string(),
        created_at: now,
        updated_at: now,
        is_public: false,
    }
}
