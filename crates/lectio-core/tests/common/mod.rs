use lectio_core::{
    models::{Plan, PlanLibrary, Readings},
    Tracker, TrackerBuilder,
};
use tempfile::TempDir;

/// Reference year safely in the past so the default starting day is 1.
pub const TEST_YEAR: i16 = 1999;

/// Builds a small two-plan library covering both plan shapes.
pub fn sample_library() -> PlanLibrary {
    let mut library = PlanLibrary::new();
    library.insert(
        "daily",
        Plan {
            name: "Straight Through".to_string(),
            readings: Readings::Days((1..=365).map(|d| format!("Passage {d}")).collect()),
        },
    );
    library.insert(
        "52week",
        Plan {
            name: "Weekly Mix".to_string(),
            readings: Readings::Weeks(
                (1..=52)
                    .map(|w| {
                        [
                            format!("W{w} epistle"),
                            format!("W{w} law"),
                            format!("W{w} history"),
                            format!("W{w} psalm"),
                            format!("W{w} poetry"),
                            format!("W{w} prophecy"),
                            format!("W{w} gospel"),
                        ]
                    })
                    .collect(),
            ),
        },
    );
    library
}

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_library(sample_library())
        .with_reference_year(Some(TEST_YEAR))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
