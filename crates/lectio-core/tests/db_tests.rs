use lectio_core::{Database, Progress};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();
    assert!(_temp_file.path().exists());
}

#[test]
fn test_raw_put_and_get_round_trip() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.get("missing").expect("Failed to read"), None);

    db.put("greeting", "hello").expect("Failed to write");
    assert_eq!(
        db.get("greeting").expect("Failed to read"),
        Some("hello".to_string())
    );

    // Re-putting replaces the value rather than failing.
    db.put("greeting", "goodbye").expect("Failed to overwrite");
    assert_eq!(
        db.get("greeting").expect("Failed to read"),
        Some("goodbye".to_string())
    );
}

#[test]
fn test_selected_plan_round_trip() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.selected_plan().expect("Failed to read"), None);
    db.set_selected_plan("mcheyne").expect("Failed to write");
    assert_eq!(
        db.selected_plan().expect("Failed to read"),
        Some("mcheyne".to_string())
    );
}

#[test]
fn test_current_day_round_trip() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.current_day().expect("Failed to read"), None);
    db.set_current_day(42).expect("Failed to write");
    assert_eq!(db.current_day().expect("Failed to read"), Some(42));
}

#[test]
fn test_malformed_current_day_falls_back_to_absent() {
    let (_temp_file, db) = create_test_db();

    db.put("currentDay", "not a number").expect("Failed to write");
    assert_eq!(db.current_day().expect("Read should not fail"), None);
}

#[test]
fn test_completed_days_round_trip() {
    let (_temp_file, db) = create_test_db();

    let progress = Progress::from_days(vec![3, 1, 2]);
    db.set_completed_days("mcheyne", &progress)
        .expect("Failed to write");

    let loaded = db.completed_days("mcheyne").expect("Failed to read");
    assert_eq!(loaded.days(), vec![1, 2, 3]);
}

#[test]
fn test_completed_days_are_keyed_per_plan() {
    let (_temp_file, db) = create_test_db();

    db.set_completed_days("alpha", &Progress::from_days(vec![1]))
        .expect("Failed to write");
    db.set_completed_days("beta", &Progress::from_days(vec![2, 3]))
        .expect("Failed to write");

    assert_eq!(db.completed_days("alpha").unwrap().len(), 1);
    assert_eq!(db.completed_days("beta").unwrap().len(), 2);
    assert!(db.completed_days("gamma").unwrap().is_empty());
}

#[test]
fn test_empty_set_persists_as_empty_list() {
    let (_temp_file, db) = create_test_db();

    db.set_completed_days("alpha", &Progress::from_days(vec![5]))
        .expect("Failed to write");
    db.set_completed_days("alpha", &Progress::new())
        .expect("Failed to clear");

    // The key survives with an empty payload instead of being deleted.
    assert_eq!(
        db.get("completedDays_alpha").expect("Failed to read"),
        Some("[]".to_string())
    );
    assert!(db.completed_days("alpha").unwrap().is_empty());
}

#[test]
fn test_malformed_completed_days_fail_closed() {
    let (_temp_file, db) = create_test_db();

    db.put("completedDays_alpha", "{\"not\": \"an array\"}")
        .expect("Failed to write");
    assert!(db.completed_days("alpha").expect("Read should not fail").is_empty());
}

#[test]
fn test_out_of_range_completed_days_are_dropped() {
    let (_temp_file, db) = create_test_db();

    db.put("completedDays_alpha", "[0, 1, 200, 365, 366, -5]")
        .expect("Failed to write");
    let loaded = db.completed_days("alpha").expect("Read should not fail");
    assert_eq!(loaded.days(), vec![1, 200, 365]);
}
