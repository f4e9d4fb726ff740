use jiff::Timestamp;
use tempfile::NamedTempFile;
use tutor_core::{
    AssignmentFilter, Database, ExplanationMode, Priority, TutorError,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn due() -> Timestamp {
    "2026-09-01T12:00:00Z".parse().unwrap()
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_create_and_get_assignment() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Algebra homework", None, due(), Priority::High)
        .expect("Failed to create assignment");

    assert_eq!(assignment.title, "Algebra homework");
    assert_eq!(assignment.priority, Priority::High);
    assert!(assignment.id > 0);
    assert!(!assignment.completed);

    let retrieved = db
        .get_assignment(assignment.id)
        .expect("Failed to get assignment")
        .expect("Assignment should exist");

    assert_eq!(retrieved.id, assignment.id);
    assert_eq!(retrieved.title, "Algebra homework");
    assert!(retrieved.questions.is_empty());
}

#[test]
fn test_get_missing_assignment_returns_none() {
    let (_temp_file, db) = create_test_db();
    let result = db.get_assignment(999).expect("Query should succeed");
    assert!(result.is_none());
}

#[test]
fn test_questions_keep_insertion_order() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Worksheet", None, due(), Priority::Medium)
        .expect("Failed to create assignment");

    let q1 = db
        .add_question(assignment.id, "First question", None)
        .expect("Failed to add question");
    let q2 = db
        .add_question(assignment.id, "Second question", None)
        .expect("Failed to add question");

    assert_eq!(q1.position, 0);
    assert_eq!(q2.position, 1);

    let questions = db
        .get_questions(assignment.id)
        .expect("Failed to get questions");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].content, "First question");
    assert_eq!(questions[1].content, "Second question");
}

#[test]
fn test_add_question_to_missing_assignment_fails() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.add_question(42, "Orphan question", None);
    assert!(matches!(
        result,
        Err(TutorError::AssignmentNotFound { id: 42 })
    ));
}

#[test]
fn test_list_assignments_filters_completed() {
    let (_temp_file, mut db) = create_test_db();

    let open = db
        .create_assignment("Open", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    let done = db
        .create_assignment("Done", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    db.set_assignment_completed(done.id, true)
        .expect("Failed to complete assignment");

    let pending = db
        .list_assignments(Some(&AssignmentFilter::pending()))
        .expect("Failed to list");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, open.id);

    let all = db.list_assignments(None).expect("Failed to list");
    assert_eq!(all.len(), 2);
}

#[test]
fn test_summary_counts_questions() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Counted", None, due(), Priority::Low)
        .expect("Failed to create assignment");
    let q1 = db
        .add_question(assignment.id, "One", None)
        .expect("Failed to add question");
    db.add_question(assignment.id, "Two", None)
        .expect("Failed to add question");
    db.set_question_completed(q1.id, true)
        .expect("Failed to complete question");

    let summaries = db.list_assignments(None).expect("Failed to list");
    assert_eq!(summaries[0].total_questions, 2);
    assert_eq!(summaries[0].completed_questions, 1);
}

#[test]
fn test_delete_assignment_cascades() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Doomed", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    let question = db
        .add_question(assignment.id, "Question", None)
        .expect("Failed to add question");
    db.append_step(question.id, 0, "Step one", ExplanationMode::Balanced)
        .expect("Failed to append step");

    db.delete_assignment(assignment.id)
        .expect("Failed to delete assignment");

    assert!(db.get_assignment(assignment.id).unwrap().is_none());
    assert!(db.get_question(question.id).unwrap().is_none());
    assert!(db.get_steps(question.id).unwrap().is_empty());
}

#[test]
fn test_append_step_assigns_sequential_numbers() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Stepped", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    let question = db
        .add_question(assignment.id, "Solve x", None)
        .expect("Failed to add question");

    let s1 = db
        .append_step(question.id, 0, "First", ExplanationMode::Guided)
        .expect("Failed to append");
    let s2 = db
        .append_step(question.id, 1, "Second", ExplanationMode::Guided)
        .expect("Failed to append");

    assert_eq!(s1.step_number, 1);
    assert_eq!(s2.step_number, 2);
    assert!(!s1.confirmed);

    let steps = db.get_steps(question.id).expect("Failed to get steps");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].step_number, 1);
    assert_eq!(steps[1].step_number, 2);
}

#[test]
fn test_append_step_detects_stale_count() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Raced", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    let question = db
        .add_question(assignment.id, "Solve y", None)
        .expect("Failed to add question");

    db.append_step(question.id, 0, "First", ExplanationMode::Balanced)
        .expect("Failed to append");

    // A second writer that still believes the sequence is empty must fail
    let result = db.append_step(question.id, 0, "Stale", ExplanationMode::Balanced);
    match result {
        Err(TutorError::StepConflict {
            question_id,
            expected,
            actual,
        }) => {
            assert_eq!(question_id, question.id);
            assert_eq!(expected, 0);
            assert_eq!(actual, 1);
        }
        other => panic!("Expected StepConflict, got {other:?}"),
    }

    // The losing write must not have left a row behind
    assert_eq!(db.get_steps(question.id).unwrap().len(), 1);
}

#[test]
fn test_append_step_missing_question_fails() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.append_step(7, 0, "Nowhere", ExplanationMode::Direct);
    assert!(matches!(result, Err(TutorError::QuestionNotFound { id: 7 })));
}

#[test]
fn test_confirm_step_is_monotonic() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Confirmed", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    let question = db
        .add_question(assignment.id, "Solve z", None)
        .expect("Failed to add question");
    db.append_step(question.id, 0, "First", ExplanationMode::Balanced)
        .expect("Failed to append");

    let confirmed = db
        .confirm_step(question.id, 1)
        .expect("Failed to confirm step");
    assert!(confirmed.confirmed);

    // Confirming again is a no-op returning the same step
    let again = db
        .confirm_step(question.id, 1)
        .expect("Second confirm should succeed");
    assert!(again.confirmed);
    assert_eq!(again.id, confirmed.id);
}

#[test]
fn test_confirm_missing_step_fails() {
    let (_temp_file, mut db) = create_test_db();

    let assignment = db
        .create_assignment("Empty", None, due(), Priority::Medium)
        .expect("Failed to create assignment");
    let question = db
        .add_question(assignment.id, "Solve w", None)
        .expect("Failed to add question");

    let result = db.confirm_step(question.id, 1);
    assert!(matches!(result, Err(TutorError::StepNotFound { .. })));
}

#[test]
fn test_subjects_and_topics() {
    let (_temp_file, mut db) = create_test_db();

    let subject = db
        .create_subject("Mathematics", Some("📐"))
        .expect("Failed to create subject");
    let topic = db
        .create_topic(subject.id, "Quadratic equations")
        .expect("Failed to create topic");

    let subjects = db.list_subjects().expect("Failed to list subjects");
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].icon.as_deref(), Some("📐"));

    let topics = db.list_topics(subject.id).expect("Failed to list topics");
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].id, topic.id);

    db.delete_subject(subject.id)
        .expect("Failed to delete subject");
    assert!(db.list_subjects().unwrap().is_empty());
}

#[test]
fn test_create_topic_requires_subject() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_topic(5, "Orphan topic");
    assert!(matches!(result, Err(TutorError::SubjectNotFound { id: 5 })));
}

#[test]
fn test_deleting_subject_keeps_assignments() {
    let (_temp_file, mut db) = create_test_db();

    let subject = db
        .create_subject("History", None)
        .expect("Failed to create subject");
    let assignment = db
        .create_assignment("Essay", Some(subject.id), due(), Priority::Medium)
        .expect("Failed to create assignment");

    db.delete_subject(subject.id)
        .expect("Failed to delete subject");

    let retrieved = db
        .get_assignment(assignment.id)
        .expect("Query should succeed")
        .expect("Assignment should survive subject deletion");
    assert_eq!(retrieved.subject_id, None);
}

#[test]
fn test_lecture_log() {
    let (_temp_file, mut db) = create_test_db();

    let subject = db
        .create_subject("Physics", None)
        .expect("Failed to create subject");
    let earlier: Timestamp = "2026-08-20T10:00:00Z".parse().unwrap();
    let later: Timestamp = "2026-08-21T10:00:00Z".parse().unwrap();

    db.log_lecture("Kinematics", Some(subject.id), earlier, Some("Notes"))
        .expect("Failed to log lecture");
    db.log_lecture("Unsorted", None, later, None)
        .expect("Failed to log lecture");

    let all = db.list_lectures(None).expect("Failed to list lectures");
    assert_eq!(all.len(), 2);
    // Newest first
    assert_eq!(all[0].title, "Unsorted");
    assert_eq!(all[1].title, "Kinematics");

    let filtered = db
        .list_lectures(Some(subject.id))
        .expect("Failed to list lectures");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Kinematics");
}

#[test]
fn test_settings_roundtrip() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db.get_setting("mode").unwrap().is_none());

    db.set_setting("mode", "guided").expect("Failed to set");
    assert_eq!(db.get_setting("mode").unwrap().as_deref(), Some("guided"));

    db.set_setting("mode", "direct").expect("Failed to overwrite");
    assert_eq!(db.get_setting("mode").unwrap().as_deref(), Some("direct"));

    db.unset_setting("mode").expect("Failed to unset");
    assert!(db.get_setting("mode").unwrap().is_none());
}
