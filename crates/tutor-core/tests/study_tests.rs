mod common;

use common::create_test_tutor;
use tutor_core::{
    params::{DetectWeakSkills, MakeFlashcards, PracticeQuestions, StudyNotes},
    Difficulty, IncorrectAnswer, TutorError,
};

#[tokio::test]
async fn study_notes_pass_material_through_the_prompt() {
    let (_temp_dir, tutor, client) =
        create_test_tutor(vec![Ok("# Notes\nKey concepts...".to_string())]).await;

    let notes = tutor
        .generate_study_notes(&StudyNotes {
            topic: "Photosynthesis".to_string(),
            material: Some("Chloroplasts convert light energy.".to_string()),
        })
        .await
        .expect("Failed to generate notes");

    assert!(notes.starts_with("# Notes"));

    let prompts = client.prompts();
    assert!(prompts[0].contains("\"Photosynthesis\""));
    assert!(prompts[0].contains("Chloroplasts convert light energy."));
}

#[tokio::test]
async fn study_notes_require_a_topic() {
    let (_temp_dir, tutor, client) = create_test_tutor(vec![]).await;

    let result = tutor
        .generate_study_notes(&StudyNotes {
            topic: "   ".to_string(),
            material: None,
        })
        .await;
    assert!(matches!(result, Err(TutorError::InvalidInput { .. })));
    assert!(client.prompts().is_empty());
}

#[tokio::test]
async fn practice_questions_are_split_from_the_numbered_response() {
    let (_temp_dir, tutor, client) = create_test_tutor(vec![Ok(
        "1. What is a derivative?\n2. Differentiate x^2.".to_string(),
    )])
    .await;

    let questions = tutor
        .generate_practice_questions(&PracticeQuestions {
            topic: "Calculus".to_string(),
            difficulty: Difficulty::Hard,
            count: 2,
            weak_skills: vec!["chain rule".to_string()],
        })
        .await
        .expect("Failed to generate questions");

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0], "What is a derivative?");

    let prompts = client.prompts();
    assert!(prompts[0].contains("Generate 2 hard practice question(s)"));
    assert!(prompts[0].contains("chain rule"));
}

#[tokio::test]
async fn malformed_question_response_yields_empty_list() {
    let (_temp_dir, tutor, _client) =
        create_test_tutor(vec![Ok("Sorry, I cannot help with that.".to_string())]).await;

    let questions = tutor
        .generate_practice_questions(&PracticeQuestions {
            topic: "Calculus".to_string(),
            ..Default::default()
        })
        .await
        .expect("Parsing failure should not be an error");

    assert!(questions.is_empty());
}

#[tokio::test]
async fn flashcards_parse_front_back_pairs() {
    let (_temp_dir, tutor, _client) = create_test_tutor(vec![Ok(
        "FRONT: What is osmosis?\nBACK: Diffusion of water across a membrane.\n\
         FRONT: Orphaned front without a back"
            .to_string(),
    )])
    .await;

    let cards = tutor
        .generate_flashcards(&MakeFlashcards {
            topic: "Biology".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to generate flashcards");

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].front, "What is osmosis?");
    assert_eq!(cards[0].back, "Diffusion of water across a membrane.");
}

#[tokio::test]
async fn weak_skills_are_parsed_one_per_line() {
    let (_temp_dir, tutor, client) = create_test_tutor(vec![Ok(
        "- Factoring quadratics\n- Applying the chain rule".to_string(),
    )])
    .await;

    let skills = tutor
        .detect_weak_skills(&DetectWeakSkills {
            topic: "Algebra".to_string(),
            incorrect_answers: vec![IncorrectAnswer {
                question: "Factor x^2 - 4".to_string(),
                user_answer: "(x-2)(x-2)".to_string(),
                correct_answer: "(x-2)(x+2)".to_string(),
            }],
        })
        .await
        .expect("Failed to detect weak skills");

    assert_eq!(
        skills,
        vec!["Factoring quadratics", "Applying the chain rule"]
    );

    let prompts = client.prompts();
    assert!(prompts[0].contains("User Answer: (x-2)(x-2)"));
}

#[tokio::test]
async fn weak_skill_detection_requires_answers() {
    let (_temp_dir, tutor, _client) = create_test_tutor(vec![]).await;

    let result = tutor
        .detect_weak_skills(&DetectWeakSkills {
            topic: "Algebra".to_string(),
            incorrect_answers: vec![],
        })
        .await;
    assert!(matches!(result, Err(TutorError::InvalidInput { .. })));
}
