use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use brain_booster::{
    constants::{MAX_QUIZ_QUESTIONS, MIN_QUIZ_QUESTIONS},
    errors::{AppError, GenerationError},
    models::{
        domain::{SessionPhase, UserProfile},
        dto::request::{SubmitAnswersRequest, SubmitProfileRequest},
    },
    repositories::InMemorySessionRepository,
    services::{
        badge_resolver::resolve, model_service::QuizGenerator, question_extractor::extract,
        quiz_assembler::QuizAssembler, session_service::SessionService,
    },
};

fn quiz_text(count: usize) -> String {
    (1..=count)
        .map(|i| {
            let letter = ["A", "B", "C", "D"][(i - 1) % 4];
            format!(
                "{i}. Question number {i}?\nA. alpha\nB. beta\nC. gamma\nD. delta\nAnswer: {letter}\n\n"
            )
        })
        .collect()
}

struct CannedGenerator(String);

#[async_trait]
impl QuizGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}

struct BrokenGenerator;

#[async_trait]
impl QuizGenerator for BrokenGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Http("connection reset".to_string()))
    }
}

fn assembler(generator: Arc<dyn QuizGenerator>) -> QuizAssembler {
    QuizAssembler::new(generator, Duration::from_secs(5))
}

fn service(generator: Arc<dyn QuizGenerator>) -> Arc<SessionService> {
    Arc::new(SessionService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(assembler(generator)),
    ))
}

fn profile() -> UserProfile {
    UserProfile {
        field: "Architecture".to_string(),
        role: "Urban Planner".to_string(),
        ..Default::default()
    }
    .resolved()
}

#[test]
fn extraction_count_matches_well_formed_blocks() {
    for n in 0..=12 {
        let questions = extract(&quiz_text(n));
        assert_eq!(questions.len(), n);
        for (i, question) in questions.iter().enumerate() {
            assert!(question.text.starts_with(&format!("{}. ", i + 1)));
        }
    }
}

#[tokio::test]
async fn successful_generation_always_yields_between_min_and_max() {
    for n in 0..=14 {
        let quiz = assembler(Arc::new(CannedGenerator(quiz_text(n))))
            .assemble(&profile())
            .await;

        assert!(
            (MIN_QUIZ_QUESTIONS..=MAX_QUIZ_QUESTIONS).contains(&quiz.len()),
            "{} extracted questions produced a quiz of {}",
            n,
            quiz.len()
        );
    }
}

#[tokio::test]
async fn failed_generation_yields_small_non_empty_quiz() {
    let quiz = assembler(Arc::new(BrokenGenerator)).assemble(&profile()).await;

    assert!(!quiz.is_empty());
    assert!(quiz.len() <= 2);
    assert!(quiz.questions()[0].text.contains("Urban Planner in Architecture"));
}

#[test]
fn badge_boundaries() {
    let expected = [
        (0, "Beginner"),
        (3, "Beginner"),
        (4, "Intermediate"),
        (6, "Intermediate"),
        (7, "Advanced"),
        (9, "Expert"),
        (10, "Master"),
    ];
    for (score, badge) in expected {
        assert_eq!(resolve(score), badge, "score {}", score);
    }
}

#[tokio::test]
async fn retake_then_reset() {
    let service = service(Arc::new(CannedGenerator(quiz_text(5))));
    let session = service.create_session().await.expect("session should be created");

    service
        .submit_profile(
            &session.id,
            SubmitProfileRequest {
                field: "Music".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("profile should be accepted");

    let answers = vec![Some("B".to_string()); 5];
    let results = service
        .submit_answers(&session.id, SubmitAnswersRequest { answers })
        .await
        .expect("answers should be graded");
    assert_eq!(results.score, 1);

    let retaken = service.retake(&session.id).await.expect("retake should work");
    assert_eq!(retaken.phase, SessionPhase::CollectingProfile);
    assert_eq!(
        retaken.profile.as_ref().map(|p| p.field.as_str()),
        Some("Music")
    );
    assert!(retaken.questions.is_empty());
    assert!(retaken.score.is_none());

    let reset = service.reset(&session.id).await.expect("reset should work");
    assert_eq!(reset.phase, SessionPhase::CollectingProfile);
    assert!(reset.profile.is_none());
}

#[tokio::test]
async fn incomplete_submission_keeps_quiz_running() {
    let service = service(Arc::new(CannedGenerator(quiz_text(5))));
    let session = service.create_session().await.expect("session should be created");
    service
        .submit_profile(
            &session.id,
            SubmitProfileRequest {
                field: "Music".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("profile should be accepted");

    let answers = vec![
        Some("A".to_string()),
        Some("B".to_string()),
        None,
        Some("D".to_string()),
        Some("A".to_string()),
    ];
    let result = service
        .submit_answers(&session.id, SubmitAnswersRequest { answers })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    let view = service.get_session(&session.id).await.expect("session should exist");
    assert_eq!(view.phase, SessionPhase::QuizInProgress);
}

#[tokio::test]
async fn concurrent_submissions_on_one_session_are_serialized() {
    let service = service(Arc::new(CannedGenerator(quiz_text(5))));
    let session = service.create_session().await.expect("session should be created");
    service
        .submit_profile(
            &session.id,
            SubmitProfileRequest {
                field: "Music".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("profile should be accepted");

    let submit = |letter: &'static str| {
        let service = Arc::clone(&service);
        let id = session.id;
        tokio::spawn(async move {
            let answers = vec![Some(letter.to_string()); 5];
            service
                .submit_answers(&id, SubmitAnswersRequest { answers })
                .await
        })
    };

    let first = submit("A");
    let second = submit("C");
    let outcomes = [
        first.await.expect("task should finish"),
        second.await.expect("task should finish"),
    ];

    let graded = outcomes.iter().filter(|o| o.is_ok()).count();
    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, Err(AppError::InvalidTransition(_))))
        .count();
    assert_eq!(graded, 1);
    assert_eq!(rejected, 1);

    let results = service
        .get_results(&session.id)
        .await
        .expect("results should exist");
    assert!(results.score == 2 || results.score == 1);
}
