use std::{sync::Arc, time::Duration};

use crate::{
    constants::{quiz_prompt::quiz_generation_prompt, MAX_QUIZ_QUESTIONS, MIN_QUIZ_QUESTIONS},
    errors::GenerationError,
    models::domain::{Quiz, UserProfile},
    services::{
        fallback_questions::{fallback, reserve},
        model_service::QuizGenerator,
        question_extractor::extract,
    },
};

/// Turns a profile into a quiz: one generation call, extraction, then the
/// fallback policy. Never fails and never returns an empty quiz.
pub struct QuizAssembler {
    generator: Arc<dyn QuizGenerator>,
    timeout: Duration,
}

impl QuizAssembler {
    pub fn new(generator: Arc<dyn QuizGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// `profile` is expected to be resolved already (defaults applied).
    pub async fn assemble(&self, profile: &UserProfile) -> Quiz {
        let prompt = quiz_generation_prompt(profile);

        let raw_text = match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "Quiz generation failed for field '{}', serving fallback questions: {}",
                    profile.field,
                    e
                );
                return Quiz::new(fallback(&profile.field, &profile.role));
            }
        };

        let mut questions = extract(&raw_text);
        let extracted = questions.len();
        log::info!("Extracted {} questions from generated text", extracted);

        if extracted < MIN_QUIZ_QUESTIONS {
            questions.extend(fallback(&profile.field, &profile.role));

            if questions.len() < MIN_QUIZ_QUESTIONS {
                let missing = MIN_QUIZ_QUESTIONS - questions.len();
                questions.extend(reserve(&profile.field, &profile.role).into_iter().take(missing));
            }

            log::info!(
                "Padded quiz from {} extracted to {} questions",
                extracted,
                questions.len()
            );
        }

        questions.truncate(MAX_QUIZ_QUESTIONS);
        Quiz::new(questions)
    }

    /// Single attempt, bounded by the configured timeout. No retries.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tokio::time::timeout(self.timeout, self.generator.generate(prompt))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))?
    }
}
