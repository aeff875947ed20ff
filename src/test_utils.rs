#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::UserProfile;

    /// A fully filled-in profile
    pub fn test_profile() -> UserProfile {
        UserProfile {
            name: "Ada".to_string(),
            age: "36".to_string(),
            country: "UK".to_string(),
            field: "IT".to_string(),
            role: "Software Developer".to_string(),
        }
    }

    /// Generated text with `count` well-formed question blocks. Answer keys
    /// cycle A, B, C, D starting from the first question.
    pub fn generated_quiz_text(count: usize) -> String {
        let mut text = String::from("Here is your personalised quiz!\n\n");
        for i in 1..=count {
            let letter = ["A", "B", "C", "D"][(i - 1) % 4];
            text.push_str(&format!(
                "{i}. What is concept {i} about?\nA. First choice {i}\nB. Second choice {i}\nC. Third choice {i}\nD. Fourth choice {i}\nAnswer: {letter}\n\n"
            ));
        }
        text
    }
}

#[cfg(test)]
pub mod stubs {
    use async_trait::async_trait;
    use std::time::Duration;

    use crate::{errors::GenerationError, services::model_service::QuizGenerator};

    /// Always returns the same text.
    pub struct FixedGenerator(pub String);

    #[async_trait]
    impl QuizGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok(self.0.clone())
        }
    }

    /// Always fails.
    pub struct FailingGenerator;

    #[async_trait]
    impl QuizGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Err(GenerationError::Api {
                status: 503,
                body: "model overloaded".to_string(),
            })
        }
    }

    /// Sleeps before answering, for timeout paths.
    pub struct SlowGenerator(pub Duration);

    #[async_trait]
    impl QuizGenerator for SlowGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            tokio::time::sleep(self.0).await;
            Ok(super::fixtures::generated_quiz_text(10))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_generated_quiz_text() {
        let text = generated_quiz_text(5);
        assert_eq!(text.matches("Answer: ").count(), 5);
        assert!(text.contains("5. What is concept 5 about?\nA. First choice 5"));
        assert!(text.contains("Answer: D\n\n5."));
    }

    #[test]
    fn test_fixtures_test_profile() {
        let profile = test_profile();
        assert_eq!(profile.field, "IT");
        assert!(profile.validate().is_ok());
    }
}
