use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemorySessionRepository,
    services::{
        model_service::{ChatCompletionsGenerator, QuizGenerator},
        quiz_assembler::QuizAssembler,
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(ChatCompletionsGenerator::new(&config));
        Self::with_generator(config, generator)
    }

    /// Same wiring as `new`, but with the given generation backend.
    pub fn with_generator(config: Config, generator: Arc<dyn QuizGenerator>) -> Self {
        let assembler = Arc::new(QuizAssembler::new(generator, config.generation_timeout()));
        let session_repository = Arc::new(InMemorySessionRepository::with_idle_ttl(
            config.session_idle_ttl(),
        ));
        let session_service = Arc::new(SessionService::new(session_repository, assembler));

        Self {
            session_service,
            config: Arc::new(config),
        }
    }
}
