pub mod health_handler;
pub mod session_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use session_handler::{
    create_session, delete_session, get_badges, get_results, get_session, reset_session,
    retake_quiz, submit_answers, submit_profile,
};

/// Registers every route on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(get_badges)
        .service(create_session)
        .service(get_session)
        .service(delete_session)
        .service(submit_profile)
        .service(submit_answers)
        .service(retake_quiz)
        .service(reset_session)
        .service(get_results);
}
