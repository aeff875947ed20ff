pub mod profile;
pub mod question;
pub mod quiz;
pub mod session;
pub use profile::UserProfile;
pub use question::{OptionLetter, Question};
pub use quiz::Quiz;
pub use session::{SessionPhase, SessionState};
