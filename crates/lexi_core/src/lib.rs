pub mod db;
pub mod error;
pub mod profile;
pub mod session;
pub mod turn;

pub use error::{LexiError, Result};
pub use profile::LearnerProfile;
pub use session::{SessionId, TutorSession};
pub use turn::{Role, Turn};
