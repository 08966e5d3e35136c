pub mod config_document;
pub mod repository;
pub mod standup;

pub use config_document::ConfigDocument;
pub use repository::{Repository, RepositoryUpdate};
pub use standup::{Standup, StandupUpdate};
