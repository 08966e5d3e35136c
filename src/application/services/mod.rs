pub mod repository_service;
pub mod standup_service;

pub use repository_service::{AddRepositoryRequest, RepositoryService};
pub use standup_service::StandupService;
