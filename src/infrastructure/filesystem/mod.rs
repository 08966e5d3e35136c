pub mod config_store;

pub use config_store::{ConfigStore, JsonConfigStore};
