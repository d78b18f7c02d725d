pub mod config;
pub mod dashboard_service;
pub mod host;
pub mod sequencer;

pub use config::*;
pub use dashboard_service::*;
pub use host::*;
pub use sequencer::*;
