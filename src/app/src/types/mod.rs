//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - settings: persisted settings record and settings form
//! - stream: stream viewer state machine

pub mod settings;
pub mod stream;

pub use settings::*;
pub use stream::*;
