// Service exports
pub mod artifacts;

pub use artifacts::{ArtifactError, ArtifactLoader};
