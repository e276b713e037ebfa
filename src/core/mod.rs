/*!
 * Core Module
 * Error types and guarded handle primitives
 */

pub mod errors;
pub mod guard;

// Re-export for convenience
pub use errors::*;
pub use guard::{Guard, GuardMetadata, GuardedHandle, HandleState};
