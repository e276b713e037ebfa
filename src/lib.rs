/*!
 * ADSI User Accessors
 *
 * Thread-safe, closable handles over Active Directory user objects. Every
 * accessor serializes on the handle's lock, fails fast once the handle is
 * closed, and otherwise returns exactly what the directory interface returned.
 */

pub mod adsi;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod runtime;

// Re-exports
pub use adsi::{
    Client, DirectoryProvider, LargeInteger, LargeIntegerValue, Object, ObjectInterface, User,
    UserInterface, Variant,
};
pub use config::AdsiConfig;
pub use crate::core::errors::{AdsiError, AdsiResult, DelegateError};
pub use crate::core::guard::{Guard, GuardMetadata, GuardedHandle, HandleState};
pub use monitoring::{init_tracing, init_tracing_with};
pub use runtime::{ApartmentModel, ComRuntime, NoopBridge, RuntimeBridge, RuntimeLease};
