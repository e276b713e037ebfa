/*!
 * Guard Traits
 *
 * Core abstraction shared by every closable directory handle
 */

use super::GuardMetadata;

/// Core guard trait
///
/// All handles implement this to provide:
/// - Resource type identification
/// - Metadata access
/// - Manual, idempotent release
pub trait Guard: Send + Sync {
    /// Resource type name for logging/debugging
    fn resource_type(&self) -> &'static str;

    /// Get guard metadata
    fn metadata(&self) -> &GuardMetadata;

    /// Check if the underlying resource is still open
    fn is_active(&self) -> bool;

    /// Release the resource
    ///
    /// Releasing an inactive guard is a no-op, never an error.
    fn release(&self);
}
