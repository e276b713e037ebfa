/*!
 * Guarded Handles
 *
 * Serialized, closable access to a live external resource.
 *
 * ## Design Principles
 *
 * 1. **Tagged State**: `Open { resource, lease } | Closed`, never a null check
 * 2. **Serialized**: every access and the close run under one mutex
 * 3. **One-Shot Release**: the resource and its runtime lease are released once
 * 4. **Fail Fast**: access after close returns [`AdsiError::Closed`](crate::AdsiError::Closed)
 *    without touching the resource
 *
 * ## Example
 *
 * ```ignore
 * let handle = GuardedHandle::open(iface, runtime.acquire()?, GuardMetadata::new("user"));
 * let name = handle.with_open("full_name", |iface| iface.full_name())?;
 * handle.close(|mut iface| iface.release());
 * ```
 */

mod handle;
mod traits;

pub use handle::{GuardedHandle, HandleState};
pub use traits::Guard;

/// Guard metadata for observability
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub creation_time: std::time::Instant,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
