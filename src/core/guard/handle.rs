/*!
 * Guarded Handle
 *
 * Mutex-protected Open/Closed state around a live resource and its runtime lease
 */

use super::GuardMetadata;
use crate::core::errors::{AdsiError, AdsiResult, DelegateError};
use crate::runtime::RuntimeLease;
use parking_lot::Mutex;
use std::fmt;
use tracing::{debug, trace};

/// Lifecycle of a guarded resource
///
/// `Open -> Closed` is the only transition and it is irreversible.
pub enum HandleState<T> {
    Open { resource: T, lease: RuntimeLease },
    Closed,
}

impl<T> HandleState<T> {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, HandleState::Open { .. })
    }
}

/// Serialized access to a resource that can be closed exactly once
///
/// Every [`with_open`](Self::with_open) call and the single effective
/// [`close`](Self::close) are totally ordered by one lock. Calls block; there
/// is no timeout and no cancellation.
pub struct GuardedHandle<T> {
    state: Mutex<HandleState<T>>,
    metadata: GuardMetadata,
}

impl<T> GuardedHandle<T> {
    /// Wrap an already-open resource
    ///
    /// The lease keeps the runtime bridge alive until the handle closes.
    pub fn open(resource: T, lease: RuntimeLease, metadata: GuardMetadata) -> Self {
        debug!(resource = metadata.resource_type, "handle opened");
        Self {
            state: Mutex::new(HandleState::Open { resource, lease }),
            metadata,
        }
    }

    #[inline]
    pub fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    #[inline]
    pub fn resource_type(&self) -> &'static str {
        self.metadata.resource_type
    }

    pub fn is_closed(&self) -> bool {
        !self.state.lock().is_open()
    }

    /// Run one delegate call against the open resource
    ///
    /// Returns [`AdsiError::Closed`] without calling `f` once the handle is
    /// closed. Delegate errors come back unchanged inside
    /// [`AdsiError::Delegate`].
    pub fn with_open<R, F>(&self, operation: &'static str, f: F) -> AdsiResult<R>
    where
        F: FnOnce(&T) -> Result<R, DelegateError>,
    {
        let state = self.state.lock();
        let resource = match &*state {
            HandleState::Open { resource, .. } => resource,
            HandleState::Closed => {
                trace!(
                    resource = self.metadata.resource_type,
                    operation,
                    "rejected on closed handle"
                );
                return Err(AdsiError::Closed);
            }
        };

        trace!(resource = self.metadata.resource_type, operation, "delegating");
        f(resource).map_err(|err| {
            debug!(
                resource = self.metadata.resource_type,
                operation,
                code = err.code,
                error = %err,
                "delegate call failed"
            );
            AdsiError::Delegate(err)
        })
    }

    /// Close the handle
    ///
    /// The first call hands the resource to `release` and then drops the
    /// runtime lease, both under the lock. Later calls return `false` and do
    /// nothing.
    pub fn close<F>(&self, release: F) -> bool
    where
        F: FnOnce(T),
    {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, HandleState::Closed) {
            HandleState::Closed => false,
            HandleState::Open { resource, lease } => {
                release(resource);
                drop(lease);
                debug!(
                    resource = self.metadata.resource_type,
                    lifetime_micros = self.metadata.lifetime_micros(),
                    "handle closed"
                );
                true
            }
        }
    }
}

// Never blocks, so a handle can be formatted from inside its own delegate call
impl<T> fmt::Debug for GuardedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("GuardedHandle");
        out.field("resource_type", &self.metadata.resource_type);
        match self.state.try_lock() {
            Some(state) => out.field("closed", &!state.is_open()),
            None => out.field("closed", &format_args!("<locked>")),
        };
        out.finish()
    }
}
