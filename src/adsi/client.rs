/*!
 * Directory Client
 * Binds ADs paths through a provider and wraps the results in guarded handles
 */

use super::object::Object;
use super::traits::DirectoryProvider;
use super::user::User;
use crate::core::errors::{AdsiError, AdsiResult};
use crate::monitoring::BindSpan;
use crate::runtime::{ComRuntime, RuntimeLease};
use parking_lot::Mutex;
use tracing::debug;

/// Entry point for opening directory objects
///
/// Holds one runtime reference for its own lifetime, so the runtime stays up
/// between handles. Each handle it opens takes its own reference and
/// outlives the client if kept.
pub struct Client<P: DirectoryProvider> {
    provider: P,
    runtime: ComRuntime,
    lease: Mutex<Option<RuntimeLease>>,
}

impl<P: DirectoryProvider> Client<P> {
    /// Client on the process-wide runtime
    pub fn new(provider: P) -> AdsiResult<Self> {
        Self::with_runtime(provider, ComRuntime::global().clone())
    }

    pub fn with_runtime(provider: P, runtime: ComRuntime) -> AdsiResult<Self> {
        let lease = runtime.acquire()?;
        Ok(Self {
            provider,
            runtime,
            lease: Mutex::new(Some(lease)),
        })
    }

    pub fn runtime(&self) -> &ComRuntime {
        &self.runtime
    }

    /// Open any directory object by ADs path
    pub fn open_object(&self, path: &str) -> AdsiResult<Object<P::Object>> {
        self.ensure_open()?;

        let span = BindSpan::new("object", path);
        let _entered = span.enter();
        let result = self
            .provider
            .open_object(path)
            .map_err(AdsiError::from)
            .and_then(|iface| Object::new(iface, &self.runtime));
        span.record_result(&result);
        result
    }

    /// Open a user object by ADs path
    pub fn open_user(&self, path: &str) -> AdsiResult<User<P::User>> {
        self.ensure_open()?;

        let span = BindSpan::new("user", path);
        let _entered = span.enter();
        let result = self
            .provider
            .open_user(path)
            .map_err(AdsiError::from)
            .and_then(|iface| User::new(iface, &self.runtime));
        span.record_result(&result);
        result
    }

    // The lock is not held across the bind, so binds through one client run
    // concurrently. A bind racing with close may still succeed; its handle
    // carries its own lease.
    fn ensure_open(&self) -> AdsiResult<()> {
        if self.lease.lock().is_none() {
            return Err(AdsiError::Closed);
        }
        Ok(())
    }

    /// Drop the client's runtime reference
    ///
    /// Handles already opened stay usable. Only the first call has an effect.
    pub fn close(&self) {
        if self.lease.lock().take().is_some() {
            debug!("directory client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.lease.lock().is_none()
    }
}
