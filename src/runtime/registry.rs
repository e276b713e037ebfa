/*!
 * Runtime Registry
 * Reference counting for the runtime bridge with RAII leases
 */

use super::bridge::{ApartmentModel, NoopBridge, RuntimeBridge};
use crate::core::errors::{AdsiError, AdsiResult};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

static GLOBAL: OnceLock<ComRuntime> = OnceLock::new();

struct RuntimeInner {
    bridge: Box<dyn RuntimeBridge>,
    apartment: ApartmentModel,
    // Bridge transitions happen while this is held
    refs: Mutex<usize>,
}

/// Reference-counted owner of the runtime bridge
///
/// Cheap to clone; clones share the same count. Most callers use
/// [`ComRuntime::global`]. Tests and embedders that need isolation build
/// their own with [`ComRuntime::new`].
#[derive(Clone)]
pub struct ComRuntime {
    inner: Arc<RuntimeInner>,
}

impl ComRuntime {
    pub fn new(bridge: impl RuntimeBridge + 'static, apartment: ApartmentModel) -> Self {
        Self {
            inner: Arc::new(RuntimeInner {
                bridge: Box::new(bridge),
                apartment,
                refs: Mutex::new(0),
            }),
        }
    }

    /// Process-wide runtime
    ///
    /// Uses a [`NoopBridge`] unless [`ComRuntime::install_global`] ran
    /// first. The global is never torn down itself; the bridge is
    /// uninitialized whenever its lease count returns to zero.
    pub fn global() -> &'static ComRuntime {
        GLOBAL.get_or_init(|| ComRuntime::new(NoopBridge, ApartmentModel::default()))
    }

    /// Install the process-wide runtime
    ///
    /// Must run before the first call to [`ComRuntime::global`]; fails once
    /// a global runtime exists.
    pub fn install_global(
        bridge: impl RuntimeBridge + 'static,
        apartment: ApartmentModel,
    ) -> AdsiResult<&'static ComRuntime> {
        GLOBAL
            .set(ComRuntime::new(bridge, apartment))
            .map_err(|_| AdsiError::Runtime("global runtime already installed".into()))?;
        Ok(Self::global())
    }

    /// Take one reference on the runtime, initializing it on 0 -> 1
    ///
    /// A failed initialization leaves the count untouched.
    pub fn acquire(&self) -> AdsiResult<RuntimeLease> {
        let mut refs = self.inner.refs.lock();
        if *refs == 0 {
            self.inner
                .bridge
                .initialize(self.inner.apartment)
                .map_err(|e| AdsiError::Runtime(e.to_string()))?;
            info!(apartment = ?self.inner.apartment, "COM runtime initialized");
        }
        *refs += 1;
        debug!(refs = *refs, "runtime lease acquired");

        Ok(RuntimeLease {
            runtime: self.clone(),
        })
    }

    /// Number of live leases
    pub fn ref_count(&self) -> usize {
        *self.inner.refs.lock()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.ref_count() > 0
    }

    #[inline]
    pub fn apartment(&self) -> ApartmentModel {
        self.inner.apartment
    }

    fn release(&self) {
        let mut refs = self.inner.refs.lock();
        debug_assert!(*refs > 0, "runtime lease released with zero references");
        *refs = refs.saturating_sub(1);
        debug!(refs = *refs, "runtime lease released");
        if *refs == 0 {
            self.inner.bridge.uninitialize();
            info!("COM runtime uninitialized");
        }
    }
}

impl fmt::Debug for ComRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComRuntime")
            .field("apartment", &self.inner.apartment)
            .field("refs", &self.ref_count())
            .finish()
    }
}

/// One reference on a [`ComRuntime`], returned on drop
#[must_use = "dropping a lease immediately releases the runtime reference"]
pub struct RuntimeLease {
    runtime: ComRuntime,
}

impl RuntimeLease {
    pub fn runtime(&self) -> &ComRuntime {
        &self.runtime
    }
}

impl fmt::Debug for RuntimeLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeLease").finish_non_exhaustive()
    }
}

impl Drop for RuntimeLease {
    fn drop(&mut self) {
        self.runtime.release();
    }
}
