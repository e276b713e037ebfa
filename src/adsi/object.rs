/*!
 * Directory Object
 * Guarded access to the base ADS object interface
 */

use super::traits::ObjectInterface;
use super::variant::Variant;
use crate::core::errors::{AdsiError, AdsiResult};
use crate::core::guard::{Guard, GuardMetadata, GuardedHandle};
use crate::runtime::ComRuntime;
use std::fmt;

/// Thread-safe handle to a live directory object
///
/// Every accessor takes the handle's lock, fails with [`AdsiError::Closed`]
/// after [`close`](Self::close), and otherwise forwards to the interface.
/// Dropping the handle closes it.
pub struct Object<I: ObjectInterface> {
    handle: GuardedHandle<I>,
}

impl<I: ObjectInterface> Object<I> {
    /// Wrap an already-open interface, taking a reference on `runtime`
    ///
    /// If the runtime cannot be acquired the interface is released before the
    /// error is returned.
    pub fn new(iface: I, runtime: &ComRuntime) -> AdsiResult<Self> {
        Self::with_resource_type(iface, runtime, "object")
    }

    pub(crate) fn with_resource_type(
        mut iface: I,
        runtime: &ComRuntime,
        resource_type: &'static str,
    ) -> AdsiResult<Self> {
        let lease = match runtime.acquire() {
            Ok(lease) => lease,
            Err(e) => {
                iface.release();
                return Err(e);
            }
        };

        Ok(Self {
            handle: GuardedHandle::open(iface, lease, GuardMetadata::new(resource_type)),
        })
    }

    pub(crate) fn handle(&self) -> &GuardedHandle<I> {
        &self.handle
    }

    /// Relative name of the object
    pub fn name(&self) -> AdsiResult<String> {
        self.handle.with_open("name", |iface| iface.name())
    }

    /// Schema class name
    pub fn class(&self) -> AdsiResult<String> {
        self.handle.with_open("class", |iface| iface.class())
    }

    pub fn guid(&self) -> AdsiResult<String> {
        self.handle.with_open("guid", |iface| iface.guid())
    }

    /// ADs path that uniquely identifies the object
    pub fn ads_path(&self) -> AdsiResult<String> {
        self.handle.with_open("ads_path", |iface| iface.ads_path())
    }

    /// ADs path of the parent container
    pub fn parent(&self) -> AdsiResult<String> {
        self.handle.with_open("parent", |iface| iface.parent())
    }

    /// ADs path of the schema class object
    pub fn schema(&self) -> AdsiResult<String> {
        self.handle.with_open("schema", |iface| iface.schema())
    }

    /// Raw value of a named attribute
    ///
    /// `name` is passed through as-is.
    pub fn get(&self, name: &str) -> AdsiResult<Variant> {
        self.handle.with_open("get", |iface| iface.get(name))
    }

    /// Named attribute converted to a concrete type
    pub fn get_as<T>(&self, name: &str) -> AdsiResult<T>
    where
        T: TryFrom<Variant, Error = AdsiError>,
    {
        T::try_from(self.get(name)?)
    }

    /// Release the interface and its runtime reference
    ///
    /// Only the first call has an effect.
    pub fn close(&self) {
        self.handle.close(|mut iface| iface.release());
    }

    pub fn is_closed(&self) -> bool {
        self.handle.is_closed()
    }
}

impl<I: ObjectInterface + Send> Guard for Object<I> {
    fn resource_type(&self) -> &'static str {
        self.handle.resource_type()
    }

    fn metadata(&self) -> &GuardMetadata {
        self.handle.metadata()
    }

    fn is_active(&self) -> bool {
        !self.is_closed()
    }

    fn release(&self) {
        self.close();
    }
}

impl<I: ObjectInterface> fmt::Debug for Object<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("handle", &self.handle).finish()
    }
}

impl<I: ObjectInterface> Drop for Object<I> {
    fn drop(&mut self) {
        if !self.handle.is_closed() {
            log::debug!("{} handle dropped while open; closing", self.handle.resource_type());
            self.close();
        }
    }
}
