/*!
 * Directory User
 * Guarded access to Active Directory user attributes
 */

use super::object::Object;
use super::traits::{LargeIntegerValue, UserInterface};
use super::variant::Variant;
use crate::core::errors::{AdsiError, AdsiResult};
use crate::core::guard::{Guard, GuardMetadata};
use crate::runtime::ComRuntime;
use std::fmt;

/// Thread-safe handle to a live user object
///
/// The user interface and its base object interface share one lock and one
/// lifetime: closing the user closes both. All accessors block until the lock
/// is free, then either fail with [`AdsiError::Closed`] or return exactly what
/// the interface returned.
///
/// # Example
///
/// ```ignore
/// let user = User::new(iface, ComRuntime::global())?;
/// println!("{}", user.full_name()?);
/// user.close();
/// assert!(user.full_name().unwrap_err().is_closed());
/// ```
pub struct User<I: UserInterface> {
    object: Object<I>,
}

impl<I: UserInterface> User<I> {
    /// Wrap an already-open user interface, taking a reference on `runtime`
    pub fn new(iface: I, runtime: &ComRuntime) -> AdsiResult<Self> {
        Ok(Self {
            object: Object::with_resource_type(iface, runtime, "user")?,
        })
    }

    /// Base object view sharing this user's lock and lifetime
    pub fn as_object(&self) -> &Object<I> {
        &self.object
    }

    pub fn full_name(&self) -> AdsiResult<String> {
        self.object
            .handle()
            .with_open("full_name", |iface| iface.full_name())
    }

    pub fn description(&self) -> AdsiResult<String> {
        self.object
            .handle()
            .with_open("description", |iface| iface.description())
    }

    pub fn password_required(&self) -> AdsiResult<bool> {
        self.object
            .handle()
            .with_open("password_required", |iface| iface.password_required())
    }

    pub fn account_disabled(&self) -> AdsiResult<bool> {
        self.object
            .handle()
            .with_open("account_disabled", |iface| iface.account_disabled())
    }

    pub fn is_account_locked(&self) -> AdsiResult<bool> {
        self.object
            .handle()
            .with_open("is_account_locked", |iface| iface.is_account_locked())
    }

    pub fn require_unique_password(&self) -> AdsiResult<bool> {
        self.object
            .handle()
            .with_open("require_unique_password", |iface| {
                iface.require_unique_password()
            })
    }

    pub fn password_minimum_length(&self) -> AdsiResult<i64> {
        self.object
            .handle()
            .with_open("password_minimum_length", |iface| {
                iface.password_minimum_length()
            })
    }

    /// Last logon time as the raw integer the directory stores
    ///
    /// Reads the large-integer object and combines its halves. A failure in
    /// either step is returned unchanged. Use
    /// [`filetime::to_datetime`](crate::adsi::filetime::to_datetime) to
    /// interpret the value.
    pub fn last_login(&self) -> AdsiResult<i64> {
        self.object
            .handle()
            .with_open("last_login", |iface| iface.last_login()?.value())
    }

    /// Password expiration as the raw integer the interface reports
    pub fn password_expiration_date(&self) -> AdsiResult<i64> {
        self.object
            .handle()
            .with_open("password_expiration_date", |iface| {
                iface.password_expiration_date()
            })
    }

    /// Raw value of a named attribute
    pub fn get(&self, name: &str) -> AdsiResult<Variant> {
        self.object.get(name)
    }

    /// Named attribute converted to a concrete type
    pub fn get_as<T>(&self, name: &str) -> AdsiResult<T>
    where
        T: TryFrom<Variant, Error = AdsiError>,
    {
        self.object.get_as(name)
    }

    pub fn name(&self) -> AdsiResult<String> {
        self.object.name()
    }

    pub fn class(&self) -> AdsiResult<String> {
        self.object.class()
    }

    pub fn guid(&self) -> AdsiResult<String> {
        self.object.guid()
    }

    pub fn ads_path(&self) -> AdsiResult<String> {
        self.object.ads_path()
    }

    pub fn parent(&self) -> AdsiResult<String> {
        self.object.parent()
    }

    pub fn schema(&self) -> AdsiResult<String> {
        self.object.schema()
    }

    /// Release the user interface and its runtime reference
    ///
    /// Only the first call has an effect; later calls return immediately.
    pub fn close(&self) {
        self.object.close();
    }

    pub fn is_closed(&self) -> bool {
        self.object.is_closed()
    }
}

impl<I: UserInterface + Send> Guard for User<I> {
    fn resource_type(&self) -> &'static str {
        self.object.resource_type()
    }

    fn metadata(&self) -> &GuardMetadata {
        self.object.metadata()
    }

    fn is_active(&self) -> bool {
        !self.is_closed()
    }

    fn release(&self) {
        self.close();
    }
}

impl<I: UserInterface> fmt::Debug for User<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User").field("object", &self.object).finish()
    }
}
