/*!
 * Directory Interface Traits
 *
 * The seams this crate wraps. Implementations bind a native directory
 * service (IADs / IADsUser on Windows) or stand in for one in tests.
 */

use super::variant::Variant;
use crate::core::errors::DelegateError;

/// Base directory object interface (IADs)
///
/// Every method is a single read-only query on the live object. Errors are
/// returned as produced; the guarded wrappers never reinterpret them.
pub trait ObjectInterface {
    fn name(&self) -> Result<String, DelegateError>;

    fn class(&self) -> Result<String, DelegateError>;

    fn guid(&self) -> Result<String, DelegateError>;

    fn ads_path(&self) -> Result<String, DelegateError>;

    fn parent(&self) -> Result<String, DelegateError>;

    fn schema(&self) -> Result<String, DelegateError>;

    /// Generic property query by attribute name
    fn get(&self, name: &str) -> Result<Variant, DelegateError>;

    /// Drop the native reference
    ///
    /// Called exactly once, when the owning handle closes.
    fn release(&mut self);
}

/// 64-bit integer split into two 32-bit halves (IADsLargeInteger)
pub trait LargeIntegerValue {
    fn high_part(&self) -> Result<i32, DelegateError>;

    fn low_part(&self) -> Result<i32, DelegateError>;

    /// Combine both halves; the low half is treated as unsigned
    fn value(&self) -> Result<i64, DelegateError> {
        let high = self.high_part()?;
        let low = self.low_part()?;
        Ok((i64::from(high) << 32) | i64::from(low as u32))
    }
}

/// User object interface (IADsUser)
pub trait UserInterface: ObjectInterface {
    type LargeInteger: LargeIntegerValue;

    fn full_name(&self) -> Result<String, DelegateError>;

    fn description(&self) -> Result<String, DelegateError>;

    fn password_required(&self) -> Result<bool, DelegateError>;

    fn account_disabled(&self) -> Result<bool, DelegateError>;

    fn is_account_locked(&self) -> Result<bool, DelegateError>;

    fn require_unique_password(&self) -> Result<bool, DelegateError>;

    fn password_minimum_length(&self) -> Result<i64, DelegateError>;

    fn last_login(&self) -> Result<Self::LargeInteger, DelegateError>;

    fn password_expiration_date(&self) -> Result<i64, DelegateError>;
}

/// Query layer that binds paths to live directory objects
pub trait DirectoryProvider {
    type Object: ObjectInterface + Send;
    type User: UserInterface + Send;

    /// Bind an arbitrary object by ADs path (`LDAP://...`, `WinNT://...`)
    fn open_object(&self, path: &str) -> Result<Self::Object, DelegateError>;

    /// Bind a user object by ADs path
    fn open_user(&self, path: &str) -> Result<Self::User, DelegateError>;
}
