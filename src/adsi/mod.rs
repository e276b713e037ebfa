/*!
 * Active Directory Service Interfaces
 *
 * Guarded, thread-safe wrappers around directory objects and users.
 *
 * ## Handle Types
 *
 * - **Object**: any directory object (name, class, path, generic `get`)
 * - **User**: user attributes plus everything `Object` exposes
 * - **Client**: opens both through an injected [`DirectoryProvider`]
 *
 * Handles are created from interfaces that are already bound; binding is the
 * provider's job. Each open handle holds one reference on the COM runtime.
 */

mod client;
pub mod filetime;
mod large_integer;
mod object;
mod traits;
mod user;
mod variant;

pub use client::Client;
pub use large_integer::LargeInteger;
pub use object::Object;
pub use traits::{DirectoryProvider, LargeIntegerValue, ObjectInterface, UserInterface};
pub use user::User;
pub use variant::Variant;
