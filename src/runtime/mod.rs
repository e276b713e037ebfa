/*!
 * COM Runtime Bridge
 *
 * Process-wide, reference-counted initialization of the component object
 * runtime that every open directory handle depends on.
 *
 * ## Lifecycle
 *
 * - The first [`ComRuntime::acquire`] initializes the bridge
 * - Every handle holds one [`RuntimeLease`] for as long as it is open
 * - Dropping the last lease tears the bridge down
 *
 * A lease is not `Clone`, so each acquisition is released exactly once.
 */

mod bridge;
mod registry;

pub use bridge::{ApartmentModel, NoopBridge, RuntimeBridge};
pub use registry::{ComRuntime, RuntimeLease};
