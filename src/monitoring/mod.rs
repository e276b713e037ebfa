/*!
 * Monitoring
 * Tracing subscriber setup and bind spans
 */

mod tracer;

pub use tracer::{init_tracing, init_tracing_with, BindSpan};
