//! wn-core: shared foundation for waternet.
//!
//! Contains:
//! - numeric (Real + unguarded averaging helpers)
//! - measure (numeric feature attributes: absent, null, or a value)
//! - status (normalized operational status of an asset)
//! - error (shared error types)

pub mod error;
pub mod measure;
pub mod numeric;
pub mod status;

pub use error::{CoreError, CoreResult};
pub use measure::Measure;
pub use numeric::*;
pub use status::Status;
