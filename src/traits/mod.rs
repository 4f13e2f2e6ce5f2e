//! Capability traits.
//!
//! - [`Buildable`]: anything whose client-facing info can be built
//! - [`ResultExt`]: decorating the error side of a `Result`

pub mod buildable;
pub mod result_ext;

pub use buildable::Buildable;
pub use result_ext::ResultExt;
