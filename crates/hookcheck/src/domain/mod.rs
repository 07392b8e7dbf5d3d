//! Domain Layer
//!
//! Event types, request bodies and errors. No I/O lives here.

pub mod errors;
pub mod event_type;
pub mod payloads;

pub use errors::*;
pub use event_type::*;
pub use payloads::*;
