//! xguid - Portable 128-bit GUID/UUID value type
//!
//! This crate provides the core pieces of the GUID subsystem:
//! - The `Guid` value type (16 raw bytes, value semantics)
//! - Canonical hyphenated-hex parsing and formatting
//! - Generation of fresh identifiers from the platform random source
//!
//! No version/variant bit structure is enforced; a `Guid` is an opaque
//! 16-byte buffer. The all-zero value is the "empty" sentinel, which also
//! doubles as the result of any malformed construction (see `Guid::ZERO`).

pub mod generate;
pub mod guid;

pub use generate::*;
pub use guid::*;
