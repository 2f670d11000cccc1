#![allow(clippy::missing_safety_doc)]
//! xguid FFI - C-compatible bindings
//!
//! A stable ABI over the core guid type for non-Rust callers, plus the
//! managed-runtime (JVM) generation backend on Android targets. The core
//! sentinel policy crosses the boundary unchanged: a malformed string
//! still parses "successfully" into the all-zero value, and only pointer
//! or buffer problems surface as FFI error codes.

pub mod error;
pub mod guid;
#[cfg(target_os = "android")]
pub mod jvm;

use std::ffi::c_char;

pub use error::*;
pub use guid::*;

/// Library version
#[no_mangle]
pub extern "C" fn xg_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr() as *const c_char
}
