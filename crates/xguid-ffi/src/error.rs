//! FFI error handling

use std::ffi::{c_char, c_int, CString};

/// Error codes for FFI functions
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XgErrorCode {
    /// Success
    Ok = 0,
    /// Null pointer or invalid argument
    InvalidArgument = -1,
    /// Output buffer too small
    BufferTooSmall = -2,
    /// Managed runtime not bound
    NotBound = -3,
    /// Internal error
    InternalError = -99,
}

impl From<XgErrorCode> for c_int {
    fn from(code: XgErrorCode) -> Self {
        code as c_int
    }
}

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> =
        const { std::cell::RefCell::new(None) };
}

/// Set the last error message
pub fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Get the last error message
/// Returns NULL if no error
#[no_mangle]
pub extern "C" fn xg_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(s) => s.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clear the last error
#[no_mangle]
pub extern "C" fn xg_clear_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}
