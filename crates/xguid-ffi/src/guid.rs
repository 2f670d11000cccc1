//! FFI guid functions

use std::ffi::{c_char, c_int, CStr};
use std::ptr;

use xguid::{new_guid, Guid};

use crate::error::*;

/// Canonical text form length: 36 characters plus NUL
pub const XG_GUID_STR_LEN: usize = 37;

/// Plain 16-byte guid value, layout-compatible with the core type
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XgGuid {
    pub bytes: [u8; 16],
}

impl From<Guid> for XgGuid {
    fn from(guid: Guid) -> Self {
        XgGuid {
            bytes: guid.into_bytes(),
        }
    }
}

impl From<XgGuid> for Guid {
    fn from(guid: XgGuid) -> Self {
        Guid::new(guid.bytes)
    }
}

/// Generate a fresh guid from the OS entropy backend
#[no_mangle]
pub unsafe extern "C" fn xg_guid_new(out: *mut XgGuid) -> c_int {
    if out.is_null() {
        set_last_error("Null output pointer");
        return XgErrorCode::InvalidArgument as c_int;
    }

    *out = XgGuid::from(new_guid());
    XgErrorCode::Ok as c_int
}

/// Parse a guid from a NUL-terminated string
///
/// Malformed guid text is not an FFI error: the all-zero value is written
/// and Ok is returned, matching the core sentinel policy. Only a null
/// pointer or non-UTF-8 text fails.
#[no_mangle]
pub unsafe extern "C" fn xg_guid_parse(text: *const c_char, out: *mut XgGuid) -> c_int {
    if text.is_null() || out.is_null() {
        set_last_error("Null pointer");
        return XgErrorCode::InvalidArgument as c_int;
    }

    let text = match CStr::from_ptr(text).to_str() {
        Ok(s) => s,
        Err(_) => {
            set_last_error("Guid text is not valid UTF-8");
            return XgErrorCode::InvalidArgument as c_int;
        }
    };

    *out = XgGuid::from(Guid::parse(text));
    XgErrorCode::Ok as c_int
}

/// Format a guid into the canonical 36-character form
///
/// Writes the text plus a trailing NUL; `buf_len` must be at least
/// XG_GUID_STR_LEN. Returns the number of characters written (36),
/// or a negative error code.
#[no_mangle]
pub unsafe extern "C" fn xg_guid_format(
    guid: *const XgGuid,
    buf: *mut c_char,
    buf_len: usize,
) -> c_int {
    if guid.is_null() || buf.is_null() {
        set_last_error("Null pointer");
        return XgErrorCode::InvalidArgument as c_int;
    }
    if buf_len < XG_GUID_STR_LEN {
        set_last_error("Buffer too small");
        return XgErrorCode::BufferTooSmall as c_int;
    }

    let text = Guid::from(*guid).to_string();
    debug_assert_eq!(text.len(), XG_GUID_STR_LEN - 1);
    ptr::copy_nonoverlapping(text.as_ptr(), buf as *mut u8, text.len());
    *buf.add(text.len()) = 0;
    text.len() as c_int
}

/// Check a guid against the all-zero sentinel
/// Returns 1 if valid, 0 if not
#[no_mangle]
pub unsafe extern "C" fn xg_guid_is_valid(guid: *const XgGuid) -> c_int {
    if guid.is_null() {
        return 0;
    }
    Guid::from(*guid).is_valid() as c_int
}
