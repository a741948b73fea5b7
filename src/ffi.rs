//! C FFI layer for embedding the renderer in non-Rust site generators.

use crate::config::RenderConfig;
use crate::render_json;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::ptr;

/// Result type for FFI operations.
#[repr(C)]
pub struct FolioResult {
    /// Pointer to result string (caller must free with folio_free_string)
    pub data: *mut c_char,
    /// Error message if data is null (caller must free with folio_free_string)
    pub error: *mut c_char,
}

impl FolioResult {
    fn ok(data: String) -> Self {
        Self {
            data: into_c_string(data),
            error: ptr::null_mut(),
        }
    }

    fn err(error: String) -> Self {
        Self {
            data: ptr::null_mut(),
            error: into_c_string(error),
        }
    }
}

fn into_c_string(s: String) -> *mut c_char {
    let s = CString::new(s).unwrap_or_else(|e| {
        let mut bytes = e.into_vec();
        bytes.retain(|b| *b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    s.into_raw()
}

unsafe fn read_str<'a>(s: *const c_char, what: &str) -> Result<Option<&'a str>, String> {
    if s.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(s)
        .to_str()
        .map(Some)
        .map_err(|_| format!("Invalid UTF-8 {}", what))
}

/// Render a profile document and return the rendered page as JSON.
///
/// The JSON object has `title`, `description`, `regions` (an array of
/// `[id, markup]` pairs) and `diagnostics`.
///
/// # Safety
///
/// - `input` must be a valid null-terminated UTF-8 string.
/// - `config_toml` must be null or a valid null-terminated UTF-8 string.
/// - The returned strings must be freed with `folio_free_result`.
#[no_mangle]
pub unsafe extern "C" fn folio_render_json(
    input: *const c_char,
    config_toml: *const c_char,
) -> FolioResult {
    let input = match read_str(input, "input") {
        Ok(Some(s)) => s,
        Ok(None) => return FolioResult::err("Null input pointer".to_string()),
        Err(e) => return FolioResult::err(e),
    };

    let config = match read_str(config_toml, "config") {
        Ok(Some(toml)) => match RenderConfig::from_toml_str(toml) {
            Ok(c) => c,
            Err(e) => return FolioResult::err(format!("Config error: {}", e)),
        },
        Ok(None) => RenderConfig::default(),
        Err(e) => return FolioResult::err(e),
    };

    let rendered = match render_json(input, Some(&config)) {
        Ok(r) => r,
        Err(e) => return FolioResult::err(e.to_string()),
    };

    match serde_json::to_string(&rendered) {
        Ok(json) => FolioResult::ok(json),
        Err(e) => FolioResult::err(format!("JSON error: {}", e)),
    }
}

/// Free a string returned by folio functions.
///
/// # Safety
///
/// - `s` must be a pointer returned by a folio function, or null.
#[no_mangle]
pub unsafe extern "C" fn folio_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Free a result struct.
///
/// # Safety
///
/// - `result` must be a valid FolioResult.
#[no_mangle]
pub unsafe extern "C" fn folio_free_result(result: FolioResult) {
    folio_free_string(result.data);
    folio_free_string(result.error);
}

/// Get the library version.
///
/// # Safety
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn folio_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
