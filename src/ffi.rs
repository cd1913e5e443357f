//! FFI interface for C/C++ callers
//!
//! Every function hands back JSON. Both pointers in the returned struct are
//! owned by Rust and must be released with `free_livescore_result`.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use serde::Serialize;

use crate::config::CrawlerConfig;
use crate::crawler::LivescoreCrawler;
use crate::extractors::{parse_football, parse_livescore, parse_volleyball};

#[repr(C)]
pub struct LivescoreResultFFI {
    /// JSON-serialized result (null-terminated), or null on failure
    pub json_ptr: *mut c_char,
    /// Error message (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract football and volleyball results from an HTML buffer.
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - Caller must free the result via `free_livescore_result`
#[no_mangle]
pub unsafe extern "C" fn extract_livescore_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> LivescoreResultFFI {
    match html_from_raw(html_ptr, html_len) {
        Ok(html) => to_ffi_result(parse_livescore(&html)),
        Err(msg) => make_error_result(msg),
    }
}

/// Football stages only
///
/// # Safety
/// Same as `extract_livescore_ffi`
#[no_mangle]
pub unsafe extern "C" fn extract_football_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> LivescoreResultFFI {
    match html_from_raw(html_ptr, html_len) {
        Ok(html) => to_ffi_result(parse_football(&html)),
        Err(msg) => make_error_result(msg),
    }
}

/// Volleyball stages only
///
/// # Safety
/// Same as `extract_livescore_ffi`
#[no_mangle]
pub unsafe extern "C" fn extract_volleyball_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> LivescoreResultFFI {
    match html_from_raw(html_ptr, html_len) {
        Ok(html) => to_ffi_result(parse_volleyball(&html)),
        Err(msg) => make_error_result(msg),
    }
}

/// Fetch `url` over HTTP (or the default livescore page when `url` is null)
/// and extract both sports.
///
/// # Safety
/// - `url` must be null or a valid null-terminated C string
/// - Caller must free the result via `free_livescore_result`
#[no_mangle]
pub unsafe extern "C" fn fetch_livescore_ffi(url: *const c_char) -> LivescoreResultFFI {
    let config = if url.is_null() {
        CrawlerConfig::default()
    } else {
        match CStr::from_ptr(url).to_str() {
            Ok(s) => CrawlerConfig::new(s),
            Err(_) => return make_error_result("Invalid UTF-8 in url"),
        }
    };

    let result = LivescoreCrawler::new(config).and_then(|mut crawler| crawler.livescore());
    to_ffi_result(result)
}

/// Free a result returned by any function in this module
///
/// # Safety
/// - `result` must have been returned by this module
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_livescore_result(result: LivescoreResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn html_from_raw(html_ptr: *const c_char, html_len: usize) -> Result<String, &'static str> {
    if html_ptr.is_null() || html_len == 0 {
        return Ok(String::new());
    }

    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    std::str::from_utf8(slice)
        .map(str::to_string)
        .map_err(|_| "Invalid UTF-8 in HTML content")
}

fn to_ffi_result<T: Serialize>(result: crate::error::Result<T>) -> LivescoreResultFFI {
    let value = match result {
        Ok(value) => value,
        Err(e) => return make_error_result(&e.to_string()),
    };

    match serde_json::to_string(&value) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => LivescoreResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize result: {}", e)),
    }
}

fn make_error_result(msg: &str) -> LivescoreResultFFI {
    let error_cstr = CString::new(msg.replace('\0', " ")).unwrap_or_default();
    LivescoreResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
