use std::ffi::{c_char, c_void, CStr, CString};

use magickwand_sys as ffi;

use crate::error::{ErrorKind, Exception, Result, ResultExt, ResultKind};
use crate::types::ExceptionType;

pub const fn magick_bool(value: bool) -> ffi::MagickBooleanType {
    if value {
        ffi::MagickTrue
    } else {
        ffi::MagickFalse
    }
}

pub const fn from_magick_bool(value: ffi::MagickBooleanType) -> bool {
    value != ffi::MagickFalse
}

pub fn c_string(s: &str) -> ResultKind<CString> {
    Ok(CString::new(s)?)
}

pub fn c_path(path: &std::path::Path) -> ResultKind<CString> {
    use std::os::unix::ffi::OsStrExt;
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

/// Copies a string allocated by the native library and releases it
///
/// # Safety
///
/// `ptr` must be NULL or a NUL-terminated buffer that the caller owns and that
/// was allocated by the native library.
pub unsafe fn take_magick_string(ptr: *mut c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }

    let s = CStr::from_ptr(ptr).to_string_lossy().into_owned();
    ffi::MagickRelinquishMemory(ptr.cast::<c_void>());
    Some(s)
}

/// Copies a string owned by the native library without releasing it
///
/// # Safety
///
/// `ptr` must be NULL or a NUL-terminated buffer valid for the call.
pub unsafe fn borrow_magick_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Turns the `(severity, description)` pair of a native exception query
/// into a result
///
/// # Safety
///
/// Same as [`take_magick_string`] for `description`.
pub unsafe fn exception_result(
    severity: ffi::ExceptionType,
    description: *mut c_char,
) -> ResultKind<()> {
    let message = take_magick_string(description).unwrap_or_default();
    let exception_type = ExceptionType::from_native(severity);

    if exception_type.is_undefined() {
        Ok(())
    } else {
        tracing::trace!("Native exception {exception_type}: {message}");
        Err(ErrorKind::Native(Exception::new(exception_type, message)))
    }
}

/// Outcome of a native call that returns a new handle
///
/// A handle is kept even if the call also recorded an exception, which is
/// only logged then. Without a handle the recorded exception is the error.
pub fn produced_result<T>(
    handle: ResultKind<T>,
    exception: Result<()>,
    operation: &'static str,
) -> Result<T> {
    match (handle, exception) {
        (Ok(handle), Ok(())) => Ok(handle),
        (Ok(handle), Err(err)) => {
            tracing::warn!("{err}");
            Ok(handle)
        }
        (Err(_), Err(err)) => Err(err),
        (Err(kind), Ok(())) => Err(kind).err_operation(operation),
    }
}
