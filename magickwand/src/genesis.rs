//! Lifetime of the native environment

use std::ffi::c_void;
use std::sync::OnceLock;

use magickwand_sys as ffi;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::util::{borrow_magick_string, c_string, from_magick_bool, take_magick_string};

static GENESIS: OnceLock<()> = OnceLock::new();

/// Creates the native environment once per process
///
/// Called by every constructor, calling it directly is only needed to apply
/// the [`Config`] limits before the first wand exists.
pub fn genesis() {
    GENESIS.get_or_init(|| {
        unsafe { ffi::MagickWandGenesis() };
        tracing::debug!("Initialized MagickWand environment");

        if let Err(err) = Config::cached().apply_limits() {
            tracing::warn!("Failed to apply configured resource limits: {err}");
        }
    });
}

pub fn is_instantiated() -> bool {
    from_magick_bool(unsafe { ffi::IsMagickWandInstantiated() })
}

/// Destroys the native environment
///
/// # Safety
///
/// No wand of any kind may exist anymore and none may be created afterwards.
pub unsafe fn terminus() {
    ffi::MagickWandTerminus();
    tracing::debug!("Terminated MagickWand environment");
}

/// Release string and numeric version of the native library
pub fn version() -> (String, usize) {
    genesis();

    let mut number = 0;
    let name = unsafe { borrow_magick_string(ffi::MagickGetVersion(&mut number)) };
    (name.unwrap_or_default(), number)
}

/// Image formats supported by the native library that match `pattern`
///
/// The pattern uses the native glob syntax, `*` lists all formats.
pub fn query_formats(pattern: &str) -> Result<Vec<String>> {
    genesis();

    let pattern = c_string(pattern).err_operation("MagickQueryFormats")?;
    let mut n_formats = 0;
    let formats = unsafe { ffi::MagickQueryFormats(pattern.as_ptr(), &mut n_formats) };

    if formats.is_null() {
        return Ok(Vec::new());
    }

    let list = unsafe { std::slice::from_raw_parts(formats, n_formats) }
        .iter()
        .filter_map(|format| unsafe { take_magick_string(*format) })
        .collect();

    unsafe { ffi::MagickRelinquishMemory(formats.cast::<c_void>()) };

    Ok(list)
}
