use std::ptr::NonNull;

use magickwand_sys as ffi;
pub use magickwand_sys::{PixelPacket, Quantum};

use crate::error::{ErrorKind, Result, ResultExt};
use crate::genesis::genesis;
use crate::util::{c_string, exception_result, from_magick_bool, take_magick_string};

/// Owned native color value
///
/// Used as input for fill, border and threshold colors and as output when
/// sampling pixels. Channel accessors use normalized values from `0.0` to
/// `1.0`.
pub struct PixelWand {
    pixel: NonNull<ffi::PixelWand>,
}

// The native wand has no thread affinity but must not be used concurrently
unsafe impl Send for PixelWand {}

static_assertions::assert_impl_all!(PixelWand: Send);
static_assertions::assert_not_impl_any!(PixelWand: Sync, Clone);

impl PixelWand {
    pub fn new() -> Result<Self> {
        genesis();

        let pixel = unsafe { ffi::NewPixelWand() };
        NonNull::new(pixel)
            .map(|pixel| Self { pixel })
            .ok_or(ErrorKind::NullHandle)
            .err_operation("NewPixelWand")
    }

    /// Creates a pixel wand from a color description like `"red"`,
    /// `"#ff000080"` or `"rgb(255,0,0)"`
    pub fn from_color(color: &str) -> Result<Self> {
        let mut pixel = Self::new()?;
        pixel.set_color(color)?;
        Ok(pixel)
    }

    pub fn try_clone(&self) -> Result<Self> {
        let pixel = unsafe { ffi::ClonePixelWand(self.as_ptr()) };
        NonNull::new(pixel)
            .map(|pixel| Self { pixel })
            .ok_or(ErrorKind::NullHandle)
            .err_operation("ClonePixelWand")
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::PixelWand {
        self.pixel.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut ffi::PixelWand {
        self.pixel.as_ptr()
    }

    fn check(&mut self, operation: &'static str) -> Result<()> {
        let mut severity = ffi::UndefinedException;

        let result = unsafe {
            let description = ffi::PixelGetException(self.as_ptr(), &mut severity);
            exception_result(severity, description)
        };

        if result.is_err() {
            unsafe { ffi::PixelClearException(self.as_mut_ptr()) };
        }

        result.err_operation(operation)
    }

    pub fn set_color(&mut self, color: &str) -> Result<()> {
        let color = c_string(color).err_operation("PixelSetColor")?;
        let status = unsafe { ffi::PixelSetColor(self.as_mut_ptr(), color.as_ptr()) };
        self.check("PixelSetColor")?;

        if from_magick_bool(status) {
            Ok(())
        } else {
            Err(ErrorKind::OperationFailed).err_operation("PixelSetColor")
        }
    }

    /// Color as native description, for example `"srgb(255,0,0)"`
    pub fn color_as_string(&self) -> String {
        unsafe { take_magick_string(ffi::PixelGetColorAsString(self.as_ptr())) }
            .unwrap_or_default()
    }

    pub fn red(&self) -> f64 {
        unsafe { ffi::PixelGetRed(self.as_ptr()) }
    }

    pub fn green(&self) -> f64 {
        unsafe { ffi::PixelGetGreen(self.as_ptr()) }
    }

    pub fn blue(&self) -> f64 {
        unsafe { ffi::PixelGetBlue(self.as_ptr()) }
    }

    pub fn alpha(&self) -> f64 {
        unsafe { ffi::PixelGetAlpha(self.as_ptr()) }
    }

    /// Inverse of [`alpha`](Self::alpha)
    pub fn opacity(&self) -> f64 {
        unsafe { ffi::PixelGetOpacity(self.as_ptr()) }
    }

    pub fn set_red(&mut self, red: f64) {
        unsafe { ffi::PixelSetRed(self.as_mut_ptr(), red) }
    }

    pub fn set_green(&mut self, green: f64) {
        unsafe { ffi::PixelSetGreen(self.as_mut_ptr(), green) }
    }

    pub fn set_blue(&mut self, blue: f64) {
        unsafe { ffi::PixelSetBlue(self.as_mut_ptr(), blue) }
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        unsafe { ffi::PixelSetAlpha(self.as_mut_ptr(), alpha) }
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        unsafe { ffi::PixelSetOpacity(self.as_mut_ptr(), opacity) }
    }

    /// Color in the native quantum representation
    pub fn quantum_color(&self) -> PixelPacket {
        let mut packet = PixelPacket::default();
        unsafe { ffi::PixelGetQuantumColor(self.as_ptr(), &mut packet) };
        packet
    }

    pub fn set_quantum_color(&mut self, packet: &PixelPacket) {
        unsafe { ffi::PixelSetQuantumColor(self.as_mut_ptr(), packet) }
    }
}

impl std::fmt::Debug for PixelWand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PixelWand")
            .field(&self.color_as_string())
            .finish()
    }
}

impl Drop for PixelWand {
    fn drop(&mut self) {
        unsafe { ffi::DestroyPixelWand(self.pixel.as_ptr()) };
    }
}
