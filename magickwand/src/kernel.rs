use std::ptr::NonNull;

use magickwand_sys as ffi;

use crate::error::{ErrorKind, Result, ResultExt};
use crate::genesis::genesis;
use crate::util::c_string;

/// Owned native convolution kernel
pub struct KernelInfo {
    info: NonNull<ffi::KernelInfo>,
}

unsafe impl Send for KernelInfo {}

static_assertions::assert_impl_all!(KernelInfo: Send);
static_assertions::assert_not_impl_any!(KernelInfo: Sync);

impl KernelInfo {
    /// Parses a kernel definition
    ///
    /// Accepts built-in kernels like `"Gaussian:0x2"` and explicit matrices
    /// like `"3x3: 0,1,0 1,1,1 0,1,0"`. A color matrix for
    /// [`MagickWand::color_matrix_image`](crate::MagickWand::color_matrix_image)
    /// is a 5x5 or 6x6 matrix.
    pub fn new(definition: &str) -> Result<Self> {
        genesis();

        let definition = c_string(definition).err_operation("AcquireKernelInfo")?;
        let info = unsafe { ffi::AcquireKernelInfo(definition.as_ptr()) };

        NonNull::new(info)
            .map(|info| Self { info })
            .ok_or(ErrorKind::NullHandle)
            .err_operation("AcquireKernelInfo")
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::KernelInfo {
        self.info.as_ptr()
    }
}

impl std::fmt::Debug for KernelInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelInfo").finish_non_exhaustive()
    }
}

impl Drop for KernelInfo {
    fn drop(&mut self) {
        unsafe { ffi::DestroyKernelInfo(self.info.as_ptr()) };
    }
}
