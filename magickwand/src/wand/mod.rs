mod image;

use std::ffi::c_void;
use std::path::Path;
use std::ptr::NonNull;

use magickwand_sys as ffi;

use crate::error::{ErrorKind, Result, ResultExt};
use crate::genesis::genesis;
use crate::pixel::PixelWand;
use crate::types::RenderingIntent;
use crate::util::{
    c_path, c_string, exception_result, from_magick_bool, produced_result, take_magick_string,
};

/// Owned native image sequence with an iterator pointing at the current image
///
/// Image operations act on the current image. Mutating operations take
/// `&mut self` and report the exception the native library recorded during
/// the call.
///
/// The wand can be moved to another thread but is not `Sync`: the native
/// library does not support concurrent calls on the same wand.
pub struct MagickWand {
    wand: NonNull<ffi::MagickWand>,
}

unsafe impl Send for MagickWand {}

static_assertions::assert_impl_all!(MagickWand: Send);
static_assertions::assert_not_impl_any!(MagickWand: Sync, Clone);

impl MagickWand {
    pub fn new() -> Result<Self> {
        genesis();

        let wand = unsafe { ffi::NewMagickWand() };
        Self::from_raw(wand).err_operation("NewMagickWand")
    }

    /// Takes ownership of a wand returned by the native library
    pub(crate) fn from_raw(wand: *mut ffi::MagickWand) -> std::result::Result<Self, ErrorKind> {
        NonNull::new(wand)
            .map(|wand| Self { wand })
            .ok_or(ErrorKind::NullHandle)
    }

    /// Wraps the result of an operation that creates a new wand
    ///
    /// A NULL result is reported with the exception recorded on `self` if
    /// there is one.
    fn produced(&self, wand: *mut ffi::MagickWand, operation: &'static str) -> Result<Self> {
        let exception = self.check(operation);
        produced_result(Self::from_raw(wand), exception, operation)
    }

    /// Deep copy including all images
    pub fn try_clone(&self) -> Result<Self> {
        let wand = unsafe { ffi::CloneMagickWand(self.as_ptr()) };
        Self::from_raw(wand).err_operation("CloneMagickWand")
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::MagickWand {
        self.wand.as_ptr()
    }

    /// Pointer for native calls that record exceptions on the wand
    ///
    /// The exception state is not observable from Rust, so this is also used
    /// from `&self` methods.
    pub(crate) fn as_mut_ptr(&self) -> *mut ffi::MagickWand {
        self.wand.as_ptr()
    }

    /// Reports and clears the exception recorded by the last native call
    pub(crate) fn check(&self, operation: &'static str) -> Result<()> {
        let mut severity = ffi::UndefinedException;

        let result = unsafe {
            let description = ffi::MagickGetException(self.as_ptr(), &mut severity);
            exception_result(severity, description)
        };

        if result.is_err() {
            self.clear_exception();
        }

        result.err_operation(operation)
    }

    /// Drops the exception of a call whose failure is reported otherwise
    fn clear_exception(&self) {
        unsafe { ffi::MagickClearException(self.as_mut_ptr()) };
    }

    /// Like [`check`](Self::check), but also fails if the native call
    /// returned `MagickFalse` without recording an exception
    fn check_status(&self, status: ffi::MagickBooleanType, operation: &'static str) -> Result<()> {
        self.check(operation)?;

        if from_magick_bool(status) {
            Ok(())
        } else {
            Err(ErrorKind::OperationFailed).err_operation(operation)
        }
    }

    /// Removes all images and settings
    pub fn clear(&mut self) {
        unsafe { ffi::ClearMagickWand(self.as_mut_ptr()) }
    }

    pub fn read_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = c_path(path.as_ref()).err_operation("MagickReadImage")?;
        let status = unsafe { ffi::MagickReadImage(self.as_mut_ptr(), path.as_ptr()) };
        self.check_status(status, "MagickReadImage")
    }

    pub fn read_image_blob(&mut self, blob: &[u8]) -> Result<()> {
        let status = unsafe {
            ffi::MagickReadImageBlob(self.as_mut_ptr(), blob.as_ptr().cast::<c_void>(), blob.len())
        };
        self.check_status(status, "MagickReadImageBlob")
    }

    /// Writes the current image, the format is guessed from the file extension
    pub fn write_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = c_path(path.as_ref()).err_operation("MagickWriteImage")?;
        let status = unsafe { ffi::MagickWriteImage(self.as_mut_ptr(), path.as_ptr()) };
        self.check_status(status, "MagickWriteImage")
    }

    /// Encodes the current image in the format set with
    /// [`set_image_format`](Self::set_image_format)
    pub fn image_blob(&mut self) -> Result<Vec<u8>> {
        let mut length = 0;
        let blob = unsafe { ffi::MagickGetImageBlob(self.as_mut_ptr(), &mut length) };
        self.check("MagickGetImageBlob")?;

        if blob.is_null() {
            return Err(ErrorKind::NullHandle).err_operation("MagickGetImageBlob");
        }

        let data = unsafe { std::slice::from_raw_parts(blob, length) }.to_vec();
        unsafe { ffi::MagickRelinquishMemory(blob.cast::<c_void>()) };

        Ok(data)
    }

    pub fn set_image_format(&mut self, format: &str) -> Result<()> {
        let format = c_string(format).err_operation("MagickSetImageFormat")?;
        let status = unsafe { ffi::MagickSetImageFormat(self.as_mut_ptr(), format.as_ptr()) };
        self.check_status(status, "MagickSetImageFormat")
    }

    pub fn image_format(&self) -> Result<String> {
        let format = unsafe { take_magick_string(ffi::MagickGetImageFormat(self.as_mut_ptr())) };
        self.check("MagickGetImageFormat")?;
        Ok(format.unwrap_or_default())
    }

    /// Adds a blank image filled with `background` after the current image
    pub fn new_image(&mut self, columns: usize, rows: usize, background: &PixelWand) -> Result<()> {
        let status =
            unsafe { ffi::MagickNewImage(self.as_mut_ptr(), columns, rows, background.as_ptr()) };
        self.check_status(status, "MagickNewImage")
    }

    pub fn number_images(&self) -> usize {
        unsafe { ffi::MagickGetNumberImages(self.as_ptr()) }
    }

    pub fn image_width(&self) -> Result<usize> {
        let width = unsafe { ffi::MagickGetImageWidth(self.as_mut_ptr()) };
        self.check("MagickGetImageWidth")?;
        Ok(width)
    }

    pub fn image_height(&self) -> Result<usize> {
        let height = unsafe { ffi::MagickGetImageHeight(self.as_mut_ptr()) };
        self.check("MagickGetImageHeight")?;
        Ok(height)
    }

    /// Color of the pixel at `x`, `y` in the current image
    pub fn image_pixel_color(&self, x: isize, y: isize) -> Result<PixelWand> {
        let mut color = PixelWand::new()?;
        let status = unsafe {
            ffi::MagickGetImagePixelColor(self.as_mut_ptr(), x, y, color.as_mut_ptr())
        };
        self.check_status(status, "MagickGetImagePixelColor")?;
        Ok(color)
    }

    pub fn set_image_rendering_intent(&mut self, intent: RenderingIntent) -> Result<()> {
        let status = unsafe { ffi::MagickSetImageRenderingIntent(self.as_mut_ptr(), intent.into_native()) };
        self.check_status(status, "MagickSetImageRenderingIntent")
    }

    pub fn image_rendering_intent(&self) -> Result<RenderingIntent> {
        let intent = unsafe { ffi::MagickGetImageRenderingIntent(self.as_mut_ptr()) };
        self.check("MagickGetImageRenderingIntent")?;
        RenderingIntent::try_from(intent)
            .map_err(ErrorKind::from)
            .err_operation("MagickGetImageRenderingIntent")
    }

    /// Points the iterator before the first image so that adding images
    /// inserts at the front and [`next_image`](Self::next_image) yields the
    /// first image
    pub fn reset_iterator(&mut self) {
        unsafe { ffi::MagickResetIterator(self.as_mut_ptr()) }
    }

    pub fn set_first_iterator(&mut self) {
        unsafe { ffi::MagickSetFirstIterator(self.as_mut_ptr()) }
    }

    pub fn set_last_iterator(&mut self) {
        unsafe { ffi::MagickSetLastIterator(self.as_mut_ptr()) }
    }

    /// Moves to the next image, returns `false` at the end of the sequence
    /// or if the wand holds no images
    pub fn next_image(&mut self) -> bool {
        let moved = from_magick_bool(unsafe { ffi::MagickNextImage(self.as_mut_ptr()) });
        self.clear_exception();
        moved
    }

    /// Moves to the previous image, returns `false` at the start of the
    /// sequence or if the wand holds no images
    pub fn previous_image(&mut self) -> bool {
        let moved = from_magick_bool(unsafe { ffi::MagickPreviousImage(self.as_mut_ptr()) });
        self.clear_exception();
        moved
    }

    pub fn set_iterator_index(&mut self, index: isize) -> Result<()> {
        let status = unsafe { ffi::MagickSetIteratorIndex(self.as_mut_ptr(), index) };
        self.check_status(status, "MagickSetIteratorIndex")
    }

    /// Position of the current image, fails if the wand holds no images
    pub fn iterator_index(&self) -> Result<isize> {
        let index = unsafe { ffi::MagickGetIteratorIndex(self.as_mut_ptr()) };
        self.check("MagickGetIteratorIndex")?;
        Ok(index)
    }
}

impl std::fmt::Debug for MagickWand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagickWand")
            .field("number_images", &self.number_images())
            .finish()
    }
}

impl Drop for MagickWand {
    fn drop(&mut self) {
        tracing::trace!("Destroying MagickWand");
        unsafe { ffi::DestroyMagickWand(self.wand.as_ptr()) };
    }
}
