use std::marker::PhantomData;
use std::ptr::NonNull;

use magickwand_sys as ffi;

use crate::error::{Result, ResultExt};
use crate::wand::MagickWand;

/// Image inside a [`MagickWand`]
///
/// The wand stays the owner, so this view can't outlive the borrow of the
/// wand it was taken from.
#[derive(Clone, Copy)]
pub struct Image<'a> {
    image: NonNull<ffi::Image>,
    _wand: PhantomData<&'a MagickWand>,
}

impl<'a> Image<'a> {
    pub(crate) fn from_wand(_wand: &'a MagickWand, image: *mut ffi::Image) -> Option<Self> {
        NonNull::new(image).map(|image| Self {
            image,
            _wand: PhantomData,
        })
    }

    fn as_ptr(&self) -> *const ffi::Image {
        self.image.as_ptr()
    }

    /// Number of images in the list this image belongs to
    pub fn list_length(&self) -> usize {
        unsafe { ffi::GetImageListLength(self.as_ptr()) }
    }

    /// Position in the image list, starting at `0`
    pub fn index_in_list(&self) -> isize {
        unsafe { ffi::GetImageIndexInList(self.as_ptr()) }
    }

    /// Copies this image into a new wand
    pub fn to_wand(&self) -> Result<MagickWand> {
        let wand = unsafe { ffi::NewMagickWandFromImage(self.as_ptr()) };
        MagickWand::from_raw(wand).err_operation("NewMagickWandFromImage")
    }
}

impl std::fmt::Debug for Image<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("index_in_list", &self.index_in_list())
            .field("list_length", &self.list_length())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(Image<'static>: Send, Sync);
