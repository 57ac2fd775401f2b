use std::ptr::NonNull;

use magickwand_sys as ffi;

use crate::error::{ErrorKind, Result, ResultExt};
use crate::genesis::genesis;
use crate::pixel::PixelWand;
use crate::util::{c_string, exception_result, magick_bool};

/// Owned native drawing context
///
/// Holds the text and affine settings used by
/// [`MagickWand::annotate_image`](crate::MagickWand::annotate_image) and
/// [`MagickWand::affine_transform_image`](crate::MagickWand::affine_transform_image).
pub struct DrawingWand {
    draw: NonNull<ffi::DrawingWand>,
}

unsafe impl Send for DrawingWand {}

static_assertions::assert_impl_all!(DrawingWand: Send);
static_assertions::assert_not_impl_any!(DrawingWand: Sync);

impl DrawingWand {
    pub fn new() -> Result<Self> {
        genesis();

        let draw = unsafe { ffi::NewDrawingWand() };
        NonNull::new(draw)
            .map(|draw| Self { draw })
            .ok_or(ErrorKind::NullHandle)
            .err_operation("NewDrawingWand")
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::DrawingWand {
        self.draw.as_ptr()
    }

    fn as_mut_ptr(&mut self) -> *mut ffi::DrawingWand {
        self.draw.as_ptr()
    }

    fn check(&mut self, operation: &'static str) -> Result<()> {
        let mut severity = ffi::UndefinedException;

        let result = unsafe {
            let description = ffi::DrawGetException(self.as_ptr(), &mut severity);
            exception_result(severity, description)
        };

        if result.is_err() {
            unsafe { ffi::DrawClearException(self.as_mut_ptr()) };
        }

        result.err_operation(operation)
    }

    /// Font family or path of a font file used for text
    pub fn set_font(&mut self, font: &str) -> Result<()> {
        let font = c_string(font).err_operation("DrawSetFont")?;
        unsafe { ffi::DrawSetFont(self.as_mut_ptr(), font.as_ptr()) };
        self.check("DrawSetFont")
    }

    pub fn set_font_size(&mut self, pointsize: f64) {
        unsafe { ffi::DrawSetFontSize(self.as_mut_ptr(), pointsize) }
    }

    pub fn set_fill_color(&mut self, color: &PixelWand) {
        unsafe { ffi::DrawSetFillColor(self.as_mut_ptr(), color.as_ptr()) }
    }

    pub fn set_stroke_color(&mut self, color: &PixelWand) {
        unsafe { ffi::DrawSetStrokeColor(self.as_mut_ptr(), color.as_ptr()) }
    }

    pub fn set_text_antialias(&mut self, antialias: bool) {
        unsafe { ffi::DrawSetTextAntialias(self.as_mut_ptr(), magick_bool(antialias)) }
    }

    /// Multiplies the current transformation with `affine`
    pub fn affine(&mut self, affine: &AffineMatrix) {
        let affine = ffi::AffineMatrix::from(*affine);
        unsafe { ffi::DrawAffine(self.as_mut_ptr(), &affine) }
    }
}

impl std::fmt::Debug for DrawingWand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingWand").finish_non_exhaustive()
    }
}

impl Drop for DrawingWand {
    fn drop(&mut self) {
        unsafe { ffi::DestroyDrawingWand(self.draw.as_ptr()) };
    }
}

/// Affine transformation `[sx rx ry sy tx ty]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    pub sx: f64,
    pub rx: f64,
    pub ry: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineMatrix {
    pub const IDENTITY: Self = Self {
        sx: 1.,
        rx: 0.,
        ry: 0.,
        sy: 1.,
        tx: 0.,
        ty: 0.,
    };

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            ..Self::IDENTITY
        }
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffineMatrix> for ffi::AffineMatrix {
    fn from(m: AffineMatrix) -> Self {
        ffi::AffineMatrix {
            sx: m.sx,
            rx: m.rx,
            ry: m.ry,
            sy: m.sy,
            tx: m.tx,
            ty: m.ty,
        }
    }
}

#[test]
fn affine_constructors() {
    let m = AffineMatrix::scale(2., 3.);
    assert_eq!((m.sx, m.sy, m.rx, m.ry, m.tx, m.ty), (2., 3., 0., 0., 0., 0.));

    let m = AffineMatrix::translate(4., 5.);
    assert_eq!((m.sx, m.sy, m.tx, m.ty), (1., 1., 4., 5.));
    assert_eq!(AffineMatrix::default(), AffineMatrix::IDENTITY);
}
