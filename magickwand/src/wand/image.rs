use magickwand_sys as ffi;

use super::MagickWand;
use crate::channel::ChannelType;
use crate::drawing::DrawingWand;
use crate::error::{Result, ResultExt};
use crate::image::Image;
use crate::kernel::KernelInfo;
use crate::pixel::PixelWand;
use crate::types::{ImageLayerMethod, MetricType, NoiseType};
use crate::util::{c_string, magick_bool};

impl MagickWand {
    /// Current image of the wand
    ///
    /// The image stays owned by the wand. Returns [`None`] if the wand holds
    /// no images.
    pub fn get_image(&self) -> Option<Image<'_>> {
        let image = unsafe { ffi::GetImageFromMagickWand(self.as_ptr()) };
        self.clear_exception();
        Image::from_wand(self, image)
    }

    /// Blurs less intensely near edges and more intensely far from edges
    ///
    /// `radius` of the Gaussian in pixels, not counting the center pixel,
    /// should be larger than `sigma`. A `radius` of `0` selects a suitable
    /// radius.
    pub fn adaptive_blur_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let status = unsafe { ffi::MagickAdaptiveBlurImage(self.as_mut_ptr(), radius, sigma) };
        self.check_status(status, "MagickAdaptiveBlurImage")
    }

    pub fn adaptive_blur_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let status = unsafe {
            ffi::MagickAdaptiveBlurImageChannel(
                self.as_mut_ptr(),
                channel.into_native(),
                radius,
                sigma,
            )
        };
        self.check_status(status, "MagickAdaptiveBlurImageChannel")
    }

    /// Resizes with data dependent triangulation
    pub fn adaptive_resize_image(&mut self, columns: usize, rows: usize) -> Result<()> {
        let status = unsafe { ffi::MagickAdaptiveResizeImage(self.as_mut_ptr(), columns, rows) };
        self.check_status(status, "MagickAdaptiveResizeImage")
    }

    /// Sharpens more intensely near edges and less intensely far from edges
    pub fn adaptive_sharpen_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let status = unsafe { ffi::MagickAdaptiveSharpenImage(self.as_mut_ptr(), radius, sigma) };
        self.check_status(status, "MagickAdaptiveSharpenImage")
    }

    pub fn adaptive_sharpen_image_channel(
        &mut self,
        channel: ChannelType,
        radius: f64,
        sigma: f64,
    ) -> Result<()> {
        let status = unsafe {
            ffi::MagickAdaptiveSharpenImageChannel(
                self.as_mut_ptr(),
                channel.into_native(),
                radius,
                sigma,
            )
        };
        self.check_status(status, "MagickAdaptiveSharpenImageChannel")
    }

    /// Thresholds every pixel based on the intensity range of its
    /// `width` x `height` neighborhood
    pub fn adaptive_threshold_image(
        &mut self,
        width: usize,
        height: usize,
        offset: isize,
    ) -> Result<()> {
        let status = unsafe { ffi::MagickAdaptiveThresholdImage(self.as_mut_ptr(), width, height, offset) };
        self.check_status(status, "MagickAdaptiveThresholdImage")
    }

    /// Inserts copies of all images of `other` after the current image
    ///
    /// Use [`set_last_iterator`](Self::set_last_iterator) first to append and
    /// [`set_first_iterator`](Self::set_first_iterator) to prepend.
    pub fn add_image(&mut self, other: &MagickWand) -> Result<()> {
        let status = unsafe { ffi::MagickAddImage(self.as_mut_ptr(), other.as_ptr()) };
        self.check_status(status, "MagickAddImage")
    }

    pub fn add_noise_image(&mut self, noise_type: NoiseType) -> Result<()> {
        let status = unsafe { ffi::MagickAddNoiseImage(self.as_mut_ptr(), noise_type.into_native()) };
        self.check_status(status, "MagickAddNoiseImage")
    }

    pub fn add_noise_image_channel(
        &mut self,
        channel: ChannelType,
        noise_type: NoiseType,
    ) -> Result<()> {
        let status = unsafe {
            ffi::MagickAddNoiseImageChannel(
                self.as_mut_ptr(),
                channel.into_native(),
                noise_type.into_native(),
            )
        };
        self.check_status(status, "MagickAddNoiseImageChannel")
    }

    /// Transforms the image by the affine matrix of `drawing_wand`
    pub fn affine_transform_image(&mut self, drawing_wand: &DrawingWand) -> Result<()> {
        let status = unsafe { ffi::MagickAffineTransformImage(self.as_mut_ptr(), drawing_wand.as_ptr()) };
        self.check_status(status, "MagickAffineTransformImage")
    }

    /// Draws `text` with its baseline starting at `x`, `y`, rotated by
    /// `angle` degrees
    pub fn annotate_image(
        &mut self,
        drawing_wand: &DrawingWand,
        x: f64,
        y: f64,
        angle: f64,
        text: &str,
    ) -> Result<()> {
        let text = c_string(text).err_operation("MagickAnnotateImage")?;
        let status = unsafe {
            ffi::MagickAnnotateImage(
                self.as_mut_ptr(),
                drawing_wand.as_ptr(),
                x,
                y,
                angle,
                text.as_ptr(),
            )
        };
        self.check_status(status, "MagickAnnotateImage")
    }

    /// Animates the sequence on the X11 display `server`
    pub fn x11_animate_images(&mut self, server: &str) -> Result<()> {
        let server = c_string(server).err_operation("MagickAnimateImages")?;
        let status = unsafe { ffi::MagickAnimateImages(self.as_mut_ptr(), server.as_ptr()) };
        self.check_status(status, "MagickAnimateImages")
    }

    /// Appends the images from the current image onwards into a new wand
    /// holding a single image
    ///
    /// Images are placed left to right, or top to bottom if `top_to_bottom`
    /// is set. Call [`reset_iterator`](Self::reset_iterator) first to include
    /// all images.
    pub fn append_images(&self, top_to_bottom: bool) -> Result<MagickWand> {
        let wand = unsafe { ffi::MagickAppendImages(self.as_mut_ptr(), magick_bool(top_to_bottom)) };
        self.produced(wand, "MagickAppendImages")
    }

    /// Adjusts gamma based on the mean of the image
    pub fn auto_gamma_image(&mut self) -> Result<()> {
        let status = unsafe { ffi::MagickAutoGammaImage(self.as_mut_ptr()) };
        self.check_status(status, "MagickAutoGammaImage")
    }

    pub fn auto_gamma_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let status = unsafe { ffi::MagickAutoGammaImageChannel(self.as_mut_ptr(), channel.into_native()) };
        self.check_status(status, "MagickAutoGammaImageChannel")
    }

    /// Scales the minimum and maximum values to the full quantum range
    pub fn auto_level_image(&mut self) -> Result<()> {
        let status = unsafe { ffi::MagickAutoLevelImage(self.as_mut_ptr()) };
        self.check_status(status, "MagickAutoLevelImage")
    }

    pub fn auto_level_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let status = unsafe { ffi::MagickAutoLevelImageChannel(self.as_mut_ptr(), channel.into_native()) };
        self.check_status(status, "MagickAutoLevelImageChannel")
    }

    /// Sets pixels below `threshold` to black, others stay unchanged
    pub fn black_threshold_image(&mut self, threshold: &PixelWand) -> Result<()> {
        let status = unsafe { ffi::MagickBlackThresholdImage(self.as_mut_ptr(), threshold.as_ptr()) };
        self.check_status(status, "MagickBlackThresholdImage")
    }

    /// Simulates a scene at nighttime in the moonlight
    pub fn blue_shift_image(&mut self, factor: f64) -> Result<()> {
        let status = unsafe { ffi::MagickBlueShiftImage(self.as_mut_ptr(), factor) };
        self.check_status(status, "MagickBlueShiftImage")
    }

    /// Convolves with a Gaussian of `radius` and standard deviation `sigma`
    ///
    /// A `radius` of `0` selects a suitable radius.
    pub fn blur_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let status = unsafe { ffi::MagickBlurImage(self.as_mut_ptr(), radius, sigma) };
        self.check_status(status, "MagickBlurImage")
    }

    pub fn blur_image_channel(&mut self, channel: ChannelType, radius: f64, sigma: f64) -> Result<()> {
        let status = unsafe {
            ffi::MagickBlurImageChannel(self.as_mut_ptr(), channel.into_native(), radius, sigma)
        };
        self.check_status(status, "MagickBlurImageChannel")
    }

    pub fn border_image(
        &mut self,
        border_color: &PixelWand,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let status = unsafe { ffi::MagickBorderImage(self.as_mut_ptr(), border_color.as_ptr(), width, height) };
        self.check_status(status, "MagickBorderImage")
    }

    /// Brightness and contrast are percentages from `-100` to `100`
    pub fn brightness_contrast_image(&mut self, brightness: f64, contrast: f64) -> Result<()> {
        let status = unsafe { ffi::MagickBrightnessContrastImage(self.as_mut_ptr(), brightness, contrast) };
        self.check_status(status, "MagickBrightnessContrastImage")
    }

    pub fn brightness_contrast_image_channel(
        &mut self,
        channel: ChannelType,
        brightness: f64,
        contrast: f64,
    ) -> Result<()> {
        let status = unsafe {
            ffi::MagickBrightnessContrastImageChannel(
                self.as_mut_ptr(),
                channel.into_native(),
                brightness,
                contrast,
            )
        };
        self.check_status(status, "MagickBrightnessContrastImageChannel")
    }

    /// Simulates a charcoal drawing
    pub fn charcoal_image(&mut self, radius: f64, sigma: f64) -> Result<()> {
        let status = unsafe { ffi::MagickCharcoalImage(self.as_mut_ptr(), radius, sigma) };
        self.check_status(status, "MagickCharcoalImage")
    }

    /// Removes the region and collapses the image into it
    pub fn chop_image(&mut self, width: usize, height: usize, x: isize, y: isize) -> Result<()> {
        let status = unsafe { ffi::MagickChopImage(self.as_mut_ptr(), width, height, x, y) };
        self.check_status(status, "MagickChopImage")
    }

    /// Restricts values to the quantum range
    pub fn clamp_image(&mut self) -> Result<()> {
        let status = unsafe { ffi::MagickClampImage(self.as_mut_ptr()) };
        self.check_status(status, "MagickClampImage")
    }

    pub fn clamp_image_channel(&mut self, channel: ChannelType) -> Result<()> {
        let status = unsafe { ffi::MagickClampImageChannel(self.as_mut_ptr(), channel.into_native()) };
        self.check_status(status, "MagickClampImageChannel")
    }

    /// Clips along the first path of the 8BIM profile
    pub fn clip_image(&mut self) -> Result<()> {
        let status = unsafe { ffi::MagickClipImage(self.as_mut_ptr()) };
        self.check_status(status, "MagickClipImage")
    }

    /// Clips along a named path of the 8BIM profile
    ///
    /// A `pathname` starting with `#` selects a numbered path, `"#1"` is the
    /// first one. If `inside` is set, later operations take effect inside the
    /// path, otherwise outside.
    pub fn clip_image_path(&mut self, pathname: &str, inside: bool) -> Result<()> {
        let pathname = c_string(pathname).err_operation("MagickClipImagePath")?;
        let status = unsafe {
            ffi::MagickClipImagePath(self.as_mut_ptr(), pathname.as_ptr(), magick_bool(inside))
        };
        self.check_status(status, "MagickClipImagePath")
    }

    /// Replaces colors from the lookup table in `clut`
    pub fn clut_image(&mut self, clut: &MagickWand) -> Result<()> {
        let status = unsafe { ffi::MagickClutImage(self.as_mut_ptr(), clut.as_ptr()) };
        self.check_status(status, "MagickClutImage")
    }

    pub fn clut_image_channel(&mut self, channel: ChannelType, clut: &MagickWand) -> Result<()> {
        let status = unsafe {
            ffi::MagickClutImageChannel(self.as_mut_ptr(), channel.into_native(), clut.as_ptr())
        };
        self.check_status(status, "MagickClutImageChannel")
    }

    /// Composites the sequence respecting page offsets and disposal methods
    ///
    /// Every image of the returned sequence has the size of the first image.
    pub fn coalesce_images(&self) -> Result<MagickWand> {
        let wand = unsafe { ffi::MagickCoalesceImages(self.as_mut_ptr()) };
        self.produced(wand, "MagickCoalesceImages")
    }

    /// Applies a Color Correction Collection (ASC CDL) XML document
    pub fn color_decision_list_image(&mut self, ccc_xml: &str) -> Result<()> {
        let ccc_xml = c_string(ccc_xml).err_operation("MagickColorDecisionListImage")?;
        let status = unsafe { ffi::MagickColorDecisionListImage(self.as_mut_ptr(), ccc_xml.as_ptr()) };
        self.check_status(status, "MagickColorDecisionListImage")
    }

    /// Blends `colorize` into every pixel, weighted by `opacity`
    pub fn colorize_image(&mut self, colorize: &PixelWand, opacity: &PixelWand) -> Result<()> {
        let status = unsafe { ffi::MagickColorizeImage(self.as_mut_ptr(), colorize.as_ptr(), opacity.as_ptr()) };
        self.check_status(status, "MagickColorizeImage")
    }

    /// Applies a 5x5 (RGBA) or 6x6 (CMYKA) color transformation matrix
    ///
    /// Offsets are in the last column and normalized.
    pub fn color_matrix_image(&mut self, color_matrix: &KernelInfo) -> Result<()> {
        let status = unsafe { ffi::MagickColorMatrixImage(self.as_mut_ptr(), color_matrix.as_ptr()) };
        self.check_status(status, "MagickColorMatrixImage")
    }

    /// Combines the grayscale values of the sequence into the channels of a
    /// single image, in the order red, green, blue and so on
    pub fn combine_images(&self, channel: ChannelType) -> Result<MagickWand> {
        let wand = unsafe { ffi::MagickCombineImages(self.as_mut_ptr(), channel.into_native()) };
        self.produced(wand, "MagickCombineImages")
    }

    pub fn comment_image(&mut self, comment: &str) -> Result<()> {
        let comment = c_string(comment).err_operation("MagickCommentImage")?;
        let status = unsafe { ffi::MagickCommentImage(self.as_mut_ptr(), comment.as_ptr()) };
        self.check_status(status, "MagickCommentImage")
    }

    /// Compares channels with `reference`
    ///
    /// Returns the difference image and the distortion measured with
    /// `metric`.
    pub fn compare_image_channels(
        &self,
        reference: &MagickWand,
        channel: ChannelType,
        metric: MetricType,
    ) -> Result<(MagickWand, f64)> {
        let mut distortion = 0.;
        let wand = unsafe {
            ffi::MagickCompareImageChannels(
                self.as_mut_ptr(),
                reference.as_ptr(),
                channel.into_native(),
                metric.into_native(),
                &mut distortion,
            )
        };
        let wand = self.produced(wand, "MagickCompareImageChannels")?;
        Ok((wand, distortion))
    }

    /// Compares each image with the next one and returns the bounding
    /// regions of the differences
    pub fn compare_image_layers(&self, method: ImageLayerMethod) -> Result<MagickWand> {
        let wand = unsafe { ffi::MagickCompareImageLayers(self.as_mut_ptr(), method.into_native()) };
        self.produced(wand, "MagickCompareImageLayers")
    }

    /// Convolves with a custom kernel
    pub fn filter_image(&mut self, kernel: &KernelInfo) -> Result<()> {
        let status = unsafe { ffi::MagickFilterImage(self.as_mut_ptr(), kernel.as_ptr()) };
        self.check_status(status, "MagickFilterImage")
    }
}
