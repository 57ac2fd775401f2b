#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Raw declarations for the ImageMagick 6 MagickWand C API.
//!
//! Only the entry points used by the `magickwand` crate are declared. Enum
//! types are plain `c_uint` aliases with the constants of the native headers,
//! so values cross the boundary verbatim.

use libc::{c_char, c_double, c_uchar, c_uint, c_void, size_t, ssize_t};

/// Opaque native image sequence context.
#[repr(C)]
pub struct MagickWand {
    _opaque: [u8; 0],
}

/// Opaque native color value.
#[repr(C)]
pub struct PixelWand {
    _opaque: [u8; 0],
}

/// Opaque native drawing context.
#[repr(C)]
pub struct DrawingWand {
    _opaque: [u8; 0],
}

/// Opaque native MagickCore image.
#[repr(C)]
pub struct Image {
    _opaque: [u8; 0],
}

/// Opaque native convolution kernel.
#[repr(C)]
pub struct KernelInfo {
    _opaque: [u8; 0],
}

#[cfg(feature = "hdri")]
pub type Quantum = f32;
#[cfg(all(not(feature = "hdri"), feature = "q8"))]
pub type Quantum = u8;
#[cfg(all(not(feature = "hdri"), not(feature = "q8")))]
pub type Quantum = u16;

/// Native `PixelPacket`
///
/// The channel order follows `MAGICKCORE_WORDS_BIGENDIAN` of the native
/// headers: BGRA on little-endian targets, RGBA on big-endian ones.
#[cfg(target_endian = "little")]
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PixelPacket {
    pub blue: Quantum,
    pub green: Quantum,
    pub red: Quantum,
    pub opacity: Quantum,
}

#[cfg(target_endian = "big")]
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PixelPacket {
    pub red: Quantum,
    pub green: Quantum,
    pub blue: Quantum,
    pub opacity: Quantum,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    pub sx: c_double,
    pub rx: c_double,
    pub ry: c_double,
    pub sy: c_double,
    pub tx: c_double,
    pub ty: c_double,
}

pub type MagickSizeType = u64;

pub type MagickBooleanType = c_uint;
pub const MagickFalse: MagickBooleanType = 0;
pub const MagickTrue: MagickBooleanType = 1;

pub type ChannelType = c_uint;
pub const UndefinedChannel: ChannelType = 0x0000;
pub const RedChannel: ChannelType = 0x0001;
pub const GrayChannel: ChannelType = 0x0001;
pub const CyanChannel: ChannelType = 0x0001;
pub const GreenChannel: ChannelType = 0x0002;
pub const MagentaChannel: ChannelType = 0x0002;
pub const BlueChannel: ChannelType = 0x0004;
pub const YellowChannel: ChannelType = 0x0004;
pub const AlphaChannel: ChannelType = 0x0008;
pub const OpacityChannel: ChannelType = 0x0008;
pub const MatteChannel: ChannelType = 0x0008;
pub const BlackChannel: ChannelType = 0x0020;
pub const IndexChannel: ChannelType = 0x0020;
pub const CompositeChannels: ChannelType = 0x002F;
pub const AllChannels: ChannelType = 0x7ff_ffff;
pub const TrueAlphaChannel: ChannelType = 0x0040;
pub const RGBChannels: ChannelType = 0x0080;
pub const GrayChannels: ChannelType = 0x0080;
pub const SyncChannels: ChannelType = 0x0100;
pub const DefaultChannels: ChannelType = (AllChannels | SyncChannels) & !OpacityChannel;

pub type NoiseType = c_uint;
pub const UndefinedNoise: NoiseType = 0;
pub const UniformNoise: NoiseType = 1;
pub const GaussianNoise: NoiseType = 2;
pub const MultiplicativeGaussianNoise: NoiseType = 3;
pub const ImpulseNoise: NoiseType = 4;
pub const LaplacianNoise: NoiseType = 5;
pub const PoissonNoise: NoiseType = 6;
pub const RandomNoise: NoiseType = 7;

pub type MetricType = c_uint;
pub const UndefinedMetric: MetricType = 0;
pub const AbsoluteErrorMetric: MetricType = 1;
pub const MeanAbsoluteErrorMetric: MetricType = 2;
pub const MeanErrorPerPixelMetric: MetricType = 3;
pub const MeanSquaredErrorMetric: MetricType = 4;
pub const PeakAbsoluteErrorMetric: MetricType = 5;
pub const PeakSignalToNoiseRatioMetric: MetricType = 6;
pub const RootMeanSquaredErrorMetric: MetricType = 7;
pub const NormalizedCrossCorrelationErrorMetric: MetricType = 8;
pub const FuzzErrorMetric: MetricType = 9;
pub const PerceptualHashErrorMetric: MetricType = 0xff;

pub type RenderingIntent = c_uint;
pub const UndefinedIntent: RenderingIntent = 0;
pub const SaturationIntent: RenderingIntent = 1;
pub const PerceptualIntent: RenderingIntent = 2;
pub const AbsoluteIntent: RenderingIntent = 3;
pub const RelativeIntent: RenderingIntent = 4;

pub type ImageLayerMethod = c_uint;
pub const UndefinedLayer: ImageLayerMethod = 0;
pub const CoalesceLayer: ImageLayerMethod = 1;
pub const CompareAnyLayer: ImageLayerMethod = 2;
pub const CompareClearLayer: ImageLayerMethod = 3;
pub const CompareOverlayLayer: ImageLayerMethod = 4;
pub const DisposeLayer: ImageLayerMethod = 5;
pub const OptimizeLayer: ImageLayerMethod = 6;
pub const OptimizeImageLayer: ImageLayerMethod = 7;
pub const OptimizePlusLayer: ImageLayerMethod = 8;
pub const OptimizeTransLayer: ImageLayerMethod = 9;
pub const RemoveDupsLayer: ImageLayerMethod = 10;
pub const RemoveZeroLayer: ImageLayerMethod = 11;
pub const CompositeLayer: ImageLayerMethod = 12;
pub const MergeLayer: ImageLayerMethod = 13;
pub const FlattenLayer: ImageLayerMethod = 14;
pub const MosaicLayer: ImageLayerMethod = 15;
pub const TrimBoundsLayer: ImageLayerMethod = 16;

pub type ResourceType = c_uint;
pub const UndefinedResource: ResourceType = 0;
pub const AreaResource: ResourceType = 1;
pub const DiskResource: ResourceType = 2;
pub const FileResource: ResourceType = 3;
pub const MapResource: ResourceType = 4;
pub const MemoryResource: ResourceType = 5;
pub const ThreadResource: ResourceType = 6;
pub const TimeResource: ResourceType = 7;
// Limits below need ImageMagick 6.9 or newer, older versions refuse them
pub const ThrottleResource: ResourceType = 8;
pub const WidthResource: ResourceType = 9;
pub const HeightResource: ResourceType = 10;
pub const ListLengthResource: ResourceType = 11;

pub type ExceptionType = c_uint;
pub const UndefinedException: ExceptionType = 0;
pub const WarningException: ExceptionType = 300;
pub const ResourceLimitWarning: ExceptionType = 300;
pub const TypeWarning: ExceptionType = 305;
pub const OptionWarning: ExceptionType = 310;
pub const DelegateWarning: ExceptionType = 315;
pub const MissingDelegateWarning: ExceptionType = 320;
pub const CorruptImageWarning: ExceptionType = 325;
pub const FileOpenWarning: ExceptionType = 330;
pub const BlobWarning: ExceptionType = 335;
pub const StreamWarning: ExceptionType = 340;
pub const CacheWarning: ExceptionType = 345;
pub const CoderWarning: ExceptionType = 350;
pub const FilterWarning: ExceptionType = 352;
pub const ModuleWarning: ExceptionType = 355;
pub const DrawWarning: ExceptionType = 360;
pub const ImageWarning: ExceptionType = 365;
pub const WandWarning: ExceptionType = 370;
pub const RandomWarning: ExceptionType = 375;
pub const XServerWarning: ExceptionType = 380;
pub const MonitorWarning: ExceptionType = 385;
pub const RegistryWarning: ExceptionType = 390;
pub const ConfigureWarning: ExceptionType = 395;
pub const PolicyWarning: ExceptionType = 399;
pub const ErrorException: ExceptionType = 400;
pub const ResourceLimitError: ExceptionType = 400;
pub const TypeError: ExceptionType = 405;
pub const OptionError: ExceptionType = 410;
pub const DelegateError: ExceptionType = 415;
pub const MissingDelegateError: ExceptionType = 420;
pub const CorruptImageError: ExceptionType = 425;
pub const FileOpenError: ExceptionType = 430;
pub const BlobError: ExceptionType = 435;
pub const StreamError: ExceptionType = 440;
pub const CacheError: ExceptionType = 445;
pub const CoderError: ExceptionType = 450;
pub const FilterError: ExceptionType = 452;
pub const ModuleError: ExceptionType = 455;
pub const DrawError: ExceptionType = 460;
pub const ImageError: ExceptionType = 465;
pub const WandError: ExceptionType = 470;
pub const RandomError: ExceptionType = 475;
pub const XServerError: ExceptionType = 480;
pub const MonitorError: ExceptionType = 485;
pub const RegistryError: ExceptionType = 490;
pub const ConfigureError: ExceptionType = 495;
pub const PolicyError: ExceptionType = 499;
pub const FatalErrorException: ExceptionType = 700;
pub const ResourceLimitFatalError: ExceptionType = 700;
pub const TypeFatalError: ExceptionType = 705;
pub const OptionFatalError: ExceptionType = 710;
pub const DelegateFatalError: ExceptionType = 715;
pub const MissingDelegateFatalError: ExceptionType = 720;
pub const CorruptImageFatalError: ExceptionType = 725;
pub const FileOpenFatalError: ExceptionType = 730;
pub const BlobFatalError: ExceptionType = 735;
pub const StreamFatalError: ExceptionType = 740;
pub const CacheFatalError: ExceptionType = 745;
pub const CoderFatalError: ExceptionType = 750;
pub const FilterFatalError: ExceptionType = 752;
pub const ModuleFatalError: ExceptionType = 755;
pub const DrawFatalError: ExceptionType = 760;
pub const ImageFatalError: ExceptionType = 765;
pub const WandFatalError: ExceptionType = 770;
pub const RandomFatalError: ExceptionType = 775;
pub const XServerFatalError: ExceptionType = 780;
pub const MonitorFatalError: ExceptionType = 785;
pub const RegistryFatalError: ExceptionType = 790;
pub const ConfigureFatalError: ExceptionType = 795;
pub const PolicyFatalError: ExceptionType = 799;

extern "C" {
    // --- Environment ---

    pub fn MagickWandGenesis();
    pub fn MagickWandTerminus();
    pub fn IsMagickWandInstantiated() -> MagickBooleanType;
    pub fn MagickRelinquishMemory(memory: *mut c_void) -> *mut c_void;
    pub fn MagickSetResourceLimit(
        type_: ResourceType,
        limit: MagickSizeType,
    ) -> MagickBooleanType;
    pub fn MagickGetResourceLimit(type_: ResourceType) -> MagickSizeType;
    pub fn MagickGetVersion(version: *mut size_t) -> *const c_char;
    pub fn MagickQueryFormats(pattern: *const c_char, number_formats: *mut size_t)
        -> *mut *mut c_char;

    // --- Magick wand lifecycle ---

    pub fn NewMagickWand() -> *mut MagickWand;
    pub fn NewMagickWandFromImage(image: *const Image) -> *mut MagickWand;
    pub fn CloneMagickWand(wand: *const MagickWand) -> *mut MagickWand;
    pub fn DestroyMagickWand(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn ClearMagickWand(wand: *mut MagickWand);
    pub fn IsMagickWand(wand: *const MagickWand) -> MagickBooleanType;
    pub fn MagickGetException(
        wand: *const MagickWand,
        severity: *mut ExceptionType,
    ) -> *mut c_char;
    pub fn MagickGetExceptionType(wand: *const MagickWand) -> ExceptionType;
    pub fn MagickClearException(wand: *mut MagickWand) -> MagickBooleanType;

    // --- Magick wand I/O and properties ---

    pub fn MagickReadImage(wand: *mut MagickWand, filename: *const c_char) -> MagickBooleanType;
    pub fn MagickReadImageBlob(
        wand: *mut MagickWand,
        blob: *const c_void,
        length: size_t,
    ) -> MagickBooleanType;
    pub fn MagickWriteImage(wand: *mut MagickWand, filename: *const c_char) -> MagickBooleanType;
    pub fn MagickGetImageBlob(wand: *mut MagickWand, length: *mut size_t) -> *mut c_uchar;
    pub fn MagickSetImageFormat(wand: *mut MagickWand, format: *const c_char)
        -> MagickBooleanType;
    pub fn MagickGetImageFormat(wand: *mut MagickWand) -> *mut c_char;
    pub fn MagickNewImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
        background: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickGetNumberImages(wand: *const MagickWand) -> size_t;
    pub fn MagickGetImageWidth(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImageHeight(wand: *mut MagickWand) -> size_t;
    pub fn MagickGetImagePixelColor(
        wand: *mut MagickWand,
        x: ssize_t,
        y: ssize_t,
        color: *mut PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickSetImageRenderingIntent(
        wand: *mut MagickWand,
        rendering_intent: RenderingIntent,
    ) -> MagickBooleanType;
    pub fn MagickGetImageRenderingIntent(wand: *mut MagickWand) -> RenderingIntent;

    // --- Magick wand iterator ---

    pub fn MagickResetIterator(wand: *mut MagickWand);
    pub fn MagickSetFirstIterator(wand: *mut MagickWand);
    pub fn MagickSetLastIterator(wand: *mut MagickWand);
    pub fn MagickNextImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickPreviousImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickSetIteratorIndex(wand: *mut MagickWand, index: ssize_t) -> MagickBooleanType;
    pub fn MagickGetIteratorIndex(wand: *mut MagickWand) -> ssize_t;

    // --- Images inside a wand ---

    pub fn GetImageFromMagickWand(wand: *const MagickWand) -> *mut Image;
    pub fn GetImageListLength(image: *const Image) -> size_t;
    pub fn GetImageIndexInList(image: *const Image) -> ssize_t;

    // --- Image operations ---

    pub fn MagickAdaptiveBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveBlurImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveResizeImage(
        wand: *mut MagickWand,
        columns: size_t,
        rows: size_t,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveSharpenImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveSharpenImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickAdaptiveThresholdImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        offset: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickAddImage(wand: *mut MagickWand, add_wand: *const MagickWand)
        -> MagickBooleanType;
    pub fn MagickAddNoiseImage(wand: *mut MagickWand, noise_type: NoiseType) -> MagickBooleanType;
    pub fn MagickAddNoiseImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
        noise_type: NoiseType,
    ) -> MagickBooleanType;
    pub fn MagickAffineTransformImage(
        wand: *mut MagickWand,
        drawing_wand: *const DrawingWand,
    ) -> MagickBooleanType;
    pub fn MagickAnnotateImage(
        wand: *mut MagickWand,
        drawing_wand: *const DrawingWand,
        x: c_double,
        y: c_double,
        angle: c_double,
        text: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickAnimateImages(wand: *mut MagickWand, server_name: *const c_char)
        -> MagickBooleanType;
    pub fn MagickAppendImages(
        wand: *mut MagickWand,
        stack: MagickBooleanType,
    ) -> *mut MagickWand;
    pub fn MagickAutoGammaImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickAutoGammaImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
    ) -> MagickBooleanType;
    pub fn MagickAutoLevelImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickAutoLevelImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
    ) -> MagickBooleanType;
    pub fn MagickBlackThresholdImage(
        wand: *mut MagickWand,
        threshold: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickBlueShiftImage(wand: *mut MagickWand, factor: c_double) -> MagickBooleanType;
    pub fn MagickBlurImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickBlurImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickBorderImage(
        wand: *mut MagickWand,
        bordercolor: *const PixelWand,
        width: size_t,
        height: size_t,
    ) -> MagickBooleanType;
    pub fn MagickBrightnessContrastImage(
        wand: *mut MagickWand,
        brightness: c_double,
        contrast: c_double,
    ) -> MagickBooleanType;
    pub fn MagickBrightnessContrastImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
        brightness: c_double,
        contrast: c_double,
    ) -> MagickBooleanType;
    pub fn MagickCharcoalImage(
        wand: *mut MagickWand,
        radius: c_double,
        sigma: c_double,
    ) -> MagickBooleanType;
    pub fn MagickChopImage(
        wand: *mut MagickWand,
        width: size_t,
        height: size_t,
        x: ssize_t,
        y: ssize_t,
    ) -> MagickBooleanType;
    pub fn MagickClampImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickClampImageChannel(wand: *mut MagickWand, channel: ChannelType)
        -> MagickBooleanType;
    pub fn MagickClipImage(wand: *mut MagickWand) -> MagickBooleanType;
    pub fn MagickClipImagePath(
        wand: *mut MagickWand,
        pathname: *const c_char,
        inside: MagickBooleanType,
    ) -> MagickBooleanType;
    pub fn MagickClutImage(wand: *mut MagickWand, clut_wand: *const MagickWand)
        -> MagickBooleanType;
    pub fn MagickClutImageChannel(
        wand: *mut MagickWand,
        channel: ChannelType,
        clut_wand: *const MagickWand,
    ) -> MagickBooleanType;
    pub fn MagickCoalesceImages(wand: *mut MagickWand) -> *mut MagickWand;
    pub fn MagickColorDecisionListImage(
        wand: *mut MagickWand,
        color_correction_collection: *const c_char,
    ) -> MagickBooleanType;
    pub fn MagickColorizeImage(
        wand: *mut MagickWand,
        colorize: *const PixelWand,
        opacity: *const PixelWand,
    ) -> MagickBooleanType;
    pub fn MagickColorMatrixImage(
        wand: *mut MagickWand,
        color_matrix: *const KernelInfo,
    ) -> MagickBooleanType;
    pub fn MagickCombineImages(wand: *mut MagickWand, channel: ChannelType) -> *mut MagickWand;
    pub fn MagickCommentImage(wand: *mut MagickWand, comment: *const c_char)
        -> MagickBooleanType;
    pub fn MagickCompareImageChannels(
        wand: *mut MagickWand,
        reference: *const MagickWand,
        channel: ChannelType,
        metric: MetricType,
        distortion: *mut c_double,
    ) -> *mut MagickWand;
    pub fn MagickCompareImageLayers(
        wand: *mut MagickWand,
        method: ImageLayerMethod,
    ) -> *mut MagickWand;
    pub fn MagickFilterImage(wand: *mut MagickWand, kernel: *const KernelInfo)
        -> MagickBooleanType;

    // --- Pixel wand ---

    pub fn NewPixelWand() -> *mut PixelWand;
    pub fn ClonePixelWand(wand: *const PixelWand) -> *mut PixelWand;
    pub fn DestroyPixelWand(wand: *mut PixelWand) -> *mut PixelWand;
    pub fn PixelGetException(wand: *const PixelWand, severity: *mut ExceptionType)
        -> *mut c_char;
    pub fn PixelClearException(wand: *mut PixelWand) -> MagickBooleanType;
    pub fn PixelSetColor(wand: *mut PixelWand, color: *const c_char) -> MagickBooleanType;
    pub fn PixelGetColorAsString(wand: *const PixelWand) -> *mut c_char;
    pub fn PixelGetRed(wand: *const PixelWand) -> c_double;
    pub fn PixelGetGreen(wand: *const PixelWand) -> c_double;
    pub fn PixelGetBlue(wand: *const PixelWand) -> c_double;
    pub fn PixelGetAlpha(wand: *const PixelWand) -> c_double;
    pub fn PixelGetOpacity(wand: *const PixelWand) -> c_double;
    pub fn PixelSetRed(wand: *mut PixelWand, red: c_double);
    pub fn PixelSetGreen(wand: *mut PixelWand, green: c_double);
    pub fn PixelSetBlue(wand: *mut PixelWand, blue: c_double);
    pub fn PixelSetAlpha(wand: *mut PixelWand, alpha: c_double);
    pub fn PixelSetOpacity(wand: *mut PixelWand, opacity: c_double);
    pub fn PixelGetQuantumColor(wand: *const PixelWand, color: *mut PixelPacket);
    pub fn PixelSetQuantumColor(wand: *mut PixelWand, color: *const PixelPacket);

    // --- Drawing wand ---

    pub fn NewDrawingWand() -> *mut DrawingWand;
    pub fn DestroyDrawingWand(wand: *mut DrawingWand) -> *mut DrawingWand;
    pub fn DrawGetException(wand: *const DrawingWand, severity: *mut ExceptionType)
        -> *mut c_char;
    pub fn DrawClearException(wand: *mut DrawingWand) -> MagickBooleanType;
    pub fn DrawSetFont(wand: *mut DrawingWand, font_name: *const c_char) -> MagickBooleanType;
    pub fn DrawSetFontSize(wand: *mut DrawingWand, pointsize: c_double);
    pub fn DrawSetFillColor(wand: *mut DrawingWand, fill_wand: *const PixelWand);
    pub fn DrawSetStrokeColor(wand: *mut DrawingWand, stroke_wand: *const PixelWand);
    pub fn DrawSetTextAntialias(wand: *mut DrawingWand, text_antialias: MagickBooleanType);
    pub fn DrawAffine(wand: *mut DrawingWand, affine: *const AffineMatrix);

    // --- Kernels ---

    pub fn AcquireKernelInfo(kernel_string: *const c_char) -> *mut KernelInfo;
    pub fn DestroyKernelInfo(kernel: *mut KernelInfo) -> *mut KernelInfo;
}
