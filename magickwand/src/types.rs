//! Native enumerations
//!
//! Every enumeration converts to the native value it was declared with. The
//! numeric values match the ImageMagick 6 headers since they cross the FFI
//! boundary unchanged.

use magickwand_sys as ffi;

/// A native value that is not part of a known enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: u32,
}

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: ffi::$native:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = ffi::$value:ident,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = ffi::$value,
            )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            pub const fn into_native(self) -> ffi::$native {
                self as ffi::$native
            }
        }

        impl TryFrom<ffi::$native> for $name {
            type Error = UnknownValue;

            fn try_from(value: ffi::$native) -> Result<Self, Self::Error> {
                match value {
                    $(ffi::$value => Ok(Self::$variant),)*
                    _ => Err(UnknownValue {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for ffi::$native {
            fn from(value: $name) -> Self {
                value.into_native()
            }
        }
    };
}

native_enum!(
    /// Rendering intent of a color profile transformation
    pub enum RenderingIntent: ffi::RenderingIntent {
        Undefined = ffi::UndefinedIntent,
        Saturation = ffi::SaturationIntent,
        Perceptual = ffi::PerceptualIntent,
        Absolute = ffi::AbsoluteIntent,
        Relative = ffi::RelativeIntent,
    }
);

native_enum!(
    /// Noise distribution for [`MagickWand::add_noise_image`](crate::MagickWand::add_noise_image)
    pub enum NoiseType: ffi::NoiseType {
        Undefined = ffi::UndefinedNoise,
        Uniform = ffi::UniformNoise,
        Gaussian = ffi::GaussianNoise,
        MultiplicativeGaussian = ffi::MultiplicativeGaussianNoise,
        Impulse = ffi::ImpulseNoise,
        Laplacian = ffi::LaplacianNoise,
        Poisson = ffi::PoissonNoise,
        Random = ffi::RandomNoise,
    }
);

native_enum!(
    /// Distortion metric used when comparing images
    pub enum MetricType: ffi::MetricType {
        Undefined = ffi::UndefinedMetric,
        AbsoluteError = ffi::AbsoluteErrorMetric,
        MeanAbsoluteError = ffi::MeanAbsoluteErrorMetric,
        MeanErrorPerPixel = ffi::MeanErrorPerPixelMetric,
        MeanSquaredError = ffi::MeanSquaredErrorMetric,
        PeakAbsoluteError = ffi::PeakAbsoluteErrorMetric,
        PeakSignalToNoiseRatio = ffi::PeakSignalToNoiseRatioMetric,
        RootMeanSquaredError = ffi::RootMeanSquaredErrorMetric,
        NormalizedCrossCorrelationError = ffi::NormalizedCrossCorrelationErrorMetric,
        FuzzError = ffi::FuzzErrorMetric,
        PerceptualHashError = ffi::PerceptualHashErrorMetric,
    }
);

native_enum!(
    /// Method for layer operations on image sequences
    pub enum ImageLayerMethod: ffi::ImageLayerMethod {
        Undefined = ffi::UndefinedLayer,
        Coalesce = ffi::CoalesceLayer,
        CompareAny = ffi::CompareAnyLayer,
        CompareClear = ffi::CompareClearLayer,
        CompareOverlay = ffi::CompareOverlayLayer,
        Dispose = ffi::DisposeLayer,
        Optimize = ffi::OptimizeLayer,
        OptimizeImage = ffi::OptimizeImageLayer,
        OptimizePlus = ffi::OptimizePlusLayer,
        OptimizeTrans = ffi::OptimizeTransLayer,
        RemoveDups = ffi::RemoveDupsLayer,
        RemoveZero = ffi::RemoveZeroLayer,
        Composite = ffi::CompositeLayer,
        Merge = ffi::MergeLayer,
        Flatten = ffi::FlattenLayer,
        Mosaic = ffi::MosaicLayer,
        TrimBounds = ffi::TrimBoundsLayer,
    }
);

native_enum!(
    /// Resources the native library can be limited on
    pub enum ResourceType: ffi::ResourceType {
        Undefined = ffi::UndefinedResource,
        /// Maximum width * height of a pixel cache in memory
        Area = ffi::AreaResource,
        /// Bytes of disk the pixel cache may use
        Disk = ffi::DiskResource,
        /// Number of open pixel cache files
        File = ffi::FileResource,
        /// Bytes of memory mapped pixel cache
        Map = ffi::MapResource,
        /// Bytes of heap memory for the pixel cache
        Memory = ffi::MemoryResource,
        /// Number of worker threads
        Thread = ffi::ThreadResource,
        /// Seconds a process may run
        Time = ffi::TimeResource,
        /// Pause in milliseconds between pixel cache operations
        Throttle = ffi::ThrottleResource,
        /// Maximum image width in pixels
        Width = ffi::WidthResource,
        /// Maximum image height in pixels
        Height = ffi::HeightResource,
        /// Maximum number of images in a sequence
        ListLength = ffi::ListLengthResource,
    }
);

impl ResourceType {
    /// Suffix of the `MAGICKWAND_LIMIT_*` environment variable
    pub const fn env_name(self) -> Option<&'static str> {
        match self {
            Self::Undefined => None,
            Self::Area => Some("AREA"),
            Self::Disk => Some("DISK"),
            Self::File => Some("FILE"),
            Self::Map => Some("MAP"),
            Self::Memory => Some("MEMORY"),
            Self::Thread => Some("THREAD"),
            Self::Time => Some("TIME"),
            Self::Throttle => Some("THROTTLE"),
            Self::Width => Some("WIDTH"),
            Self::Height => Some("HEIGHT"),
            Self::ListLength => Some("LIST_LENGTH"),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// How severe a native exception is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal error",
        })
    }
}

/// Native exception type
///
/// The native library defines many aliases sharing a value, so this is a
/// transparent wrapper instead of a Rust enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ExceptionType(ffi::ExceptionType);

impl ExceptionType {
    pub const UNDEFINED: Self = Self(ffi::UndefinedException);
    pub const RESOURCE_LIMIT_WARNING: Self = Self(ffi::ResourceLimitWarning);
    pub const OPTION_WARNING: Self = Self(ffi::OptionWarning);
    pub const CORRUPT_IMAGE_WARNING: Self = Self(ffi::CorruptImageWarning);
    pub const WAND_WARNING: Self = Self(ffi::WandWarning);
    pub const RESOURCE_LIMIT_ERROR: Self = Self(ffi::ResourceLimitError);
    pub const OPTION_ERROR: Self = Self(ffi::OptionError);
    pub const MISSING_DELEGATE_ERROR: Self = Self(ffi::MissingDelegateError);
    pub const CORRUPT_IMAGE_ERROR: Self = Self(ffi::CorruptImageError);
    pub const FILE_OPEN_ERROR: Self = Self(ffi::FileOpenError);
    pub const BLOB_ERROR: Self = Self(ffi::BlobError);
    pub const IMAGE_ERROR: Self = Self(ffi::ImageError);
    pub const WAND_ERROR: Self = Self(ffi::WandError);
    pub const XSERVER_ERROR: Self = Self(ffi::XServerError);
    pub const RESOURCE_LIMIT_FATAL_ERROR: Self = Self(ffi::ResourceLimitFatalError);
    pub const WAND_FATAL_ERROR: Self = Self(ffi::WandFatalError);

    pub const fn from_native(value: ffi::ExceptionType) -> Self {
        Self(value)
    }

    pub const fn into_native(self) -> ffi::ExceptionType {
        self.0
    }

    pub const fn is_undefined(self) -> bool {
        self.0 == ffi::UndefinedException
    }

    /// Classifies the exception by the native value ranges
    pub const fn severity(self) -> Option<Severity> {
        if self.0 >= ffi::FatalErrorException {
            Some(Severity::Fatal)
        } else if self.0 >= ffi::ErrorException {
            Some(Severity::Error)
        } else if self.0 >= ffi::WarningException {
            Some(Severity::Warning)
        } else {
            None
        }
    }

    /// Name of the exception type as used in the native headers
    pub fn name(self) -> &'static str {
        EXCEPTION_NAMES
            .iter()
            .find(|(value, _)| *value == self.0)
            .map(|(_, name)| *name)
            .unwrap_or("UnknownException")
    }
}

impl std::fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

const EXCEPTION_NAMES: &[(ffi::ExceptionType, &str)] = &[
    (ffi::UndefinedException, "UndefinedException"),
    (ffi::ResourceLimitWarning, "ResourceLimitWarning"),
    (ffi::TypeWarning, "TypeWarning"),
    (ffi::OptionWarning, "OptionWarning"),
    (ffi::DelegateWarning, "DelegateWarning"),
    (ffi::MissingDelegateWarning, "MissingDelegateWarning"),
    (ffi::CorruptImageWarning, "CorruptImageWarning"),
    (ffi::FileOpenWarning, "FileOpenWarning"),
    (ffi::BlobWarning, "BlobWarning"),
    (ffi::StreamWarning, "StreamWarning"),
    (ffi::CacheWarning, "CacheWarning"),
    (ffi::CoderWarning, "CoderWarning"),
    (ffi::FilterWarning, "FilterWarning"),
    (ffi::ModuleWarning, "ModuleWarning"),
    (ffi::DrawWarning, "DrawWarning"),
    (ffi::ImageWarning, "ImageWarning"),
    (ffi::WandWarning, "WandWarning"),
    (ffi::RandomWarning, "RandomWarning"),
    (ffi::XServerWarning, "XServerWarning"),
    (ffi::MonitorWarning, "MonitorWarning"),
    (ffi::RegistryWarning, "RegistryWarning"),
    (ffi::ConfigureWarning, "ConfigureWarning"),
    (ffi::PolicyWarning, "PolicyWarning"),
    (ffi::ResourceLimitError, "ResourceLimitError"),
    (ffi::TypeError, "TypeError"),
    (ffi::OptionError, "OptionError"),
    (ffi::DelegateError, "DelegateError"),
    (ffi::MissingDelegateError, "MissingDelegateError"),
    (ffi::CorruptImageError, "CorruptImageError"),
    (ffi::FileOpenError, "FileOpenError"),
    (ffi::BlobError, "BlobError"),
    (ffi::StreamError, "StreamError"),
    (ffi::CacheError, "CacheError"),
    (ffi::CoderError, "CoderError"),
    (ffi::FilterError, "FilterError"),
    (ffi::ModuleError, "ModuleError"),
    (ffi::DrawError, "DrawError"),
    (ffi::ImageError, "ImageError"),
    (ffi::WandError, "WandError"),
    (ffi::RandomError, "RandomError"),
    (ffi::XServerError, "XServerError"),
    (ffi::MonitorError, "MonitorError"),
    (ffi::RegistryError, "RegistryError"),
    (ffi::ConfigureError, "ConfigureError"),
    (ffi::PolicyError, "PolicyError"),
    (ffi::ResourceLimitFatalError, "ResourceLimitFatalError"),
    (ffi::TypeFatalError, "TypeFatalError"),
    (ffi::OptionFatalError, "OptionFatalError"),
    (ffi::DelegateFatalError, "DelegateFatalError"),
    (ffi::MissingDelegateFatalError, "MissingDelegateFatalError"),
    (ffi::CorruptImageFatalError, "CorruptImageFatalError"),
    (ffi::FileOpenFatalError, "FileOpenFatalError"),
    (ffi::BlobFatalError, "BlobFatalError"),
    (ffi::StreamFatalError, "StreamFatalError"),
    (ffi::CacheFatalError, "CacheFatalError"),
    (ffi::CoderFatalError, "CoderFatalError"),
    (ffi::FilterFatalError, "FilterFatalError"),
    (ffi::ModuleFatalError, "ModuleFatalError"),
    (ffi::DrawFatalError, "DrawFatalError"),
    (ffi::ImageFatalError, "ImageFatalError"),
    (ffi::WandFatalError, "WandFatalError"),
    (ffi::RandomFatalError, "RandomFatalError"),
    (ffi::XServerFatalError, "XServerFatalError"),
    (ffi::MonitorFatalError, "MonitorFatalError"),
    (ffi::RegistryFatalError, "RegistryFatalError"),
    (ffi::ConfigureFatalError, "ConfigureFatalError"),
    (ffi::PolicyFatalError, "PolicyFatalError"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_intent_values() {
        assert_eq!(RenderingIntent::Undefined.into_native(), 0);
        assert_eq!(RenderingIntent::Saturation.into_native(), 1);
        assert_eq!(RenderingIntent::Perceptual.into_native(), 2);
        assert_eq!(RenderingIntent::Absolute.into_native(), 3);
        assert_eq!(RenderingIntent::Relative.into_native(), 4);
    }

    #[test]
    fn noise_type_values() {
        let values: Vec<u32> = NoiseType::ALL.iter().map(|x| x.into_native()).collect();
        assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(NoiseType::Poisson.into_native(), 6);
    }

    #[test]
    fn metric_type_values() {
        assert_eq!(MetricType::Undefined.into_native(), 0);
        assert_eq!(MetricType::AbsoluteError.into_native(), 1);
        assert_eq!(MetricType::MeanSquaredError.into_native(), 4);
        assert_eq!(MetricType::PeakSignalToNoiseRatio.into_native(), 6);
        assert_eq!(MetricType::RootMeanSquaredError.into_native(), 7);
        assert_eq!(MetricType::FuzzError.into_native(), 9);
        assert_eq!(MetricType::PerceptualHashError.into_native(), 0xff);
    }

    #[test]
    fn image_layer_method_values() {
        let values: Vec<u32> = ImageLayerMethod::ALL
            .iter()
            .map(|x| x.into_native())
            .collect();
        assert_eq!(values, (0..=16).collect::<Vec<u32>>());
        assert_eq!(ImageLayerMethod::CompareAny.into_native(), 2);
        assert_eq!(ImageLayerMethod::TrimBounds.into_native(), 16);
    }

    #[test]
    fn resource_type_values() {
        assert_eq!(ResourceType::Area.into_native(), 1);
        assert_eq!(ResourceType::Memory.into_native(), 5);
        assert_eq!(ResourceType::Thread.into_native(), 6);
        assert_eq!(ResourceType::Time.into_native(), 7);
        assert_eq!(ResourceType::Throttle.into_native(), 8);
        assert_eq!(ResourceType::Width.into_native(), 9);
        assert_eq!(ResourceType::Height.into_native(), 10);
        assert_eq!(ResourceType::ListLength.into_native(), 11);
        assert_eq!(ResourceType::ListLength.env_name(), Some("LIST_LENGTH"));
        assert!(ResourceType::try_from(12).is_err());
    }

    #[test]
    fn native_round_trip() {
        for intent in RenderingIntent::ALL {
            assert_eq!(RenderingIntent::try_from(intent.into_native()), Ok(*intent));
        }
        for metric in MetricType::ALL {
            assert_eq!(MetricType::try_from(u32::from(*metric)), Ok(*metric));
        }
    }

    #[test]
    fn unknown_native_value() {
        let err = RenderingIntent::try_from(5).unwrap_err();
        assert_eq!(err.kind, "RenderingIntent");
        assert_eq!(err.value, 5);
        assert_eq!(NoiseType::try_from(8).unwrap_err().kind, "NoiseType");
    }

    #[test]
    fn exception_severity() {
        assert_eq!(ExceptionType::UNDEFINED.severity(), None);
        assert_eq!(
            ExceptionType::RESOURCE_LIMIT_WARNING.severity(),
            Some(Severity::Warning)
        );
        assert_eq!(
            ExceptionType::from_native(399).severity(),
            Some(Severity::Warning)
        );
        assert_eq!(ExceptionType::WAND_ERROR.severity(), Some(Severity::Error));
        assert_eq!(
            ExceptionType::from_native(699).severity(),
            Some(Severity::Error)
        );
        assert_eq!(
            ExceptionType::WAND_FATAL_ERROR.severity(),
            Some(Severity::Fatal)
        );
    }

    #[test]
    fn exception_values() {
        assert_eq!(ExceptionType::WAND_WARNING.into_native(), 370);
        assert_eq!(ExceptionType::BLOB_ERROR.into_native(), 435);
        assert_eq!(ExceptionType::WAND_ERROR.into_native(), 470);
        assert_eq!(ExceptionType::WAND_FATAL_ERROR.into_native(), 770);
        assert_eq!(ExceptionType::WAND_ERROR.name(), "WandError");
        assert_eq!(ExceptionType::from_native(1).name(), "UnknownException");
    }
}
