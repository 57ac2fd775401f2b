//! Safe bindings to the ImageMagick 6 MagickWand API
//!
//! A [`MagickWand`] owns a native image sequence. Operations act on the
//! current image of the sequence and report the exception the native library
//! recorded during the call as [`Error`].
//!
//! ```no_run
//! # fn main() -> magickwand::Result<()> {
//! let mut wand = magickwand::MagickWand::new()?;
//! wand.read_image("input.jpg")?;
//! wand.blur_image(0., 2.)?;
//! wand.write_image("output.png")?;
//! # Ok(()) }
//! ```
//!
//! ## Configuration
//!
//! Resource limits are read from `MAGICKWAND_LIMIT_<RESOURCE>` environment
//! variables when the native environment is created. See [`Config`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod channel;
mod config;
mod drawing;
mod error;
pub mod genesis;
mod image;
mod kernel;
#[cfg(feature = "logging")]
pub mod logging;
mod pixel;
mod types;
mod util;
mod wand;

pub use channel::ChannelType;
pub use config::{resource_limit, set_resource_limit, Config};
pub use drawing::{AffineMatrix, DrawingWand};
pub use error::{Error, ErrorKind, Exception, Result, ResultExt, ResultKind};
pub use genesis::{genesis, query_formats, version};
pub use image::Image;
pub use kernel::KernelInfo;
pub use pixel::{PixelPacket, PixelWand, Quantum};
pub use types::{
    ExceptionType, ImageLayerMethod, MetricType, NoiseType, RenderingIntent, ResourceType,
    Severity, UnknownValue,
};
pub use wand::MagickWand;
