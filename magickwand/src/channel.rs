use magickwand_sys as ffi;

bitflags::bitflags! {
    /// Channels an operation is restricted to
    ///
    /// Several names share a bit, like in the native headers: `RED`, `GRAY`
    /// and `CYAN` all select the first channel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelType: ffi::ChannelType {
        const RED = ffi::RedChannel;
        const GRAY = ffi::GrayChannel;
        const CYAN = ffi::CyanChannel;
        const GREEN = ffi::GreenChannel;
        const MAGENTA = ffi::MagentaChannel;
        const BLUE = ffi::BlueChannel;
        const YELLOW = ffi::YellowChannel;
        const ALPHA = ffi::AlphaChannel;
        const OPACITY = ffi::OpacityChannel;
        const BLACK = ffi::BlackChannel;
        const INDEX = ffi::IndexChannel;
        const TRUE_ALPHA = ffi::TrueAlphaChannel;
        const RGB = ffi::RGBChannels;
        const GRAY_CHANNELS = ffi::GrayChannels;
        const SYNC = ffi::SyncChannels;
        const COMPOSITE = ffi::CompositeChannels;
        const ALL = ffi::AllChannels;
        const DEFAULT = ffi::DefaultChannels;
    }
}

impl ChannelType {
    pub const UNDEFINED: Self = Self::empty();

    pub const fn into_native(self) -> ffi::ChannelType {
        self.bits()
    }

    /// Keeps every bit, including bits without a name
    pub const fn from_native(value: ffi::ChannelType) -> Self {
        Self::from_bits_retain(value)
    }
}

impl Default for ChannelType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_values() {
        assert_eq!(ChannelType::UNDEFINED.into_native(), 0);
        assert_eq!(ChannelType::RED.into_native(), 0x1);
        assert_eq!(ChannelType::GRAY.into_native(), 0x1);
        assert_eq!(ChannelType::CYAN.into_native(), 0x1);
        assert_eq!(ChannelType::GREEN.into_native(), 0x2);
        assert_eq!(ChannelType::BLUE.into_native(), 0x4);
        assert_eq!(ChannelType::ALPHA.into_native(), 0x8);
        assert_eq!(ChannelType::OPACITY.into_native(), 0x8);
        assert_eq!(ChannelType::BLACK.into_native(), 0x20);
        assert_eq!(ChannelType::TRUE_ALPHA.into_native(), 0x40);
        assert_eq!(ChannelType::RGB.into_native(), 0x80);
        assert_eq!(ChannelType::SYNC.into_native(), 0x100);
        assert_eq!(ChannelType::COMPOSITE.into_native(), 0x2f);
        assert_eq!(ChannelType::ALL.into_native(), 0x7ff_ffff);
        assert_eq!(ChannelType::DEFAULT.into_native(), 0x7ff_fff7);
    }

    #[test]
    fn channel_combination() {
        let rgb = ChannelType::RED | ChannelType::GREEN | ChannelType::BLUE;
        assert_eq!(rgb.into_native(), 0x7);
        assert!(ChannelType::COMPOSITE.contains(rgb | ChannelType::ALPHA));
        assert_eq!(ChannelType::from_native(0x7), rgb);
    }
}
