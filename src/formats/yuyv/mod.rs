mod from_rgb;
mod read;
mod to_rgb;
mod write;

pub use from_rgb::{rgb_to_u, rgb_to_v, rgb_to_y};
pub(crate) use from_rgb::RgbToYuyv;
pub(crate) use read::{YUYVLumaReader, YUYVReader};
pub use to_rgb::yuv_to_rgb;
pub(crate) use to_rgb::YuyvToRgb;
pub(crate) use write::YUYVWriter;

/// One horizontal pixel pair, laid out in memory as `[y0, u, y1, v]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YuyvPair {
    pub(crate) y0: u8,
    pub(crate) u: u8,
    pub(crate) y1: u8,
    pub(crate) v: u8,
}

impl YuyvPair {
    #[inline(always)]
    pub(crate) fn from_bytes([y0, u, y1, v]: [u8; 4]) -> Self {
        Self { y0, u, y1, v }
    }

    #[inline(always)]
    pub(crate) fn to_bytes(self) -> [u8; 4] {
        [self.y0, self.u, self.y1, self.v]
    }
}

pub(crate) trait YuyvSrc {
    /// Read the pair starting at the even column `x`
    fn read(&mut self, x: usize, y: usize) -> YuyvPair;
}
