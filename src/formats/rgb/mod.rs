mod read;
mod write;

pub(crate) use read::RGBReader;
pub(crate) use write::RGBWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RgbPixel {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl RgbPixel {
    #[inline(always)]
    pub(crate) fn from_components<const REVERSE: bool>([c0, c1, c2]: [u8; 3]) -> Self {
        if REVERSE {
            Self {
                r: c2,
                g: c1,
                b: c0,
            }
        } else {
            Self {
                r: c0,
                g: c1,
                b: c2,
            }
        }
    }

    #[inline(always)]
    pub(crate) fn into_components<const REVERSE: bool>(self) -> [u8; 3] {
        if REVERSE {
            [self.b, self.g, self.r]
        } else {
            [self.r, self.g, self.b]
        }
    }
}

pub(crate) trait RgbSrc {
    fn read(&mut self, x: usize, y: usize) -> RgbPixel;
}
