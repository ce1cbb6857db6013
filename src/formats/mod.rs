mod gray;
mod rgb;
mod visit;
mod yuyv;

pub(crate) use gray::*;
pub(crate) use rgb::*;
pub(crate) use yuyv::*;
pub use yuyv::{rgb_to_u, rgb_to_v, rgb_to_y, yuv_to_rgb};
