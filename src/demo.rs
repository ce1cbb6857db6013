//! The even/odd crop demonstration
//!
//! Packs a BGR image into YUYV, wraps the packed bytes without copying and writes out what an
//! even crop, an odd crop and a single channel misinterpretation of the same buffer look like.

use crate::{
    ConvertError, FilterType, Image, ImageMut, ImageRef, ImageRefExt, PixelFormat, ResizeAlg,
    Resizer, Window, convert, pack_yuyv, window_offset,
};
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Fixed inputs of the demonstration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Image to load, a synthetic one is generated when it can't be read
    pub input: PathBuf,
    pub output_dir: PathBuf,

    /// Side length of the synthetic fallback image
    pub synthetic_size: usize,
    /// Seed for the synthetic image's noise
    pub seed: u64,

    /// Images with a smaller width or height are resized to `resize_to` x `resize_to`, both
    /// windows must fit into `min_side` x `min_side`
    pub min_side: usize,
    pub resize_to: usize,

    pub even_window: Window,
    pub odd_window: Window,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("image/DSC_0822.JPG"),
            output_dir: PathBuf::from("output"),
            synthetic_size: 3000,
            seed: 0x5955_5956,
            min_side: 2100,
            resize_to: 2500,
            even_window: Window {
                x: 1000,
                y: 1000,
                width: 1000,
                height: 1000,
            },
            odd_window: Window {
                x: 1001,
                y: 1001,
                width: 1001,
                height: 1001,
            },
        }
    }
}

/// What a [`run`] produced
#[derive(Debug, Default)]
pub struct DemoReport {
    pub packed_width: usize,
    pub packed_height: usize,

    /// Byte offset the single channel crop actually starts at
    pub misread_offset: usize,
    /// Byte offset the same window starts at in the YUYV layout
    pub intended_offset: usize,

    pub written: Vec<PathBuf>,
    /// Conversions that failed and were skipped
    pub failures: Vec<String>,
}

pub fn run(config: &DemoConfig) -> Result<DemoReport> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let bgr = match load_bgr(&config.input) {
        Ok(bgr) => bgr,
        Err(e) => {
            log::warn!("{e:#}");
            log::info!(
                "generating a {0}x{0} test image",
                config.synthetic_size
            );

            synthetic_bgr(config.synthetic_size, config.seed)
        }
    };

    // Both crop windows must fit
    let bgr = if bgr.width() < config.min_side || bgr.height() < config.min_side {
        log::info!(
            "resizing {}x{} input to {2}x{2}",
            bgr.width(),
            bgr.height(),
            config.resize_to
        );

        let mut resized = Image::blank(PixelFormat::BGR, config.resize_to, config.resize_to);

        Resizer::new(ResizeAlg::Convolution(FilterType::Bilinear)).resize(&bgr, &mut resized)?;

        resized
    } else {
        bgr
    };

    log::info!("building raw YUYV buffer");

    let packed = pack_yuyv(&bgr)?;
    drop(bgr);

    // No copy, `src` borrows `packed`
    let src = packed.view()?;

    log::info!(
        "wrapped YUYV buffer: {}x{}, {:?}, stride {}",
        src.width(),
        src.height(),
        src.format(),
        src.stride()
    );

    let mut report = DemoReport {
        packed_width: packed.width(),
        packed_height: packed.height(),
        ..Default::default()
    };

    let out = |name: &str| config.output_dir.join(name);

    // 1: even crop, pairs line up
    log::info!("even crop at {:?}", config.even_window);

    match (&src).crop(config.even_window) {
        Ok(crop_even) => {
            let path = out("result_even_crop.jpg");
            let result = yuyv_to_gray(&crop_even)
                .map_err(anyhow::Error::from)
                .and_then(|gray| save_gray(&gray, &path));
            report.record("even crop", path, result);

            let path = out("result_even_crop_color.jpg");
            let result = yuyv_to_bgr(&crop_even)
                .map_err(anyhow::Error::from)
                .and_then(|bgr| save_bgr(&bgr, &path));
            report.record("even crop in color", path, result);
        }
        Err(e) => report.fail("even crop", e.into()),
    }

    // 2: odd crop, the view starts on a [Y, V] element
    log::info!("odd crop at {:?}", config.odd_window);

    match (&src).crop(config.odd_window) {
        Ok(crop_odd) => {
            let path = out("result_odd_crop.jpg");
            let result = yuyv_to_gray(&crop_odd)
                .map_err(anyhow::Error::from)
                .and_then(|gray| save_gray(&gray, &path));
            report.record("odd crop", path, result);

            let path = out("result_odd_crop_wrong_color.jpg");
            let result = match yuyv_to_bgr(&crop_odd) {
                Err(e @ ConvertError::OddWidth(..)) => {
                    log::warn!("{e}, decoding the even part of the odd crop instead");
                    report.failures.push(format!("odd crop in color: {e}"));

                    (&crop_odd)
                        .crop_even()
                        .map_err(anyhow::Error::from)
                        .and_then(|even| Ok(yuyv_to_bgr(&even)?))
                }
                result => result.map_err(anyhow::Error::from),
            }
            .and_then(|bgr| save_bgr(&bgr, &path));
            report.record("odd crop in color, U and V swapped", path, result);
        }
        Err(e) => report.fail("odd crop", e.into()),
    }

    // 3: same bytes declared as a single channel image
    log::info!("wrapping the YUYV buffer as a single channel image");

    report.misread_offset = window_offset(
        PixelFormat::Gray,
        PixelFormat::Gray.packed_stride(packed.width()),
        config.odd_window,
    );
    report.intended_offset = window_offset(PixelFormat::YUYV, src.stride(), config.odd_window);

    log::info!(
        "single channel crop starts at byte {} instead of {}",
        report.misread_offset,
        report.intended_offset
    );

    let path = out("result_wrong_format_garbage.jpg");
    let result = packed
        .view_as(PixelFormat::Gray)
        .map_err(anyhow::Error::from)
        .and_then(|wrong| {
            let copy = (&wrong).crop(config.odd_window)?.clone_packed()?;

            save_gray(&copy, &path)
        });
    report.record("misinterpreted crop, mixed luma and chroma", path, result);

    Ok(report)
}

impl DemoReport {
    fn record(&mut self, step: &str, path: PathBuf, result: Result<()>) {
        match result {
            Ok(()) => {
                log::info!("{step} saved to {}", path.display());
                self.written.push(path);
            }
            Err(e) => self.fail(step, e),
        }
    }

    fn fail(&mut self, step: &str, e: anyhow::Error) {
        log::error!("{step} failed: {e:#}");
        self.failures.push(format!("{step}: {e:#}"));
    }
}

/// Random BGR noise with a filled red circle of radius 100 in the center
pub fn synthetic_bgr(size: usize, seed: u64) -> Image<Vec<u8>> {
    let mut image = Image::blank(PixelFormat::BGR, size, size);

    let mut rng = StdRng::seed_from_u64(seed);
    rng.fill(image.plane_mut().0);

    fill_circle(&mut image, size / 2, size / 2, 100, [0, 0, 255]);

    image
}

fn fill_circle(image: &mut Image<Vec<u8>>, cx: usize, cy: usize, radius: usize, bgr: [u8; 3]) {
    let (width, height) = (image.width(), image.height());
    let (plane, stride) = image.plane_mut();

    for y in cy.saturating_sub(radius)..(cy + radius + 1).min(height) {
        for x in cx.saturating_sub(radius)..(cx + radius + 1).min(width) {
            let (dx, dy) = (x.abs_diff(cx), y.abs_diff(cy));

            if dx * dx + dy * dy <= radius * radius {
                let offset = y * stride + x * 3;
                plane[offset..offset + 3].copy_from_slice(&bgr);
            }
        }
    }
}

fn load_bgr(path: &Path) -> Result<Image<Vec<u8>>> {
    let rgb = ::image::open(path)
        .with_context(|| format!("failed to read image {}", path.display()))?
        .to_rgb8();

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    log::info!("loaded {} ({width}x{height})", path.display());

    let rgb = Image::from_buffer(PixelFormat::RGB, rgb.into_raw(), None, width, height)?;
    let mut bgr = Image::blank(PixelFormat::BGR, width, height);

    convert(&rgb, &mut bgr)?;

    Ok(bgr)
}

fn yuyv_to_gray(src: &dyn ImageRef) -> Result<Image<Vec<u8>>, ConvertError> {
    let mut gray = Image::blank(PixelFormat::Gray, src.width(), src.height());

    convert(src, &mut gray)?;

    Ok(gray)
}

fn yuyv_to_bgr(src: &dyn ImageRef) -> Result<Image<Vec<u8>>, ConvertError> {
    let mut bgr = Image::blank(PixelFormat::BGR, src.width(), src.height());

    convert(src, &mut bgr)?;

    Ok(bgr)
}

fn save_gray(gray: &Image<Vec<u8>>, path: &Path) -> Result<()> {
    ::image::GrayImage::from_raw(
        gray.width() as u32,
        gray.height() as u32,
        gray.buffer().clone(),
    )
    .context("gray buffer doesn't match its dimensions")?
    .save(path)
    .with_context(|| format!("failed to write {}", path.display()))
}

fn save_bgr(bgr: &Image<Vec<u8>>, path: &Path) -> Result<()> {
    let mut rgb = Image::blank(PixelFormat::RGB, bgr.width(), bgr.height());

    convert(bgr, &mut rgb)?;

    ::image::RgbImage::from_raw(
        rgb.width() as u32,
        rgb.height() as u32,
        rgb.into_buffer(),
    )
    .context("rgb buffer doesn't match its dimensions")?
    .save(path)
    .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_image_has_red_center() {
        let image = synthetic_bgr(300, 1);
        let (plane, stride) = image.plane();

        let center = 150 * stride + 150 * 3;
        assert_eq!(plane[center..center + 3], [0, 0, 255]);

        let edge = 150 * stride + 250 * 3;
        assert_eq!(plane[edge..edge + 3], [0, 0, 255]);
    }

    #[test]
    fn synthetic_image_is_seeded() {
        assert_eq!(
            synthetic_bgr(64, 7).buffer(),
            synthetic_bgr(64, 7).buffer()
        );
    }

    #[test]
    fn circle_is_clipped_to_image() {
        let mut image = Image::blank(PixelFormat::BGR, 10, 10);

        fill_circle(&mut image, 0, 0, 3, [1, 2, 3]);

        let (plane, stride) = image.plane();
        assert_eq!(plane[..3], [1, 2, 3]);
        assert_eq!(plane[3 * stride..3 * stride + 3], [1, 2, 3]);
        assert_eq!(plane[3 * stride + 3..3 * stride + 6], [0, 0, 0]);
    }
}
