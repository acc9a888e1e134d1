//! Fast SIMD-accelerated resampling to the fingerprint grid.
//!
//! Uses fast_image_resize which is 5-14x faster than image crate's resize
//! and automatically uses AVX2/NEON SIMD when available. The resample stays
//! in RGB (three channels) because the binarizer needs per-pixel color to
//! compute lightness; a pre-grayscaled buffer would lose the max/min channel
//! information.

use crate::error::FingerprintError;
use fast_image_resize::{images::Image, PixelType, ResizeOptions, Resizer};
use image::{DynamicImage, ImageBuffer, RgbImage};

/// Resample an image to `width` x `height` RGB using bilinear convolution.
///
/// The filter choice is not semantically load-bearing, but it must be
/// deterministic and identical for every image in a run; bilinear is a good
/// balance of speed and quality at fingerprint-grid sizes.
pub(crate) fn to_canonical_grid(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<RgbImage, FingerprintError> {
    let rgb = image.to_rgb8();

    let src_width = rgb.width();
    let src_height = rgb.height();

    if src_width == 0 || src_height == 0 {
        return Err(FingerprintError::ResizeFailed {
            reason: "source image has no pixels".to_string(),
        });
    }

    let src_image = Image::from_vec_u8(src_width, src_height, rgb.into_raw(), PixelType::U8x3)
        .map_err(|e| FingerprintError::ResizeFailed {
            reason: format!("failed to create source image: {}", e),
        })?;

    let mut dst_image = Image::new(width, height, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
        fast_image_resize::FilterType::Bilinear,
    ));

    Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| FingerprintError::ResizeFailed {
            reason: format!("resize failed: {}", e),
        })?;

    let grid: RgbImage = ImageBuffer::from_raw(width, height, dst_image.into_vec()).ok_or_else(
        || FingerprintError::ResizeFailed {
            reason: "failed to assemble the resampled grid".to_string(),
        },
    )?;

    Ok(grid)
}
