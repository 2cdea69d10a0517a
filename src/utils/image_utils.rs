//! Region rendering through the `image` crate
//!
//! Only 8 and 16 bit samples with 1 to 4 channels map onto an image
//! color type. Signed samples keep their bit pattern.

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};
use log::info;

use crate::extractor::Region;
use crate::io::ByteOrder;
use crate::plane::{PixelType, PlaneDescriptor, PlaneError, PlaneResult};

/// Convert region bytes, as returned by the region reader, into an image
pub fn region_to_image(plane: &PlaneDescriptor, region: Region, bytes: &[u8]) -> PlaneResult<DynamicImage> {
    let channels = plane.rgb_channel_count as usize;
    let pixels = region.width as usize * region.height as usize;
    let bpp = plane.bytes_per_pixel() as usize;

    if bytes.len() < pixels * channels * bpp {
        return Err(PlaneError::BufferTooSmall {
            required: pixels * channels * bpp,
            actual: bytes.len(),
        });
    }

    match plane.pixel_type {
        PixelType::Uint8 | PixelType::Int8 => {
            let samples = interleave(bytes, channels, pixels, plane.interleaved);
            let (w, h) = (region.width, region.height);
            let image = match channels {
                1 => ImageBuffer::<Luma<u8>, _>::from_raw(w, h, samples).map(DynamicImage::ImageLuma8),
                2 => ImageBuffer::<LumaA<u8>, _>::from_raw(w, h, samples).map(DynamicImage::ImageLumaA8),
                3 => ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, samples).map(DynamicImage::ImageRgb8),
                4 => ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, samples).map(DynamicImage::ImageRgba8),
                _ => None,
            };
            image.ok_or_else(|| unsupported(plane))
        }
        PixelType::Uint16 | PixelType::Int16 => {
            let handler = ByteOrder::from_little_endian(plane.little_endian).create_handler();
            let decoded = handler.decode_u16(bytes);
            let samples = interleave(&decoded, channels, pixels, plane.interleaved);
            let (w, h) = (region.width, region.height);
            let image = match channels {
                1 => ImageBuffer::<Luma<u16>, _>::from_raw(w, h, samples).map(DynamicImage::ImageLuma16),
                2 => ImageBuffer::<LumaA<u16>, _>::from_raw(w, h, samples).map(DynamicImage::ImageLumaA16),
                3 => ImageBuffer::<Rgb<u16>, _>::from_raw(w, h, samples).map(DynamicImage::ImageRgb16),
                4 => ImageBuffer::<Rgba<u16>, _>::from_raw(w, h, samples).map(DynamicImage::ImageRgba16),
                _ => None,
            };
            image.ok_or_else(|| unsupported(plane))
        }
        _ => Err(unsupported(plane)),
    }
}

/// Save region bytes as an image; the format follows the file extension
pub fn save_region_image(
    plane: &PlaneDescriptor,
    region: Region,
    bytes: &[u8],
    output_path: &str,
) -> PlaneResult<()> {
    let image = region_to_image(plane, region, bytes)?;
    info!("Saving {} region as image to {}", region, output_path);
    match image.save(output_path) {
        Ok(_) => Ok(()),
        Err(e) => Err(PlaneError::GenericError(format!("Failed to save image: {}", e))),
    }
}

/// Whether `path` names a format `save_region_image` writes
pub fn is_image_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.ends_with(".png") || lower.ends_with(".tif") || lower.ends_with(".tiff")
}

fn interleave<T: Copy>(samples: &[T], channels: usize, pixels: usize, interleaved: bool) -> Vec<T> {
    if interleaved || channels == 1 {
        return samples[..pixels * channels].to_vec();
    }
    let mut out = Vec::with_capacity(pixels * channels);
    for p in 0..pixels {
        for c in 0..channels {
            out.push(samples[c * pixels + p]);
        }
    }
    out
}

fn unsupported(plane: &PlaneDescriptor) -> PlaneError {
    PlaneError::GenericError(format!(
        "Cannot render {} samples with {} channels as an image; write raw output instead",
        plane.pixel_type, plane.rgb_channel_count
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_rgb_is_interleaved() {
        let plane = PlaneDescriptor::new(2, 1, PixelType::Uint8).with_channels(3, false);
        let region = Region::new(0, 0, 2, 1);
        // R plane, G plane, B plane
        let bytes = [10, 11, 20, 21, 30, 31];
        let image = region_to_image(&plane, region, &bytes).unwrap();
        let rgb = image.to_rgb8();
        assert_eq!(rgb.as_raw(), &vec![10, 20, 30, 11, 21, 31]);
    }

    #[test]
    fn test_big_endian_uint16() {
        let plane = PlaneDescriptor::new(2, 1, PixelType::Uint16).with_little_endian(false);
        let region = Region::new(0, 0, 2, 1);
        let image = region_to_image(&plane, region, &[0x01, 0x02, 0xFF, 0x00]).unwrap();
        match image {
            DynamicImage::ImageLuma16(buffer) => assert_eq!(buffer.as_raw(), &vec![0x0102, 0xFF00]),
            other => panic!("unexpected color type {:?}", other.color()),
        }
    }

    #[test]
    fn test_float_samples_rejected() {
        let plane = PlaneDescriptor::new(1, 1, PixelType::Float);
        let result = region_to_image(&plane, Region::new(0, 0, 1, 1), &[0; 4]);
        assert!(matches!(result, Err(PlaneError::GenericError(_))));
        assert!(is_image_path("out.PNG"));
        assert!(!is_image_path("out.raw"));
    }
}
