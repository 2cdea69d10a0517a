//! Tests for descriptors and the in-memory metadata

use crate::axes::{compress, AxisLabel};
use crate::plane::{
    ImageEntry, ImageMetadata, InMemoryMetadata, PixelType, PlaneDescriptor, PlaneError,
};

#[test]
fn test_pixel_type_sizes_and_names() {
    std::assert_eq!(PixelType::Uint8.bytes_per_pixel(), 1);
    std::assert_eq!(PixelType::Int16.bytes_per_pixel(), 2);
    std::assert_eq!(PixelType::Float.bytes_per_pixel(), 4);
    std::assert_eq!(PixelType::Double.bytes_per_pixel(), 8);

    std::assert_eq!("UINT16".parse::<PixelType>().unwrap(), PixelType::Uint16);
    std::assert_eq!("f64".parse::<PixelType>().unwrap(), PixelType::Double);
    std::assert!("rgb".parse::<PixelType>().is_err());
}

#[test]
fn test_plane_bytes_includes_pad() {
    let plane = PlaneDescriptor::new(10, 4, PixelType::Uint16).with_channels(3, true);
    std::assert_eq!(plane.plane_bytes(0), Some(240));
    std::assert_eq!(plane.plane_bytes(2), Some(288));
}

#[test]
fn test_descriptor_from_compressed_order() {
    let axes = [AxisLabel::X, AxisLabel::Y, AxisLabel::Unknown, AxisLabel::Channel];
    let order = compress(&axes, &[64, 32, 5, 3]).unwrap();

    let mut meta = InMemoryMetadata::new();
    let index = meta.add_image(ImageEntry::from_order(order, PixelType::Uint16).with_rgb(3, true));

    let plane = meta.plane_descriptor(index).unwrap();
    std::assert_eq!(plane.width, 64);
    std::assert_eq!(plane.height, 32);
    std::assert_eq!(plane.bytes_per_pixel(), 2);
    std::assert_eq!(plane.rgb_channel_count, 3);
    std::assert!(plane.interleaved);

    // Z holds the folded unknown axis; three RGB channels make one plane
    std::assert_eq!(meta.plane_count(index).unwrap(), 5);
}

#[test]
fn test_unknown_image_index() {
    let meta = InMemoryMetadata::new();
    match meta.plane_descriptor(2) {
        Err(PlaneError::ImageIndexOutOfRange { index, count }) => {
            std::assert_eq!(index, 2);
            std::assert_eq!(count, 0);
        }
        other => std::panic!("unexpected result: {:?}", other),
    }
}
