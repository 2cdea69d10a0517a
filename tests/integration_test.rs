//! Integration tests for the plane pipeline

extern crate std;

use std::io::Cursor;

use byteorder::{BigEndian, WriteBytesExt};

use planekit::axes::compress_axes;
use planekit::extractor::{Region, RegionReader};
use planekit::io::{ByteOrder, PlaneCursor};
use planekit::plane::{ImageEntry, ImageMetadata, InMemoryMetadata, PixelType, PlaneBuffer};
use planekit::tiling::{TileGeometry, TileLayout, TileSizeOptimizer};
use planekit::utils::config::PlaneKitConfig;
use planekit::{AxisLabel, CanonicalOrder, PlaneError, PlaneKit};

const WIDTH: u32 = 40;
const HEIGHT: u32 = 30;
const CHANNELS: u32 = 3;
const PAD: u32 = 2;

fn value(channel: u32, row: u32, col: u32) -> u16 {
    (channel * 10000 + row * 100 + col) as u16
}

/// Big-endian uint16, planar channels, two pad pixels per row
fn build_stream() -> Vec<u8> {
    let mut buffer = Vec::new();
    for channel in 0..CHANNELS {
        for row in 0..HEIGHT {
            for col in 0..WIDTH + PAD {
                let v = if col < WIDTH { value(channel, row, col) } else { 0xFFFF };
                buffer.write_u16::<BigEndian>(v).unwrap();
            }
        }
    }
    buffer
}

#[test]
fn test_complete_plane_workflow() {
    // Five lambda steps folded into a free axis, channels stored per plane
    let axes = [AxisLabel::X, AxisLabel::Y, AxisLabel::Unknown, AxisLabel::Channel];
    let lengths = [WIDTH as u64, HEIGHT as u64, 5, CHANNELS as u64];
    let order = compress_axes(&axes, &lengths).unwrap();
    std::assert_eq!(order.dimension_order(), "XYZCT");

    let mut metadata = InMemoryMetadata::new();
    let entry = ImageEntry {
        little_endian: false,
        ..ImageEntry::from_order(order, PixelType::Uint16).with_rgb(CHANNELS, false)
    };
    let index = metadata.add_image(entry);
    std::assert_eq!(metadata.plane_count(index).unwrap(), 5);

    let plane = metadata.plane_descriptor(index).unwrap();
    std::assert_eq!(plane.width, WIDTH);
    std::assert_eq!(plane.height, HEIGHT);
    std::assert!(!plane.little_endian);

    // A small budget forces several tiles
    let optimizer = TileSizeOptimizer::new(256, 480);
    let proposed = optimizer.default_tile(&plane);
    std::assert_eq!(proposed, TileGeometry::new(40, 1));
    let tile = optimizer.optimal_tile_for(&plane, proposed);
    std::assert_eq!(tile, TileGeometry::new(40, 6));

    let layout = TileLayout::new(plane.width, plane.height, tile);
    std::assert_eq!(layout.tile_count(), 5);

    let stream = build_stream();
    let handler = ByteOrder::from_little_endian(plane.little_endian).create_handler();
    let mut seen = 0u32;

    for region in layout.regions() {
        let cursor = PlaneCursor::new(Cursor::new(&stream[..]));
        let mut reader = RegionReader::new(cursor);
        let buffer = reader.read_region(&plane, region, PAD).unwrap();
        std::assert_eq!(buffer.region(), region);

        let samples = handler.decode_u16(buffer.bytes());
        let per_channel = (region.width * region.height) as usize;
        std::assert_eq!(samples.len(), per_channel * CHANNELS as usize);

        for channel in 0..CHANNELS {
            for row in 0..region.height {
                for col in 0..region.width {
                    let at = channel as usize * per_channel + (row * region.width + col) as usize;
                    std::assert_eq!(samples[at], value(channel, region.y + row, region.x + col));
                }
            }
        }
        seen += region.height;
    }
    std::assert_eq!(seen, HEIGHT);
}

#[test]
fn test_facade_reads_file_regions() {
    let path = std::env::temp_dir().join(format!("planekit-integration-{}.raw", std::process::id()));
    let mut contents = vec![0u8; 16];
    contents.extend(build_stream());
    std::fs::write(&path, contents).unwrap();
    let path_str = path.to_string_lossy().to_string();

    let kit = PlaneKit::new(PlaneKitConfig::default());
    let plane = planekit::PlaneDescriptor::new(WIDTH, HEIGHT, PixelType::Uint16)
        .with_channels(CHANNELS, false)
        .with_little_endian(false);

    let region = Region::new(5, 7, 4, 3);
    let buffer = kit.extract_region(&path_str, 16, &plane, region, PAD).unwrap();
    let samples = ByteOrder::BigEndian.create_handler().decode_u16(buffer.bytes());
    std::assert_eq!(samples[0], value(0, 7, 5));
    std::assert_eq!(samples[11], value(0, 9, 8));
    std::assert_eq!(samples[12], value(1, 7, 5));
    std::assert_eq!(samples[35], value(2, 9, 8));

    // The file cursor lands exactly where the row-by-row read left off
    let mut reader = kit.open_plane(&path_str, 16).unwrap();
    reader.read_region(&plane, region, PAD).unwrap();
    let consumed = reader.source().consumed();
    std::assert_eq!(reader.source_mut().position().unwrap(), 16 + consumed);

    let layout = kit.tile_layout(&plane, Some((8, 8)));
    std::assert_eq!(layout.tile(), TileGeometry::new(WIDTH, HEIGHT));
    let mut tiles = 0;
    let total = kit
        .for_each_tile(&path_str, 16, &plane, PAD, &layout, |_| {
            tiles += 1;
            Ok(())
        })
        .unwrap();
    std::assert_eq!(tiles, 1);
    std::assert_eq!(total, (WIDTH * HEIGHT * CHANNELS * 2) as u64);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_tile_layout_from_metadata() {
    let order = CanonicalOrder::xyzct(4096, 4096, 1, 1, 1).unwrap();
    let mut metadata = InMemoryMetadata::new();
    let index = metadata.add_image(ImageEntry::from_order(order, PixelType::Uint16));

    let kit = PlaneKit::default();
    let layout = kit.tile_layout_for(&metadata, index).unwrap();
    // 128 full rows fit the 1 MiB proposal, doubled to fill the 2 MiB budget
    std::assert_eq!(layout.tile(), TileGeometry::new(4096, 256));
    std::assert_eq!(layout.tiles_across(), 1);
    std::assert_eq!(layout.tiles_down(), 16);

    std::assert!(matches!(
        kit.tile_layout_for(&metadata, index + 1),
        Err(PlaneError::ImageIndexOutOfRange { .. })
    ));
}
