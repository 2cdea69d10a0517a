//! Tests for cache tile sizing

use crate::plane::{PixelType, PlaneDescriptor};
use crate::tiling::{optimal_tile, TileGeometry, TileSizeOptimizer, SOFT_CAP_BYTES, TILE_BUDGET_BYTES};

fn check(plane: (u32, u32), bpp: u32, proposed: (i64, i64), expected: (u32, u32)) {
    let tile = optimal_tile(plane.0, plane.1, bpp, proposed.0, proposed.1);
    assert_eq!(
        tile,
        TileGeometry::new(expected.0, expected.1),
        "plane {:?} bpp {} proposed {:?}",
        plane,
        bpp,
        proposed
    );
}

#[test]
fn test_budget_constants() {
    assert_eq!(SOFT_CAP_BYTES, 1_048_576);
    assert_eq!(TILE_BUDGET_BYTES, 2_097_152);
    let optimizer = TileSizeOptimizer::default();
    assert_eq!(optimizer.soft_cap_bytes(), SOFT_CAP_BYTES);
    assert_eq!(optimizer.tile_budget_bytes(), TILE_BUDGET_BYTES);
}

#[test]
fn test_small_plane_is_one_tile() {
    let min = i32::MIN as i64;
    let max = i32::MAX as i64;
    for proposed in [(128, 128), (0, 0), (-1, -1), (min, max), (max, min)] {
        check((13, 17), 1, proposed, (13, 17));
    }
}

#[test]
fn test_odd_plane_grows_to_full_rows() {
    check((2468, 1817), 1, (440, 510), (2468, 510));
}

#[test]
fn test_plane_within_budget() {
    for bpp in [1, 2] {
        for proposed in [(512, 512), (1, 1), (512, 16), (16, 512), (16, 16), (511, 15), (16, 15), (0, 7)] {
            check((512, 512), bpp, proposed, (512, 512));
        }
    }
}

#[test]
fn test_large_plane_one_byte() {
    check((4096, 4096), 1, (512, 512), (4096, 512));
    check((4096, 4096), 1, (512, 16), (4096, 512));
    check((4096, 4096), 1, (16, 512), (4096, 512));
    check((4096, 4096), 1, (1, 4096), (512, 4096));
    check((4096, 4096), 1, (4096, 1), (4096, 512));
    check((4096, 4096), 1, (16, 16), (4096, 512));
}

#[test]
fn test_large_plane_two_bytes() {
    check((4096, 4096), 2, (512, 512), (2048, 512));
    check((4096, 4096), 2, (512, 16), (4096, 256));
    check((4096, 4096), 2, (16, 512), (2048, 512));
    check((4096, 4096), 2, (1, 4096), (256, 4096));
    check((4096, 4096), 2, (4096, 1), (4096, 256));
    check((4096, 4096), 2, (16, 16), (4096, 256));
}

#[test]
fn test_oversized_proposal_is_not_shrunk() {
    // A single full plane of 4096 rows at 8 bytes is far over budget
    check((4096, 4096), 8, (4096, 4096), (4096, 4096));
}

#[test]
fn test_result_stays_inside_plane() {
    let planes = [(1, 1), (3, 1000), (1000, 3), (777, 333), (70000, 70000)];
    let proposals = [(1, 1), (7, 3), (0, 100), (100, 0), (-5, 9), (i64::MAX, 2), (2, i64::MIN)];
    for &(w, h) in &planes {
        for bpp in [1, 2, 4, 8] {
            for &(pw, ph) in &proposals {
                let tile = optimal_tile(w, h, bpp, pw, ph);
                assert!(tile.width >= 1 && tile.width <= w);
                assert!(tile.height >= 1 && tile.height <= h);
                // Height only grows once rows are complete
                if tile.width < w {
                    let expected_h = if ph <= 0 || ph as u64 > h as u64 { h } else { ph as u32 };
                    assert_eq!(tile.height, expected_h);
                }
            }
        }
    }
}

#[test]
fn test_custom_budget() {
    let optimizer = TileSizeOptimizer::new(1024, 4096);
    let tile = optimizer.optimal_tile(256, 256, 1, 16, 16);
    assert_eq!(tile, TileGeometry::new(256, 16));
    let tile = optimizer.optimal_tile(256, 256, 1, 8, 1);
    assert_eq!(tile, TileGeometry::new(256, 16));
}

#[test]
fn test_default_tile_uses_soft_cap() {
    let optimizer = TileSizeOptimizer::default();

    let gray = PlaneDescriptor::new(4096, 4096, PixelType::Uint8);
    assert_eq!(optimizer.default_tile(&gray), TileGeometry::new(4096, 256));

    let rgb = PlaneDescriptor::new(4096, 4096, PixelType::Uint8).with_channels(3, true);
    assert_eq!(optimizer.default_tile(&rgb), TileGeometry::new(4096, 85));

    let wide = PlaneDescriptor::new(1 << 20, 4, PixelType::Double).with_channels(3, false);
    assert_eq!(optimizer.default_tile(&wide), TileGeometry::new(1 << 20, 1));

    let small = PlaneDescriptor::new(10, 10, PixelType::Uint16);
    assert_eq!(optimizer.default_tile(&small), TileGeometry::new(10, 10));
}

#[test]
fn test_optimal_tile_for_descriptor() {
    let optimizer = TileSizeOptimizer::default();
    let plane = PlaneDescriptor::new(4096, 4096, PixelType::Int16);
    let proposed = optimizer.default_tile(&plane);
    assert_eq!(proposed, TileGeometry::new(4096, 128));
    assert_eq!(optimizer.optimal_tile_for(&plane, proposed), TileGeometry::new(4096, 256));
}
