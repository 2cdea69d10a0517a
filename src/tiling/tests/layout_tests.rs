use crate::extractor::Region;
use crate::tiling::{TileGeometry, TileLayout};

#[test]
fn test_grid_with_clipped_edges() {
    let layout = TileLayout::new(2468, 1817, TileGeometry::new(2468, 510));
    assert_eq!(layout.tiles_across(), 1);
    assert_eq!(layout.tiles_down(), 4);
    assert_eq!(layout.tile_count(), 4);
    assert_eq!(layout.tile_region(0, 0), Some(Region::new(0, 0, 2468, 510)));
    assert_eq!(layout.tile_region(0, 3), Some(Region::new(0, 1530, 2468, 287)));
    assert_eq!(layout.tile_region(1, 0), None);
    assert_eq!(layout.tile_region(0, 4), None);
}

#[test]
fn test_regions_cover_plane_once() {
    let layout = TileLayout::new(10, 7, TileGeometry::new(4, 3));
    assert_eq!(layout.tiles_across(), 3);
    assert_eq!(layout.tiles_down(), 3);

    let regions: Vec<Region> = layout.regions().collect();
    assert_eq!(regions.len() as u64, layout.tile_count());
    assert_eq!(regions[0], Region::new(0, 0, 4, 3));
    assert_eq!(regions[2], Region::new(8, 0, 2, 3));
    assert_eq!(regions[8], Region::new(8, 6, 2, 1));

    let mut covered = vec![0u8; 70];
    for region in &regions {
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                covered[(y * 10 + x) as usize] += 1;
            }
        }
    }
    assert!(covered.iter().all(|&c| c == 1));
}

#[test]
fn test_zero_tile_treated_as_unit() {
    let layout = TileLayout::new(3, 2, TileGeometry::new(0, 0));
    assert_eq!(layout.tile(), TileGeometry::new(1, 1));
    assert_eq!(layout.tile_count(), 6);
}
