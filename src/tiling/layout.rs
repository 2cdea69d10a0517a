//! Tile grid over a plane

use crate::extractor::Region;

use super::optimizer::TileGeometry;

/// Grid of equally sized tiles covering a plane; edge tiles are clipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    plane_width: u32,
    plane_height: u32,
    tile: TileGeometry,
}

impl TileLayout {
    /// Zero tile dimensions are treated as 1
    pub fn new(plane_width: u32, plane_height: u32, tile: TileGeometry) -> Self {
        TileLayout {
            plane_width,
            plane_height,
            tile: TileGeometry::new(tile.width.max(1), tile.height.max(1)),
        }
    }

    pub fn tile(&self) -> TileGeometry {
        self.tile
    }

    pub fn tiles_across(&self) -> u32 {
        (self.plane_width as u64).div_ceil(self.tile.width as u64) as u32
    }

    pub fn tiles_down(&self) -> u32 {
        (self.plane_height as u64).div_ceil(self.tile.height as u64) as u32
    }

    pub fn tile_count(&self) -> u64 {
        self.tiles_across() as u64 * self.tiles_down() as u64
    }

    /// Region of the tile at column `col`, row `row`, or `None` outside the grid
    pub fn tile_region(&self, col: u32, row: u32) -> Option<Region> {
        if col >= self.tiles_across() || row >= self.tiles_down() {
            return None;
        }
        let x = col * self.tile.width;
        let y = row * self.tile.height;
        let width = self.tile.width.min(self.plane_width - x);
        let height = self.tile.height.min(self.plane_height - y);
        Some(Region::new(x, y, width, height))
    }

    /// Every tile region, row by row
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        let across = self.tiles_across();
        (0..self.tiles_down()).flat_map(move |row| {
            (0..across).filter_map(move |col| self.tile_region(col, row))
        })
    }
}
