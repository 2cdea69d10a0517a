//! Cache tile sizing
//!
//! Lazily loaded cell images cache one tile per cell. Tiles that are too
//! small cause many tiny reads, tiles that are too large waste memory. The
//! optimizer starts from a proposed tile (usually the format's native tile)
//! and grows it, first across the plane and then down, until the tile
//! either spans the plane or reaches the byte budget.
//!
//! Channel count is not part of the computation: channels are expected to
//! be split into separate planes before they reach the cache.

use log::{debug, warn};

use crate::plane::PlaneDescriptor;

/// Byte budget a reader uses when proposing its own tile height
pub const SOFT_CAP_BYTES: u64 = 1024 * 1024;

/// Largest number of bytes one cache tile may hold
pub const TILE_BUDGET_BYTES: u64 = 2 * 1024 * 1024;

/// Width and height of a cache tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGeometry {
    pub width: u32,
    pub height: u32,
}

impl TileGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        TileGeometry { width, height }
    }
}

/// Tile sizing with configurable budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSizeOptimizer {
    soft_cap_bytes: u64,
    tile_budget_bytes: u64,
}

impl Default for TileSizeOptimizer {
    fn default() -> Self {
        TileSizeOptimizer {
            soft_cap_bytes: SOFT_CAP_BYTES,
            tile_budget_bytes: TILE_BUDGET_BYTES,
        }
    }
}

impl TileSizeOptimizer {
    pub fn new(soft_cap_bytes: u64, tile_budget_bytes: u64) -> Self {
        TileSizeOptimizer {
            soft_cap_bytes: soft_cap_bytes.max(1),
            tile_budget_bytes: tile_budget_bytes.max(1),
        }
    }

    pub fn soft_cap_bytes(&self) -> u64 {
        self.soft_cap_bytes
    }

    pub fn tile_budget_bytes(&self) -> u64 {
        self.tile_budget_bytes
    }

    /// Tile a reader proposes for `plane` when the format has no native tiling
    ///
    /// Full rows, as many as fit in the soft cap with all channels, at
    /// least one.
    pub fn default_tile(&self, plane: &PlaneDescriptor) -> TileGeometry {
        let width = plane.width.max(1);
        let height = plane.height.max(1);
        let row_bytes = (width as u64)
            .saturating_mul(plane.rgb_channel_count.max(1) as u64)
            .saturating_mul(plane.bytes_per_pixel() as u64);
        let rows = (self.soft_cap_bytes / row_bytes).clamp(1, height as u64);
        TileGeometry::new(width, rows as u32)
    }

    /// Final tile for a plane, starting from a proposed tile
    ///
    /// Total over all inputs: non-positive or oversized proposals are
    /// replaced by the plane dimension, and the result always satisfies
    /// `1 <= width <= plane_width` and `1 <= height <= plane_height`.
    /// A proposal larger than the budget is kept as is; it is never shrunk.
    pub fn optimal_tile(
        &self,
        plane_width: u32,
        plane_height: u32,
        bytes_per_pixel: u32,
        proposed_width: i64,
        proposed_height: i64,
    ) -> TileGeometry {
        let plane_w = plane_width.max(1) as u64;
        let plane_h = plane_height.max(1) as u64;
        let bpp = bytes_per_pixel.max(1) as u64;
        let tile_w = clamp_proposal(proposed_width, plane_w, "width");
        let tile_h = clamp_proposal(proposed_height, plane_h, "height");
        let budget = self.tile_budget_bytes;

        // Horizontal expansion in whole multiples of the proposed width
        let width = if plane_w.saturating_mul(tile_h).saturating_mul(bpp) <= budget {
            plane_w
        } else {
            let tile_bytes = tile_w.saturating_mul(tile_h).saturating_mul(bpp);
            let across = (budget / tile_bytes).max(1);
            tile_w.saturating_mul(across).min(plane_w)
        };

        // Vertical expansion only once rows are complete
        let height = if width < plane_w {
            tile_h
        } else if width.saturating_mul(plane_h).saturating_mul(bpp) <= budget {
            plane_h
        } else {
            let band_bytes = width.saturating_mul(tile_h).saturating_mul(bpp);
            let down = (budget / band_bytes).max(1);
            tile_h.saturating_mul(down).min(plane_h)
        };

        debug!(
            "Tile for {}x{} plane ({} bytes/pixel): proposed {}x{}, chose {}x{}",
            plane_w, plane_h, bpp, proposed_width, proposed_height, width, height
        );

        TileGeometry::new(width as u32, height as u32)
    }

    /// `optimal_tile` for a descriptor
    pub fn optimal_tile_for(&self, plane: &PlaneDescriptor, proposed: TileGeometry) -> TileGeometry {
        self.optimal_tile(
            plane.width,
            plane.height,
            plane.bytes_per_pixel(),
            proposed.width as i64,
            proposed.height as i64,
        )
    }
}

fn clamp_proposal(proposed: i64, limit: u64, what: &str) -> u64 {
    if proposed <= 0 || proposed as u64 > limit {
        if proposed <= 0 {
            warn!("Ignoring non-positive tile {} {}", what, proposed);
        }
        limit
    } else {
        proposed as u64
    }
}

/// Final tile for a plane using the default budgets
pub fn optimal_tile(
    plane_width: u32,
    plane_height: u32,
    bytes_per_pixel: u32,
    proposed_width: i64,
    proposed_height: i64,
) -> TileGeometry {
    TileSizeOptimizer::default().optimal_tile(
        plane_width,
        plane_height,
        bytes_per_pixel,
        proposed_width,
        proposed_height,
    )
}
