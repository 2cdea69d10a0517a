//! Cache tile sizing and tile grids

mod optimizer;
mod layout;
#[cfg(test)]
mod tests;

pub use optimizer::{optimal_tile, TileGeometry, TileSizeOptimizer, SOFT_CAP_BYTES, TILE_BUDGET_BYTES};
pub use layout::TileLayout;
