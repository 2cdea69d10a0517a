pub mod io;
pub mod plane;
pub mod extractor;
pub mod axes;
pub mod tiling;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::PlaneKit;

pub use plane::{PixelType, PlaneDescriptor, PlaneError, PlaneResult};
pub use extractor::{Region, RegionReader};
pub use axes::{compress, AxisLabel, CanonicalOrder};
pub use tiling::{optimal_tile, TileGeometry, TileLayout, TileSizeOptimizer};
