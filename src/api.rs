use std::fs::File;

use log::{debug, info};

use crate::axes::{compress_axes, AxisLabel, CanonicalOrder};
use crate::extractor::{Region, RegionReader};
use crate::io::PlaneCursor;
use crate::plane::{
    ByteArrayPlane, ImageEntry, ImageMetadata, PixelType, PlaneBuffer, PlaneDescriptor, PlaneResult,
};
use crate::tiling::{TileGeometry, TileLayout, TileSizeOptimizer};
use crate::utils::config::PlaneKitConfig;

/// Region reader over a raw plane file
///
/// Unbuffered, since every skip between rows is a relative seek.
pub type FileRegionReader = RegionReader<PlaneCursor<File>>;

/// Main interface to the planekit library
///
/// Bundles the configured budgets with the region reader, the axis
/// compressor and the tile optimizer.
#[derive(Debug, Clone, Default)]
pub struct PlaneKit {
    config: PlaneKitConfig,
}

impl PlaneKit {
    pub fn new(config: PlaneKitConfig) -> Self {
        PlaneKit { config }
    }

    /// Defaults overridden by a TOML file
    pub fn from_config_file(path: &str) -> PlaneResult<Self> {
        Ok(PlaneKit::new(PlaneKitConfig::from_file(path)?))
    }

    pub fn config(&self) -> &PlaneKitConfig {
        &self.config
    }

    pub fn optimizer(&self) -> TileSizeOptimizer {
        self.config.optimizer()
    }

    /// Open a region reader positioned at the plane starting at `offset`
    pub fn open_plane(&self, path: &str, offset: u64) -> PlaneResult<FileRegionReader> {
        let file = File::open(path)?;
        debug!("Opened {} at plane offset {}", path, offset);
        let cursor = PlaneCursor::at_offset(file, offset)?;
        Ok(RegionReader::new(cursor).with_max_region_bytes(self.config.max_region_bytes))
    }

    /// Read one region of the plane starting at `offset` in `path`
    pub fn extract_region(
        &self,
        path: &str,
        offset: u64,
        plane: &PlaneDescriptor,
        region: Region,
        scanline_pad: u32,
    ) -> PlaneResult<ByteArrayPlane> {
        let mut reader = self.open_plane(path, offset)?;
        let buffer = reader.read_region(plane, region, scanline_pad)?;
        info!("Extracted {} ({} bytes) from {}", region, buffer.bytes().len(), path);
        Ok(buffer)
    }

    /// Fold an axis layout into the canonical five-axis order
    pub fn compress_axes(&self, axes: &[AxisLabel], lengths: &[u64]) -> PlaneResult<CanonicalOrder> {
        compress_axes(axes, lengths)
    }

    /// Image metadata entry for an axis layout, compressing it first
    pub fn image_entry(
        &self,
        axes: &[AxisLabel],
        lengths: &[u64],
        pixel_type: PixelType,
    ) -> PlaneResult<ImageEntry> {
        Ok(ImageEntry::from_order(self.compress_axes(axes, lengths)?, pixel_type))
    }

    /// Cache tile for `plane`, starting from `proposed` or the default proposal
    pub fn optimal_tile(&self, plane: &PlaneDescriptor, proposed: Option<(i64, i64)>) -> TileGeometry {
        let optimizer = self.optimizer();
        match proposed {
            Some((w, h)) => optimizer.optimal_tile(plane.width, plane.height, plane.bytes_per_pixel(), w, h),
            None => optimizer.optimal_tile_for(plane, optimizer.default_tile(plane)),
        }
    }

    /// Tile grid for `plane` using `optimal_tile`
    pub fn tile_layout(&self, plane: &PlaneDescriptor, proposed: Option<(i64, i64)>) -> TileLayout {
        TileLayout::new(plane.width, plane.height, self.optimal_tile(plane, proposed))
    }

    /// Tile grid for image `image_index` of `metadata`
    pub fn tile_layout_for<M: ImageMetadata + ?Sized>(
        &self,
        metadata: &M,
        image_index: usize,
    ) -> PlaneResult<TileLayout> {
        let plane = metadata.plane_descriptor(image_index)?;
        Ok(self.tile_layout(&plane, None))
    }

    /// Read every tile of the plane at `offset`, in row order
    ///
    /// `visit` receives each tile as it is read; the stream is rewound to
    /// the plane start before every tile.
    pub fn for_each_tile<F>(
        &self,
        path: &str,
        offset: u64,
        plane: &PlaneDescriptor,
        scanline_pad: u32,
        layout: &TileLayout,
        mut visit: F,
    ) -> PlaneResult<u64>
    where
        F: FnMut(&ByteArrayPlane) -> PlaneResult<()>,
    {
        let mut reader = self.open_plane(path, offset)?;
        let mut total = 0u64;
        for region in layout.regions() {
            let tile = reader.read_region(plane, region, scanline_pad)?;
            total += tile.bytes().len() as u64;
            visit(&tile)?;
            let file = reader.into_inner().into_inner();
            reader = RegionReader::new(PlaneCursor::at_offset(file, offset)?)
                .with_max_region_bytes(self.config.max_region_bytes);
        }
        Ok(total)
    }
}
