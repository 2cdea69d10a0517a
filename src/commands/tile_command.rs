//! Cache tile sizing command

use clap::ArgMatches;
use log::info;

use crate::api::PlaneKit;
use crate::commands::command_traits::Command;
use crate::commands::plane_args::{plane_from_args, planekit_from_args};
use crate::plane::{PlaneDescriptor, PlaneResult};
use crate::utils::axis_parser::parse_dimensions;
use crate::utils::format_utils::{describe_plane, human_bytes};
use crate::utils::logger::Logger;

/// Command printing the cache tile chosen for a plane
pub struct TileCommand<'a> {
    plane: PlaneDescriptor,
    /// Proposed tile, or the reader's default proposal when absent
    proposed: Option<(i64, i64)>,
    kit: PlaneKit,
    logger: &'a Logger,
}

impl<'a> TileCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlaneResult<Self> {
        let plane = plane_from_args(args)?;
        let proposed = match args.get_one::<String>("proposed") {
            Some(value) => Some(parse_dimensions(value)?),
            None => None,
        };

        Ok(TileCommand {
            plane,
            proposed,
            kit: planekit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for TileCommand<'a> {
    fn name(&self) -> &'static str {
        "tile"
    }

    fn execute(&self) -> PlaneResult<()> {
        let layout = self.kit.tile_layout(&self.plane, self.proposed);
        let tile = layout.tile();
        let tile_bytes = tile.width as u64 * tile.height as u64 * self.plane.bytes_per_pixel() as u64;
        let proposed = match self.proposed {
            Some((w, h)) => format!("{}x{}", w, h),
            None => {
                let default = self.kit.optimizer().default_tile(&self.plane);
                format!("{}x{} (default)", default.width, default.height)
            }
        };

        info!("Plane: {}", describe_plane(&self.plane));
        info!("  Proposed tile: {}", proposed);
        info!("  Optimal tile: {}x{} ({} per channel)", tile.width, tile.height, human_bytes(tile_bytes));
        info!(
            "  Grid: {} x {} = {} tiles",
            layout.tiles_across(),
            layout.tiles_down(),
            layout.tile_count()
        );

        self.logger.log_summary(
            "Tile",
            &[
                ("plane", describe_plane(&self.plane)),
                ("proposed", proposed),
                ("tile", format!("{}x{}", tile.width, tile.height)),
                ("tiles", layout.tile_count().to_string()),
            ],
        )?;

        Ok(())
    }
}
