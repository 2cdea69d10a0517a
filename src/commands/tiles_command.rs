//! Tile-by-tile read command
//!
//! Reads every cache tile of a plane in row order with a progress bar,
//! optionally writing the tiles back to back into `--output`.

use std::fs::File;
use std::io::{BufWriter, Write};

use clap::ArgMatches;
use log::{debug, info};

use crate::api::PlaneKit;
use crate::commands::command_traits::Command;
use crate::commands::plane_args::{planekit_from_args, PlaneInput};
use crate::plane::{PlaneBuffer, PlaneResult};
use crate::utils::axis_parser::parse_dimensions;
use crate::utils::format_utils::human_bytes;
use crate::utils::logger::Logger;
use crate::utils::ProgressTracker;

/// Command reading a plane one cache tile at a time
pub struct TilesCommand<'a> {
    input: PlaneInput,
    proposed: Option<(i64, i64)>,
    output_file: Option<String>,
    verbose: bool,
    kit: PlaneKit,
    logger: &'a Logger,
}

impl<'a> TilesCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlaneResult<Self> {
        let input = PlaneInput::from_args(args)?;
        let proposed = match args.get_one::<String>("proposed") {
            Some(value) => Some(parse_dimensions(value)?),
            None => None,
        };

        Ok(TilesCommand {
            input,
            proposed,
            output_file: args.get_one::<String>("output").cloned(),
            verbose: args.get_flag("verbose"),
            kit: planekit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for TilesCommand<'a> {
    fn name(&self) -> &'static str {
        "tiles"
    }

    fn execute(&self) -> PlaneResult<()> {
        let layout = self.kit.tile_layout(&self.input.plane, self.proposed);
        let tile = layout.tile();
        info!(
            "Reading {} tiles of {}x{} from {}",
            layout.tile_count(),
            tile.width,
            tile.height,
            self.input.path
        );

        // Per-tile debug lines would break up the bar
        let progress = if self.verbose {
            ProgressTracker::hidden(layout.tile_count())
        } else {
            ProgressTracker::new(layout.tile_count(), "Reading tiles")
        };
        let mut writer = match &self.output_file {
            Some(path) => Some(BufWriter::new(File::create(path)?)),
            None => None,
        };

        let total = self.kit.for_each_tile(
            &self.input.path,
            self.input.offset,
            &self.input.plane,
            self.input.scanline_pad,
            &layout,
            |buffer| {
                debug!("Read tile {} ({} bytes)", buffer.region(), buffer.bytes().len());
                if let Some(writer) = writer.as_mut() {
                    writer.write_all(buffer.bytes())?;
                }
                progress.increment(1);
                Ok(())
            },
        )?;
        if let Some(mut writer) = writer {
            writer.flush()?;
        }
        progress.finish();

        info!("Read {} in {} tiles", human_bytes(total), progress.position());
        self.logger.log_summary(
            "Tiles",
            &[
                ("input", self.input.path.clone()),
                ("tile", format!("{}x{}", tile.width, tile.height)),
                ("tiles", layout.tile_count().to_string()),
                ("bytes", total.to_string()),
            ],
        )?;

        Ok(())
    }
}
