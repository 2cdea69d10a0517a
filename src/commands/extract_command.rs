//! Region extraction command
//!
//! Reads one region of a raw plane and writes it either as raw bytes in
//! the stored layout or, for `.png`/`.tif` outputs, as an image.

use std::fs;

use clap::ArgMatches;
use log::info;

use crate::api::PlaneKit;
use crate::commands::command_traits::Command;
use crate::commands::plane_args::{planekit_from_args, PlaneInput};
use crate::extractor::Region;
use crate::plane::{PlaneBuffer, PlaneError, PlaneResult};
use crate::utils::axis_parser::parse_region;
use crate::utils::format_utils::{describe_plane, human_bytes};
use crate::utils::image_utils::{is_image_path, save_region_image};
use crate::utils::logger::Logger;

/// Command for extracting a region of a raw plane
pub struct ExtractCommand<'a> {
    input: PlaneInput,
    /// Region to read; the whole plane when not given
    region: Region,
    output_file: String,
    kit: PlaneKit,
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlaneResult<Self> {
        info!("Creating new extract command from arguments");

        let input = PlaneInput::from_args(args)?;
        let region = match args.get_one::<String>("region") {
            Some(value) => {
                let [x, y, width, height] = parse_region(value)?;
                Region::new(x, y, width, height)
            }
            None => Region::full(&input.plane),
        };
        info!("Region: {}", region);

        let output_file = args
            .get_one::<String>("output")
            .ok_or_else(|| PlaneError::GenericError("Missing output file path for extraction".to_string()))?
            .clone();
        info!("Output file: {}", output_file);

        Ok(ExtractCommand {
            input,
            region,
            output_file,
            kit: planekit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn execute(&self) -> PlaneResult<()> {
        info!("Extracting {} from {}", self.region, describe_plane(&self.input.plane));

        let buffer = self.kit.extract_region(
            &self.input.path,
            self.input.offset,
            &self.input.plane,
            self.region,
            self.input.scanline_pad,
        )?;

        if is_image_path(&self.output_file) {
            save_region_image(&self.input.plane, self.region, buffer.bytes(), &self.output_file)?;
        } else {
            fs::write(&self.output_file, buffer.bytes())?;
        }

        info!("Wrote {} to {}", human_bytes(buffer.bytes().len() as u64), self.output_file);
        self.logger.log_summary(
            "Extraction",
            &[
                ("input", self.input.path.clone()),
                ("plane", describe_plane(&self.input.plane)),
                ("region", self.region.to_string()),
                ("bytes", buffer.bytes().len().to_string()),
                ("output", self.output_file.clone()),
            ],
        )?;

        Ok(())
    }
}
