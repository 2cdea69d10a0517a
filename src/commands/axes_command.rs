//! Axis compression command
//!
//! Folds an axis list such as `X:512,Y:512,U:5,Time:4` into the canonical
//! five-axis order and reports the resulting plane count.

use clap::ArgMatches;
use log::info;

use crate::api::PlaneKit;
use crate::axes::{describe, needs_compression, AxisLabel};
use crate::commands::command_traits::Command;
use crate::commands::plane_args::planekit_from_args;
use crate::plane::{ImageMetadata, InMemoryMetadata, PixelType, PlaneError, PlaneResult};
use crate::utils::axis_parser::parse_axis_list;
use crate::utils::logger::Logger;

/// Command for compressing an axis layout
pub struct AxesCommand<'a> {
    labels: Vec<AxisLabel>,
    lengths: Vec<u64>,
    pixel_type: PixelType,
    kit: PlaneKit,
    logger: &'a Logger,
}

impl<'a> AxesCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlaneResult<Self> {
        let list = args
            .get_one::<String>("axes")
            .ok_or_else(|| PlaneError::GenericError("Missing axis list".to_string()))?;
        let (labels, lengths) = parse_axis_list(list)?;
        let pixel_type = match args.get_one::<String>("pixel-type") {
            Some(name) => name.parse()?,
            None => PixelType::Uint8,
        };

        Ok(AxesCommand {
            labels,
            lengths,
            pixel_type,
            kit: planekit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for AxesCommand<'a> {
    fn name(&self) -> &'static str {
        "axes"
    }

    fn execute(&self) -> PlaneResult<()> {
        let layout = describe(&self.labels, &self.lengths);
        info!("Axis layout: {}", layout);
        info!(
            "  Compression needed: {}",
            if needs_compression(&self.labels, &self.lengths) { "yes" } else { "no" }
        );

        let entry = self.kit.image_entry(&self.labels, &self.lengths, self.pixel_type)?;
        let order = entry.order;
        let mut metadata = InMemoryMetadata::new();
        let index = metadata.add_image(entry);
        let planes = metadata.plane_count(index)?;

        info!("  Dimension order: {}", order);
        info!(
            "  Sizes: X={} Y={} Z={} C={} T={}",
            order.size_x(),
            order.size_y(),
            order.size_z(),
            order.size_c(),
            order.size_t()
        );
        info!("  Planes: {}", planes);

        self.logger.log_summary(
            "Axes",
            &[
                ("layout", layout),
                ("order", order.dimension_order()),
                ("lengths", format!("{:?}", order.lengths())),
                ("planes", planes.to_string()),
            ],
        )?;

        Ok(())
    }
}
