//! Plane arguments shared by the commands
//!
//! A raw plane file has no header, so its geometry comes from the command
//! line: `--width`, `--height`, `--pixel-type`, `--channels`,
//! `--interleaved`, `--big-endian`, plus `--offset` and `--pad` locating the
//! plane inside the file.

use clap::ArgMatches;
use log::info;

use crate::api::PlaneKit;
use crate::plane::{PixelType, PlaneDescriptor, PlaneError, PlaneResult};

/// Raw plane location and layout taken from CLI arguments
#[derive(Debug, Clone)]
pub struct PlaneInput {
    /// Path to the raw plane file
    pub path: String,
    pub plane: PlaneDescriptor,
    /// Byte offset of the first plane byte
    pub offset: u64,
    /// Padding pixels after every row
    pub scanline_pad: u32,
}

impl PlaneInput {
    pub fn from_args(args: &ArgMatches) -> PlaneResult<Self> {
        let path = args
            .get_one::<String>("input")
            .ok_or_else(|| PlaneError::GenericError("Missing input file".to_string()))?
            .clone();
        let plane = plane_from_args(args)?;
        let offset = parse_number::<u64>(args, "offset")?.unwrap_or(0);
        let scanline_pad = parse_number::<u32>(args, "pad")?.unwrap_or(0);
        info!("Input file: {} at offset {} (pad {})", path, offset, scanline_pad);

        Ok(PlaneInput { path, plane, offset, scanline_pad })
    }
}

/// Plane descriptor from the geometry arguments
pub fn plane_from_args(args: &ArgMatches) -> PlaneResult<PlaneDescriptor> {
    let width = parse_number::<u32>(args, "width")?
        .ok_or_else(|| PlaneError::GenericError("Missing --width".to_string()))?;
    let height = parse_number::<u32>(args, "height")?
        .ok_or_else(|| PlaneError::GenericError("Missing --height".to_string()))?;
    let pixel_type = match args.get_one::<String>("pixel-type") {
        Some(name) => name.parse::<PixelType>()?,
        None => PixelType::Uint8,
    };
    let channels = parse_number::<u32>(args, "channels")?.unwrap_or(1);
    if width == 0 || height == 0 || channels == 0 {
        return Err(PlaneError::GenericError(
            "Plane width, height and channel count must be positive".to_string(),
        ));
    }

    Ok(PlaneDescriptor::new(width, height, pixel_type)
        .with_channels(channels, args.get_flag("interleaved"))
        .with_little_endian(!args.get_flag("big-endian")))
}

/// Library facade configured from `--config`, or the built-in defaults
pub fn planekit_from_args(args: &ArgMatches) -> PlaneResult<PlaneKit> {
    match args.get_one::<String>("config") {
        Some(path) => {
            info!("Loading configuration from {}", path);
            PlaneKit::from_config_file(path)
        }
        None => Ok(PlaneKit::default()),
    }
}

fn parse_number<T>(args: &ArgMatches, name: &str) -> PlaneResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.get_one::<String>(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| PlaneError::GenericError(format!("Invalid --{} '{}': {}", name, value, e))),
        None => Ok(None),
    }
}
