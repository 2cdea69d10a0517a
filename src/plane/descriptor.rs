//! Plane geometry and pixel layout
//!
//! A `PlaneDescriptor` holds the read-only facts about one 2-D plane that
//! the region reader and tile optimizer need. It is normally derived from
//! an `ImageMetadata` implementation, one descriptor per image index.

use std::fmt;
use std::str::FromStr;

use super::errors::PlaneError;

/// Sample type of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float,
    Double,
}

impl PixelType {
    /// Number of bytes one sample of this type occupies
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            PixelType::Int8 | PixelType::Uint8 => 1,
            PixelType::Int16 | PixelType::Uint16 => 2,
            PixelType::Int32 | PixelType::Uint32 | PixelType::Float => 4,
            PixelType::Double => 8,
        }
    }

    /// Lower-case name used on the command line and in logs
    pub fn name(&self) -> &'static str {
        match self {
            PixelType::Int8 => "int8",
            PixelType::Uint8 => "uint8",
            PixelType::Int16 => "int16",
            PixelType::Uint16 => "uint16",
            PixelType::Int32 => "int32",
            PixelType::Uint32 => "uint32",
            PixelType::Float => "float",
            PixelType::Double => "double",
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelType {
    type Err = PlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int8" => Ok(PixelType::Int8),
            "uint8" | "u8" | "byte" => Ok(PixelType::Uint8),
            "int16" => Ok(PixelType::Int16),
            "uint16" | "u16" => Ok(PixelType::Uint16),
            "int32" => Ok(PixelType::Int32),
            "uint32" | "u32" => Ok(PixelType::Uint32),
            "float" | "float32" | "f32" => Ok(PixelType::Float),
            "double" | "float64" | "f64" => Ok(PixelType::Double),
            other => Err(PlaneError::GenericError(format!("Unknown pixel type: {}", other))),
        }
    }
}

/// Read-only description of one plane within a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneDescriptor {
    /// Plane width in pixels (length of the X axis)
    pub width: u32,
    /// Plane height in pixels (length of the Y axis)
    pub height: u32,
    /// Sample type of each channel
    pub pixel_type: PixelType,
    /// Number of channels stored together in this plane
    pub rgb_channel_count: u32,
    /// Whether channel samples are stored per pixel rather than per plane
    pub interleaved: bool,
    /// Byte order of multi-byte samples
    pub little_endian: bool,
}

impl PlaneDescriptor {
    /// Single-channel little-endian plane
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Self {
        PlaneDescriptor {
            width,
            height,
            pixel_type,
            rgb_channel_count: 1,
            interleaved: false,
            little_endian: true,
        }
    }

    /// Set the channel count and interleaving
    pub fn with_channels(mut self, rgb_channel_count: u32, interleaved: bool) -> Self {
        self.rgb_channel_count = rgb_channel_count;
        self.interleaved = interleaved;
        self
    }

    /// Set the sample byte order
    pub fn with_little_endian(mut self, little_endian: bool) -> Self {
        self.little_endian = little_endian;
        self
    }

    pub fn bytes_per_pixel(&self) -> u32 {
        self.pixel_type.bytes_per_pixel()
    }

    /// Bytes of one stored plane including `scanline_pad` extra pixels per row,
    /// or `None` when the size is not representable
    pub fn plane_bytes(&self, scanline_pad: u32) -> Option<u64> {
        (self.width as u64 + scanline_pad as u64)
            .checked_mul(self.height as u64)?
            .checked_mul(self.bytes_per_pixel() as u64)?
            .checked_mul(self.rgb_channel_count as u64)
    }
}
