//! Metadata collaborator interface
//!
//! Format readers answer a handful of questions per image index: axis
//! lengths, pixel type, channel count and interleaving. Everything in this
//! crate only reads these facts; it never parses headers itself.

use log::debug;

use crate::axes::{Axis, CanonicalOrder};

use super::descriptor::{PixelType, PlaneDescriptor};
use super::errors::{PlaneError, PlaneResult};

/// Uniform read-only access to per-image metadata
pub trait ImageMetadata {
    /// Number of images in the dataset
    fn image_count(&self) -> usize;

    /// Length of a canonical axis for the given image
    fn axis_length(&self, image_index: usize, axis: Axis) -> PlaneResult<u64>;

    /// Sample type of the given image
    fn pixel_type(&self, image_index: usize) -> PlaneResult<PixelType>;

    /// Channels stored together within one plane
    fn rgb_channel_count(&self, image_index: usize) -> PlaneResult<u32>;

    /// Whether channel samples are interleaved per pixel
    fn is_interleaved(&self, image_index: usize) -> PlaneResult<bool>;

    /// Byte order of multi-byte samples
    fn is_little_endian(&self, _image_index: usize) -> PlaneResult<bool> {
        Ok(true)
    }

    /// Build the plane descriptor for the given image
    fn plane_descriptor(&self, image_index: usize) -> PlaneResult<PlaneDescriptor> {
        let width = narrow(self.axis_length(image_index, Axis::X)?, "X")?;
        let height = narrow(self.axis_length(image_index, Axis::Y)?, "Y")?;

        Ok(PlaneDescriptor::new(width, height, self.pixel_type(image_index)?)
            .with_channels(
                self.rgb_channel_count(image_index)?,
                self.is_interleaved(image_index)?,
            )
            .with_little_endian(self.is_little_endian(image_index)?))
    }

    /// Number of planes in the given image
    ///
    /// Channels stored together in one plane do not count as separate planes.
    fn plane_count(&self, image_index: usize) -> PlaneResult<u64> {
        let rgb = self.rgb_channel_count(image_index)?.max(1) as u64;
        let effective_c = (self.axis_length(image_index, Axis::Channel)? / rgb).max(1);
        let size_z = self.axis_length(image_index, Axis::Z)?;
        let size_t = self.axis_length(image_index, Axis::Time)?;
        size_z
            .checked_mul(effective_c)
            .and_then(|n| n.checked_mul(size_t))
            .ok_or_else(|| PlaneError::GenericError("Plane count overflows u64".to_string()))
    }
}

fn narrow(length: u64, axis: &str) -> PlaneResult<u32> {
    u32::try_from(length)
        .map_err(|_| PlaneError::GenericError(format!("{} axis length {} exceeds u32", axis, length)))
}

/// Metadata for a single image
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Dimension order and axis lengths
    pub order: CanonicalOrder,
    pub pixel_type: PixelType,
    pub rgb_channel_count: u32,
    pub interleaved: bool,
    pub little_endian: bool,
}

impl ImageEntry {
    /// Populate an entry from a compressed dimension order
    ///
    /// The channel count is treated as separate planes.
    pub fn from_order(order: CanonicalOrder, pixel_type: PixelType) -> Self {
        debug!("Populating image entry: order {} lengths {:?}", order, order.lengths());
        ImageEntry {
            order,
            pixel_type,
            rgb_channel_count: 1,
            interleaved: false,
            little_endian: true,
        }
    }

    /// Store `rgb_channel_count` channels together in each plane
    pub fn with_rgb(mut self, rgb_channel_count: u32, interleaved: bool) -> Self {
        self.rgb_channel_count = rgb_channel_count;
        self.interleaved = interleaved;
        self
    }
}

/// Metadata held in memory, one entry per image
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadata {
    images: Vec<ImageEntry>,
}

impl InMemoryMetadata {
    pub fn new() -> Self {
        InMemoryMetadata { images: Vec::new() }
    }

    /// Append an image and return its index
    pub fn add_image(&mut self, entry: ImageEntry) -> usize {
        self.images.push(entry);
        self.images.len() - 1
    }

    fn entry(&self, image_index: usize) -> PlaneResult<&ImageEntry> {
        self.images.get(image_index).ok_or(PlaneError::ImageIndexOutOfRange {
            index: image_index,
            count: self.images.len(),
        })
    }
}

impl ImageMetadata for InMemoryMetadata {
    fn image_count(&self) -> usize {
        self.images.len()
    }

    fn axis_length(&self, image_index: usize, axis: Axis) -> PlaneResult<u64> {
        Ok(self.entry(image_index)?.order.length_of(axis))
    }

    fn pixel_type(&self, image_index: usize) -> PlaneResult<PixelType> {
        Ok(self.entry(image_index)?.pixel_type)
    }

    fn rgb_channel_count(&self, image_index: usize) -> PlaneResult<u32> {
        Ok(self.entry(image_index)?.rgb_channel_count)
    }

    fn is_interleaved(&self, image_index: usize) -> PlaneResult<bool> {
        Ok(self.entry(image_index)?.interleaved)
    }

    fn is_little_endian(&self, image_index: usize) -> PlaneResult<bool> {
        Ok(self.entry(image_index)?.little_endian)
    }
}
