//! Region structure for defining extraction area
//!
//! This module defines the Region structure that specifies a rectangular
//! area of a plane for extraction. The coordinates are in pixels and
//! follow the usual image convention where (0,0) is the top-left corner.

use std::fmt;

use crate::plane::{PlaneDescriptor, PlaneError, PlaneResult};

/// Region for plane extraction (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Region covering a whole plane
    pub fn full(plane: &PlaneDescriptor) -> Self {
        Region::new(0, 0, plane.width, plane.height)
    }

    /// Get the rightmost X coordinate (exclusive)
    ///
    /// Computed in 64 bits so that it cannot wrap.
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether this region covers all of `plane`
    pub fn is_full_plane(&self, plane: &PlaneDescriptor) -> bool {
        self.x == 0 && self.y == 0 && self.width == plane.width && self.height == plane.height
    }

    /// Whether this region spans the full width of `plane`
    pub fn is_full_width(&self, plane: &PlaneDescriptor) -> bool {
        self.x == 0 && self.width == plane.width
    }

    /// Check that the region is non-empty and lies inside `plane`
    pub fn validate(&self, plane: &PlaneDescriptor) -> PlaneResult<()> {
        if self.width == 0
            || self.height == 0
            || self.end_x() > plane.width as u64
            || self.end_y() > plane.height as u64
        {
            return Err(PlaneError::RegionOutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                plane_width: plane.width,
                plane_height: plane.height,
            });
        }
        Ok(())
    }

    /// Bytes needed to hold this region of `plane`, or `None` on overflow
    pub fn byte_len(&self, plane: &PlaneDescriptor) -> Option<u64> {
        (self.width as u64)
            .checked_mul(self.height as u64)?
            .checked_mul(plane.bytes_per_pixel() as u64)?
            .checked_mul(plane.rgb_channel_count as u64)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
