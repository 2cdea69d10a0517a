//! Plane region extraction
//!
//! This module provides the region type and the reader that pulls the
//! bytes of a region out of a raw plane stream.

mod region;
mod region_reader;
#[cfg(test)]
mod tests;

pub use region::Region;
pub use region_reader::{read_region, region_len, RegionReader, MAX_REGION_BYTES};
