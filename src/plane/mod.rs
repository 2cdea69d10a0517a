//! Plane model
//!
//! This module provides the read-only description of image planes, the
//! metadata collaborator interface, the buffers regions are read into,
//! and the crate's error type.

pub mod errors;
pub mod descriptor;
pub mod metadata;
pub mod buffer;
#[cfg(test)]
mod tests;

pub use errors::{PlaneError, PlaneResult};
pub use descriptor::{PixelType, PlaneDescriptor};
pub use metadata::{ImageEntry, ImageMetadata, InMemoryMetadata};
pub use buffer::{cast_plane, cast_plane_mut, BorrowedPlane, ByteArrayPlane, NamedPlane, PlaneBuffer};
