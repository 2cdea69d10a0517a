//! Plane buffers
//!
//! A plane buffer is anything that can expose the raw bytes of a region.
//! The region reader only needs that capability, so concrete buffer types
//! differ in who owns the storage, not in how they are filled.

use std::any::Any;

use super::errors::{PlaneError, PlaneResult};
use crate::extractor::Region;

/// Raw-byte access to the pixels of one plane region
pub trait PlaneBuffer {
    /// Region of the source plane this buffer holds
    fn region(&self) -> Region;

    /// Raw bytes in the source plane's channel layout
    fn bytes(&self) -> &[u8];

    /// Mutable raw bytes, used by readers to fill the buffer
    fn bytes_mut(&mut self) -> &mut [u8];

    /// Short name of the concrete buffer type
    fn kind(&self) -> &'static str;

    /// Type-erased view used for downcasting; `None` for borrowed buffers
    fn as_any(&self) -> Option<&dyn Any> {
        None
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        None
    }
}

/// Concrete plane types that generic planes can be narrowed to
pub trait NamedPlane: PlaneBuffer + Any {
    const KIND: &'static str;
}

/// Plane backed by an owned byte vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArrayPlane {
    region: Region,
    data: Vec<u8>,
}

impl ByteArrayPlane {
    /// Wrap existing bytes as the contents of `region`
    pub fn new(region: Region, data: Vec<u8>) -> Self {
        ByteArrayPlane { region, data }
    }

    /// Allocate a zeroed plane of `len` bytes
    ///
    /// Allocation failure is reported as `RegionTooLarge` so callers can
    /// retry with smaller tiles.
    pub fn allocate(region: Region, len: usize, limit: u64) -> PlaneResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| PlaneError::RegionTooLarge {
            requested: Some(len as u64),
            limit,
        })?;
        data.resize(len, 0);
        Ok(ByteArrayPlane { region, data })
    }

    /// Consume the plane and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl PlaneBuffer for ByteArrayPlane {
    fn region(&self) -> Region {
        self.region
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Some(self as &dyn Any)
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        Some(self as &mut dyn Any)
    }
}

impl NamedPlane for ByteArrayPlane {
    const KIND: &'static str = "ByteArrayPlane";
}

/// Plane backed by a caller-owned slice
#[derive(Debug)]
pub struct BorrowedPlane<'a> {
    region: Region,
    data: &'a mut [u8],
}

impl<'a> BorrowedPlane<'a> {
    pub fn new(region: Region, data: &'a mut [u8]) -> Self {
        BorrowedPlane { region, data }
    }
}

impl PlaneBuffer for BorrowedPlane<'_> {
    fn region(&self) -> Region {
        self.region
    }

    fn bytes(&self) -> &[u8] {
        self.data
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self.data
    }

    fn kind(&self) -> &'static str {
        "BorrowedPlane"
    }
}

/// Narrow a generic plane to a concrete plane type
pub fn cast_plane<P: NamedPlane>(plane: &dyn PlaneBuffer) -> PlaneResult<&P> {
    let actual = plane.kind();
    plane
        .as_any()
        .and_then(|any| any.downcast_ref::<P>())
        .ok_or(PlaneError::IncompatiblePlane { expected: P::KIND, actual })
}

/// Mutable variant of `cast_plane`
pub fn cast_plane_mut<P: NamedPlane>(plane: &mut dyn PlaneBuffer) -> PlaneResult<&mut P> {
    let actual = plane.kind();
    plane
        .as_any_mut()
        .and_then(|any| any.downcast_mut::<P>())
        .ok_or(PlaneError::IncompatiblePlane { expected: P::KIND, actual })
}
