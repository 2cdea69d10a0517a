//! Custom error types for plane access

use std::fmt;
use std::io;

/// Guidance attached to every oversized region request
const TILE_GUIDANCE: &str = "Open the plane in smaller tiles instead, \
    for example with the geometry suggested by TileSizeOptimizer";

/// Plane access error types
#[derive(Debug)]
pub enum PlaneError {
    /// I/O error from the underlying stream
    IoError(io::Error),
    /// Region buffer overflows or exceeds the single-read limit
    RegionTooLarge {
        /// Requested byte count, if it was representable at all
        requested: Option<u64>,
        /// Largest buffer a single read may allocate
        limit: u64,
    },
    /// Region does not lie inside the plane
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        plane_width: u32,
        plane_height: u32,
    },
    /// Caller buffer is shorter than the region
    BufferTooSmall { required: usize, actual: usize },
    /// A plane was used where a different concrete plane type was expected
    IncompatiblePlane { expected: &'static str, actual: &'static str },
    /// Axis layout cannot be expressed with five canonical axes
    UncompressibleAxes(String),
    /// Image index not known to the metadata
    ImageIndexOutOfRange { index: usize, count: usize },
    /// Configuration value missing or invalid
    InvalidConfig(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneError::IoError(e) => write!(f, "I/O error: {}", e),
            PlaneError::RegionTooLarge { requested: Some(bytes), limit } => write!(
                f,
                "Image plane too large: {} bytes requested, only {} bytes can be extracted at one time. {}",
                bytes, limit, TILE_GUIDANCE
            ),
            PlaneError::RegionTooLarge { requested: None, limit } => write!(
                f,
                "Image plane too large: size overflows, only {} bytes can be extracted at one time. {}",
                limit, TILE_GUIDANCE
            ),
            PlaneError::RegionOutOfBounds { x, y, width, height, plane_width, plane_height } => write!(
                f,
                "Region {}x{} at ({},{}) does not fit in a {}x{} plane",
                width, height, x, y, plane_width, plane_height
            ),
            PlaneError::BufferTooSmall { required, actual } => write!(
                f,
                "Plane buffer too small: {} bytes required, {} available",
                required, actual
            ),
            PlaneError::IncompatiblePlane { expected, actual } => write!(
                f,
                "Incompatible plane types: cannot use {} as {}",
                actual, expected
            ),
            PlaneError::UncompressibleAxes(axes) => write!(
                f,
                "Image has more than 5 dimensions in an order that could not be compressed: {}",
                axes
            ),
            PlaneError::ImageIndexOutOfRange { index, count } => write!(
                f,
                "Image index {} out of range (image count {})",
                index, count
            ),
            PlaneError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlaneError::GenericError(msg) => write!(f, "Plane error: {}", msg),
        }
    }
}

impl std::error::Error for PlaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaneError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PlaneError {
    fn from(error: io::Error) -> Self {
        PlaneError::IoError(error)
    }
}

impl From<String> for PlaneError {
    fn from(msg: String) -> Self {
        PlaneError::GenericError(msg)
    }
}

/// Result type for plane operations
pub type PlaneResult<T> = Result<T, PlaneError>;
