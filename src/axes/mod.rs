//! Axis layouts
//!
//! This module maps arbitrary axis layouts onto the canonical five-axis
//! order `XYZCT` used when writing planes.

mod label;
mod canonical;
mod compressor;

pub use label::{Axis, AxisLabel};
pub use canonical::CanonicalOrder;
pub use compressor::{compress, compress_axes, describe, is_compressible, needs_compression};
