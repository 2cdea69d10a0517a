//! Region extraction from raw plane streams
//!
//! This module reads an arbitrary rectangle of a stored plane from a byte
//! source positioned at the start of that plane. Rows may carry a scanline
//! pad, and channels may be interleaved per pixel or stored as consecutive
//! channel planes. The output keeps the stored channel layout.
//!
//! Three read paths exist. A whole unpadded plane is one contiguous read.
//! A full-width band of rows is one read per channel. Anything else is read
//! row by row, skipping the columns outside the region.

use log::debug;

use crate::io::ByteSource;
use crate::plane::{ByteArrayPlane, PlaneBuffer, PlaneDescriptor, PlaneError, PlaneResult};

use super::region::Region;

/// Largest buffer a single region read may allocate (2 GiB - 1)
pub const MAX_REGION_BYTES: u64 = i32::MAX as u64;

/// Reads plane regions from an owned byte source
///
/// The reader holds the source's cursor exclusively. Concurrent reads from
/// one stream need one reader per consumer or a lock around the reader.
#[derive(Debug)]
pub struct RegionReader<S> {
    source: S,
    max_region_bytes: u64,
}

impl<S: ByteSource> RegionReader<S> {
    /// Create a reader over `source` with the default single-read limit
    pub fn new(source: S) -> Self {
        RegionReader {
            source,
            max_region_bytes: MAX_REGION_BYTES,
        }
    }

    /// Override the single-read limit
    pub fn with_max_region_bytes(mut self, max_region_bytes: u64) -> Self {
        self.max_region_bytes = max_region_bytes;
        self
    }

    pub fn max_region_bytes(&self) -> u64 {
        self.max_region_bytes
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give the byte source back to the caller
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Allocate an empty plane buffer large enough for `region`
    pub fn create_plane(&self, plane: &PlaneDescriptor, region: Region) -> PlaneResult<ByteArrayPlane> {
        let len = region_len(plane, &region, self.max_region_bytes)?;
        ByteArrayPlane::allocate(region, len, self.max_region_bytes)
    }

    /// Read a region into a newly allocated plane
    pub fn read_region(
        &mut self,
        plane: &PlaneDescriptor,
        region: Region,
        scanline_pad: u32,
    ) -> PlaneResult<ByteArrayPlane> {
        let mut buffer = self.create_plane(plane, region)?;
        self.read_region_into(plane, region, scanline_pad, &mut buffer)?;
        Ok(buffer)
    }

    /// Read a whole unpadded plane
    pub fn read_plane(&mut self, plane: &PlaneDescriptor) -> PlaneResult<ByteArrayPlane> {
        self.read_region(plane, Region::full(plane), 0)
    }

    /// Read a region into a caller-supplied plane buffer
    ///
    /// The buffer must have been created for exactly `region`.
    pub fn read_region_into<P: PlaneBuffer + ?Sized>(
        &mut self,
        plane: &PlaneDescriptor,
        region: Region,
        scanline_pad: u32,
        buffer: &mut P,
    ) -> PlaneResult<()> {
        if buffer.region() != region {
            return Err(PlaneError::GenericError(format!(
                "Plane buffer holds region {}, cannot read {} into it",
                buffer.region(),
                region
            )));
        }
        self.read_region_bytes(plane, region, scanline_pad, buffer.bytes_mut())?;
        Ok(())
    }

    /// Read a region into a raw byte slice, returning the bytes written
    pub fn read_region_bytes(
        &mut self,
        plane: &PlaneDescriptor,
        region: Region,
        scanline_pad: u32,
        out: &mut [u8],
    ) -> PlaneResult<usize> {
        read_region(&mut self.source, plane, region, scanline_pad, out, self.max_region_bytes)
    }
}

/// Byte length of `region`, checked against `limit`
pub fn region_len(plane: &PlaneDescriptor, region: &Region, limit: u64) -> PlaneResult<usize> {
    let bytes = region
        .byte_len(plane)
        .ok_or(PlaneError::RegionTooLarge { requested: None, limit })?;
    if bytes > limit {
        return Err(PlaneError::RegionTooLarge { requested: Some(bytes), limit });
    }
    usize::try_from(bytes).map_err(|_| PlaneError::RegionTooLarge { requested: Some(bytes), limit })
}

fn product(factors: &[u64], limit: u64) -> PlaneResult<u64> {
    factors
        .iter()
        .try_fold(1u64, |acc, &f| acc.checked_mul(f))
        .ok_or(PlaneError::RegionTooLarge { requested: None, limit })
}

/// Read `region` of `plane` from `source` into `out`
///
/// `source` must be positioned at the first byte of the plane. On return it
/// has advanced past every byte read or skipped; the final row's trailing
/// bytes, and the rows below the region in the last channel, are left
/// unread.
pub fn read_region<S: ByteSource + ?Sized>(
    source: &mut S,
    plane: &PlaneDescriptor,
    region: Region,
    scanline_pad: u32,
    out: &mut [u8],
    limit: u64,
) -> PlaneResult<usize> {
    if plane.rgb_channel_count == 0 {
        return Err(PlaneError::GenericError("Plane must have at least one channel".to_string()));
    }
    region.validate(plane)?;

    let len = region_len(plane, &region, limit)?;
    if out.len() < len {
        return Err(PlaneError::BufferTooSmall { required: len, actual: out.len() });
    }
    let out = &mut out[..len];

    let c = plane.rgb_channel_count as u64;
    let bpp = plane.bytes_per_pixel() as u64;
    let (x, y) = (region.x as u64, region.y as u64);
    let (w, h) = (region.width as u64, region.height as u64);
    let rows_below = plane.height as u64 - y - h;

    if scanline_pad == 0 && region.is_full_plane(plane) {
        debug!("Reading full plane {}: {} bytes", region, len);
        source.read_fully(out)?;
    } else if scanline_pad == 0 && region.is_full_width(plane) {
        debug!("Reading full-width band {} (interleaved: {})", region, plane.interleaved);
        if plane.interleaved {
            source.skip_bytes(product(&[y, w, bpp, c], limit)?)?;
            source.read_fully(out)?;
        } else {
            let row_len = w * bpp;
            let channel_len = len / c as usize;
            for (channel, chunk) in out.chunks_exact_mut(channel_len).enumerate() {
                source.skip_bytes(product(&[y, row_len], limit)?)?;
                source.read_fully(chunk)?;
                if (channel as u64) < c - 1 {
                    source.skip_bytes(product(&[rows_below, row_len], limit)?)?;
                }
            }
        }
    } else {
        let scanline_width = plane.width as u64 + scanline_pad as u64;
        let trailing = scanline_width - w - x;
        debug!(
            "Reading region {} row by row (scanline width {}, interleaved: {})",
            region, scanline_width, plane.interleaved
        );

        if plane.interleaved {
            let pixel = bpp * c;
            let row_len = (w * pixel) as usize;
            source.skip_bytes(product(&[y, scanline_width, pixel], limit)?)?;
            for (row, chunk) in out.chunks_exact_mut(row_len).enumerate() {
                source.skip_bytes(product(&[x, pixel], limit)?)?;
                source.read_fully(chunk)?;
                if (row as u64) < h - 1 {
                    source.skip_bytes(product(&[trailing, pixel], limit)?)?;
                }
            }
        } else {
            let row_len = (w * bpp) as usize;
            let channel_len = len / c as usize;
            for (channel, channel_chunk) in out.chunks_exact_mut(channel_len).enumerate() {
                let last_channel = channel as u64 == c - 1;
                source.skip_bytes(product(&[y, scanline_width, bpp], limit)?)?;
                for (row, chunk) in channel_chunk.chunks_exact_mut(row_len).enumerate() {
                    source.skip_bytes(product(&[x, bpp], limit)?)?;
                    source.read_fully(chunk)?;
                    if (row as u64) < h - 1 || !last_channel {
                        source.skip_bytes(product(&[trailing, bpp], limit)?)?;
                    }
                }
                if !last_channel {
                    source.skip_bytes(product(&[scanline_width, bpp, rows_below], limit)?)?;
                }
            }
        }
    }

    Ok(len)
}
