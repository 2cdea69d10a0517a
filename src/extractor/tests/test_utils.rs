use std::io::Cursor;

use crate::io::PlaneCursor;
use crate::plane::PlaneDescriptor;

/// Value stored for a sample, unique per (channel, row, column, byte)
///
/// Pad columns get `0xEE` so a stray read shows up in comparisons.
pub fn sample(channel: u32, row: u32, col: u32, byte: u32) -> u8 {
    ((channel * 97 + row * 31 + col * 7 + byte * 3) % 251) as u8
}

/// Serialize one plane with `pad` extra pixels per row
pub fn build_plane(plane: &PlaneDescriptor, pad: u32) -> Vec<u8> {
    let bpp = plane.bytes_per_pixel();
    let c = plane.rgb_channel_count;
    let mut data = Vec::new();

    if plane.interleaved {
        for row in 0..plane.height {
            for col in 0..plane.width + pad {
                for channel in 0..c {
                    for byte in 0..bpp {
                        data.push(if col < plane.width { sample(channel, row, col, byte) } else { 0xEE });
                    }
                }
            }
        }
    } else {
        for channel in 0..c {
            for row in 0..plane.height {
                for col in 0..plane.width + pad {
                    for byte in 0..bpp {
                        data.push(if col < plane.width { sample(channel, row, col, byte) } else { 0xEE });
                    }
                }
            }
        }
    }

    data
}

/// Bytes a region read is expected to produce
pub fn expected_region(plane: &PlaneDescriptor, x: u32, y: u32, w: u32, h: u32) -> Vec<u8> {
    let bpp = plane.bytes_per_pixel();
    let c = plane.rgb_channel_count;
    let mut data = Vec::new();

    if plane.interleaved {
        for row in y..y + h {
            for col in x..x + w {
                for channel in 0..c {
                    for byte in 0..bpp {
                        data.push(sample(channel, row, col, byte));
                    }
                }
            }
        }
    } else {
        for channel in 0..c {
            for row in y..y + h {
                for col in x..x + w {
                    for byte in 0..bpp {
                        data.push(sample(channel, row, col, byte));
                    }
                }
            }
        }
    }

    data
}

/// Cursor over a serialized plane followed by a marker plane of `0x5A` bytes
pub fn plane_cursor(plane: &PlaneDescriptor, pad: u32) -> PlaneCursor<Cursor<Vec<u8>>> {
    let mut data = build_plane(plane, pad);
    let len = data.len();
    data.extend(std::iter::repeat(0x5A).take(len));
    PlaneCursor::new(Cursor::new(data))
}
