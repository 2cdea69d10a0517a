//! Sample byte order handling
//!
//! Region buffers keep samples exactly as stored. When samples have to be
//! interpreted, for example to render a preview, this module decodes them
//! with the byte order declared by the plane descriptor.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

/// Byte order of multi-byte samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian",
            ByteOrder::BigEndian => "Big Endian",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
///
/// Trailing bytes that do not form a whole sample are ignored.
pub trait ByteOrderHandler: Send + Sync {
    fn decode_u16(&self, bytes: &[u8]) -> Vec<u16>;

    fn decode_u32(&self, bytes: &[u8]) -> Vec<u32>;

    fn decode_f32(&self, bytes: &[u8]) -> Vec<f32>;

    fn decode_f64(&self, bytes: &[u8]) -> Vec<f64>;
}

fn whole(bytes: &[u8], width: usize) -> &[u8] {
    &bytes[..bytes.len() - bytes.len() % width]
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn decode_u16(&self, bytes: &[u8]) -> Vec<u16> {
        let src = whole(bytes, 2);
        let mut out = vec![0u16; src.len() / 2];
        LittleEndian::read_u16_into(src, &mut out);
        out
    }

    fn decode_u32(&self, bytes: &[u8]) -> Vec<u32> {
        let src = whole(bytes, 4);
        let mut out = vec![0u32; src.len() / 4];
        LittleEndian::read_u32_into(src, &mut out);
        out
    }

    fn decode_f32(&self, bytes: &[u8]) -> Vec<f32> {
        let src = whole(bytes, 4);
        let mut out = vec![0f32; src.len() / 4];
        LittleEndian::read_f32_into(src, &mut out);
        out
    }

    fn decode_f64(&self, bytes: &[u8]) -> Vec<f64> {
        let src = whole(bytes, 8);
        let mut out = vec![0f64; src.len() / 8];
        LittleEndian::read_f64_into(src, &mut out);
        out
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn decode_u16(&self, bytes: &[u8]) -> Vec<u16> {
        let src = whole(bytes, 2);
        let mut out = vec![0u16; src.len() / 2];
        BigEndian::read_u16_into(src, &mut out);
        out
    }

    fn decode_u32(&self, bytes: &[u8]) -> Vec<u32> {
        let src = whole(bytes, 4);
        let mut out = vec![0u32; src.len() / 4];
        BigEndian::read_u32_into(src, &mut out);
        out
    }

    fn decode_f32(&self, bytes: &[u8]) -> Vec<f32> {
        let src = whole(bytes, 4);
        let mut out = vec![0f32; src.len() / 4];
        BigEndian::read_f32_into(src, &mut out);
        out
    }

    fn decode_f64(&self, bytes: &[u8]) -> Vec<f64> {
        let src = whole(bytes, 8);
        let mut out = vec![0f64; src.len() / 8];
        BigEndian::read_f64_into(src, &mut out);
        out
    }
}
