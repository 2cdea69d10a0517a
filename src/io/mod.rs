//! I/O utilities for plane streams
//!
//! This module provides the byte source abstraction region reads run
//! against, and sample byte order decoding.

pub mod byte_source;
pub mod byte_order;

pub use byte_source::{ByteSource, ForwardCursor, PlaneCursor, SeekableReader};
pub use byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
