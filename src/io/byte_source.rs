//! Byte stream collaborators
//!
//! Region reads only ever move forward within one plane, so a source needs
//! two operations: skip `n` bytes and fill a buffer completely. The cursor
//! types below own their reader and count every byte they consume, which
//! makes the stream position an explicit value instead of shared state.

use std::io::{self, Read, Seek, SeekFrom};

/// Trait for readers that can both read and seek
pub trait SeekableReader: Read + Seek + Send + Sync {}

impl<T: Read + Seek + Send + Sync> SeekableReader for T {}

/// Forward-only byte source used by the region reader
pub trait ByteSource {
    /// Advance past `n` bytes without reading them
    fn skip_bytes(&mut self, n: u64) -> io::Result<()>;

    /// Fill `buf` completely or fail
    fn read_fully(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn skip_bytes(&mut self, n: u64) -> io::Result<()> {
        (**self).skip_bytes(n)
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> io::Result<()> {
        (**self).read_fully(buf)
    }
}

/// Owned cursor over a seekable reader
///
/// Skips are relative seeks, so skipping is free regardless of size.
#[derive(Debug)]
pub struct PlaneCursor<R> {
    inner: R,
    consumed: u64,
}

impl<R: SeekableReader> PlaneCursor<R> {
    /// Wrap a reader; reads start at its current position
    pub fn new(inner: R) -> Self {
        PlaneCursor { inner, consumed: 0 }
    }

    /// Wrap a reader and position it at `offset`
    pub fn at_offset(mut inner: R, offset: u64) -> io::Result<Self> {
        inner.seek(SeekFrom::Start(offset))?;
        Ok(PlaneCursor::new(inner))
    }

    /// Bytes skipped or read since the cursor was created
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Absolute position of the underlying reader
    pub fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: SeekableReader> ByteSource for PlaneCursor<R> {
    fn skip_bytes(&mut self, n: u64) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        let delta = i64::try_from(n).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("skip of {} bytes is too large", n))
        })?;
        self.inner.seek(SeekFrom::Current(delta))?;
        self.consumed += n;
        Ok(())
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.inner.read_exact(buf)?;
        self.consumed += buf.len() as u64;
        Ok(())
    }
}

/// Owned cursor over a forward-only reader such as a pipe
///
/// Skipped bytes are read and discarded; skipping past the end of the
/// stream is an `UnexpectedEof` error.
#[derive(Debug)]
pub struct ForwardCursor<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> ForwardCursor<R> {
    pub fn new(inner: R) -> Self {
        ForwardCursor { inner, consumed: 0 }
    }

    /// Bytes skipped or read since the cursor was created
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ForwardCursor<R> {
    fn skip_bytes(&mut self, n: u64) -> io::Result<()> {
        let skipped = io::copy(&mut (&mut self.inner).take(n), &mut io::sink())?;
        self.consumed += skipped;
        if skipped < n {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("stream ended after skipping {} of {} bytes", skipped, n),
            ));
        }
        Ok(())
    }

    fn read_fully(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.inner.read_exact(buf)?;
        self.consumed += buf.len() as u64;
        Ok(())
    }
}
