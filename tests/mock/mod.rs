//! Scripted connection for driving a `Request` in tests

#![allow(dead_code)]

use heapless::Vec;
use microweb::network::error::Error;
use microweb::network::{Close, Connection, Read, Write};

pub const MOCK_WRITE_CAPACITY: usize = 1024;

/// Mock connection that plays back a fixed request and records the response
#[derive(Debug)]
pub struct MockConnection<'a> {
    data: &'a [u8],
    read_pos: usize,
    pub writes: Vec<u8, MOCK_WRITE_CAPACITY>,
    open: bool,
    hang_up: bool,
    fail_read_at: Option<usize>,
    fail_writes: bool,
    pub flushes: usize,
    pub closes: usize,
}

impl<'a> MockConnection<'a> {
    /// A peer that sends `data` and then waits for the response
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            read_pos: 0,
            writes: Vec::new(),
            open: true,
            hang_up: false,
            fail_read_at: None,
            fail_writes: false,
            flushes: 0,
            closes: 0,
        }
    }

    /// The peer disconnects as soon as all of `data` was read
    pub fn hanging_up(mut self) -> Self {
        self.hang_up = true;
        self
    }

    /// Reading fails once `at` bytes were delivered
    pub fn failing_read_at(mut self, at: usize) -> Self {
        self.fail_read_at = Some(at);
        self
    }

    /// Every write fails, flush and close still work
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Everything the server wrote, as text
    pub fn written(&self) -> &str {
        core::str::from_utf8(&self.writes).expect("response is not UTF-8")
    }

    /// Whether the server closed the connection
    pub fn is_closed(&self) -> bool {
        !self.open
    }

    /// Bytes the server never read
    pub fn unread(&self) -> usize {
        self.data.len() - self.read_pos
    }
}

impl Read for MockConnection<'_> {
    type Error = Error;

    fn available(&mut self) -> bool {
        self.open && self.read_pos < self.data.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.open {
            return Err(Error::NotOpen);
        }
        if self.fail_read_at == Some(self.read_pos) {
            return Err(Error::ReadError);
        }
        let remaining = self.data.len() - self.read_pos;
        let to_read = core::cmp::min(buf.len(), remaining);

        buf[..to_read].copy_from_slice(&self.data[self.read_pos..self.read_pos + to_read]);
        self.read_pos += to_read;

        Ok(to_read)
    }
}

impl Write for MockConnection<'_> {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.open {
            return Err(Error::NotOpen);
        }
        if self.fail_writes {
            return Err(Error::WriteError);
        }
        self.writes
            .extend_from_slice(buf)
            .map_err(|_| Error::WriteError)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if !self.open {
            return Err(Error::NotOpen);
        }
        self.flushes += 1;
        Ok(())
    }
}

impl Close for MockConnection<'_> {
    type Error = Error;

    fn is_connected(&self) -> bool {
        self.open && !(self.hang_up && self.read_pos >= self.data.len())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        if !self.open {
            return Err(Error::NotOpen);
        }
        self.open = false;
        self.closes += 1;
        Ok(())
    }
}

impl Connection for MockConnection<'_> {}
