//! Text input/output seam between the engine and the terminal.

use std::io::{self, BufRead, Write};

/// Line-oriented text I/O consumed by the interactive loop.
pub trait TextIo {
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Write without a trailing newline (prompts).
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line terminator. `Ok(None)` means end of input.
    /// Bytes that are not valid UTF-8 are replaced, never reported as errors.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// `TextIo` over any buffered reader and writer.
pub struct LineIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> TextIo for LineIo<R, W> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}
