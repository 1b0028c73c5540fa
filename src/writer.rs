//! Output guard that makes sure a program's output ends with a newline.

use std::io::Write;

/// Wraps an output sink and appends a trailing newline on drop when the
/// program's own output didn't end with one.
///
/// Every write is proxied byte-for-byte to the inner sink; the guard only
/// remembers the last byte of the most recent non-empty write. On drop —
/// every exit path, including after an error — a single `\n` is written
/// iff at least one byte was ever written and the last one wasn't already
/// `\n`. A program that wrote nothing gets nothing appended.
pub struct TrailingNewlineWriter<'a, W: Write> {
    inner: &'a mut W,
    last_byte: Option<u8>,
}

impl<'a, W: Write> TrailingNewlineWriter<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            last_byte: None,
        }
    }
}

impl<W: Write> Write for TrailingNewlineWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Some(&last) = buf.last() {
            self.last_byte = Some(last);
        }
        self.inner.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Drop for TrailingNewlineWriter<'_, W> {
    fn drop(&mut self) {
        if let Some(last) = self.last_byte
            && last != b'\n'
        {
            // Nowhere to report a failure from inside drop.
            let _ = self.inner.write_all(b"\n");
            let _ = self.inner.flush();
        }
    }
}
