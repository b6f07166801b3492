//! Record line splitting for ingestion sources
//!
//! Lines end at `\n`, `\r\n` or a bare `\r`. Bytes that are not valid UTF-8
//! are replaced with U+FFFD so a badly encoded line is handled by the normal
//! per-line checks instead of ending the batch.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the record lines of a reader
///
/// Yields each line without its terminator. Only a failing read produces
/// an `Err`, after which iteration stops.
pub struct RecordLines<R> {
    reader: R,
    pending: VecDeque<String>,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> RecordLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            buf: Vec::new(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        if self.finished {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                let mut chunk: &[u8] = &self.buf;
                if let Some(rest) = chunk.strip_suffix(b"\n") {
                    chunk = rest;
                }
                if let Some(rest) = chunk.strip_suffix(b"\r") {
                    chunk = rest;
                }
                // Any carriage return left inside the chunk ends a line too
                let text = String::from_utf8_lossy(chunk);
                self.pending.extend(text.split('\r').map(str::to_string));
                self.pending.pop_front().map(Ok)
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
