use std::io::{self, Read};

const CHUNK_SIZE: usize = 4096;

/// Splits a byte stream into delimiter-separated text segments.
///
/// A step record spans multiple physical lines, so a plain line reader would
/// cut it apart; this buffers fixed-size chunks and yields every complete
/// segment found before reading more. On end of input the remaining partial
/// buffer (possibly empty) is yielded as the final segment, so rejoining all
/// segments with the delimiter reproduces the input exactly.
pub struct SegmentReader<R: Read> {
    inner: R,
    delim: Vec<u8>,
    buf: Vec<u8>,
    eof: bool,
    done: bool,
}

impl<R: Read> SegmentReader<R> {
    pub fn new(inner: R, delim: &str) -> Self {
        assert!(!delim.is_empty(), "delimiter must be non-empty");
        Self {
            inner,
            delim: delim.as_bytes().to_vec(),
            buf: Vec::with_capacity(CHUNK_SIZE),
            eof: false,
            done: false,
        }
    }

    fn find_delim(&self) -> Option<usize> {
        if self.buf.len() < self.delim.len() {
            return None;
        }
        self.buf
            .windows(self.delim.len())
            .position(|w| w == self.delim.as_slice())
    }

    fn split_off_segment(&mut self, end: usize) -> io::Result<String> {
        let rest = self.buf.split_off(end + self.delim.len());
        self.buf.truncate(end);
        let segment = segment_text(&self.buf);
        self.buf = rest;
        segment
    }
}

fn segment_text(bytes: &[u8]) -> io::Result<String> {
    std::str::from_utf8(bytes).map(str::to_owned).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("segment is not valid UTF-8: {e}"),
        )
    })
}

impl<R: Read> Iterator for SegmentReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(pos) = self.find_delim() {
                return Some(self.split_off_segment(pos));
            }
            if self.eof {
                self.done = true;
                let tail = std::mem::take(&mut self.buf);
                return Some(segment_text(&tail));
            }
            let mut chunk = [0u8; CHUNK_SIZE];
            match self.inner.read(&mut chunk) {
                Ok(0) => self.eof = true,
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
