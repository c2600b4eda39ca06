use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Run parameters scanned from the header section of a trial log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub num_boxes: usize,
    pub max_steps: u64,
}

impl Header {
    /// Spacing between x-axis sample points: 1% of the step range.
    #[inline]
    pub fn label_interval(&self) -> f64 {
        self.max_steps as f64 / 100.0
    }
}

/// Scans `path` for the `#Boxes` and `Maxsteps:` header fields.
pub fn read_header(path: &Path) -> Result<Header, String> {
    let file = File::open(path).map_err(|e| format!("open {}: {e}", path.display()))?;
    scan_header(BufReader::new(file)).map_err(|e| format!("{}: {e}", path.display()))
}

/// `#Boxes` must appear before `Maxsteps:`; both carry their value as the
/// line's second whitespace token.
pub fn scan_header<R: BufRead>(reader: R) -> Result<Header, String> {
    let mut lines = reader.lines();
    let num_boxes = scan_field(&mut lines, "#Boxes")?;
    let max_steps = scan_field(&mut lines, "Maxsteps:")?;
    Ok(Header {
        num_boxes: num_boxes as usize,
        max_steps,
    })
}

fn scan_field<I>(lines: &mut I, token: &str) -> Result<u64, String>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line.map_err(|e| format!("read header line: {e}"))?;
        if !line.contains(token) {
            continue;
        }
        let value = line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| format!("`{token}` line has no value: {line:?}"))?;
        return value
            .parse()
            .map_err(|e| format!("invalid `{token}` value {value:?}: {e}"));
    }
    Err(format!("end of file before `{token}` header field"))
}
