//! Run detection over a byte buffer.

/// Length of the maximal run of equal bytes starting at `start`.
///
/// Always at least 1. Never reads past the end of `data`.
///
/// # Panics
///
/// Panics if `start >= data.len()`, the same as indexing would.
pub fn run_length(data: &[u8], start: usize) -> usize {
    assert!(
        start < data.len(),
        "run_length: start {} out of bounds for buffer of {} bytes",
        start,
        data.len()
    );

    let value = data[start];
    data[start + 1..].iter().take_while(|&&b| b == value).count() + 1
}

/// A maximal run of one byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub value: u8,
    pub len: usize,
}

/// Iterator over the maximal runs of a buffer, left to right.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    data: &'a [u8],
    pos: usize,
}

pub fn runs(data: &[u8]) -> Runs<'_> {
    Runs { data, pos: 0 }
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        if self.pos >= self.data.len() {
            return None;
        }
        let value = self.data[self.pos];
        let len = run_length(self.data, self.pos);
        self.pos += len;
        Some(Run { value, len })
    }
}

impl std::iter::FusedIterator for Runs<'_> {}
