use crate::error::Result;
use crate::rle::{Record, Records};

/// Shape of an encoded stream, gathered without decoding it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    pub encoded_size: usize,
    pub decoded_size: usize,
    pub literals: usize,
    pub runs: usize,
    pub escaped_runs: usize,
    pub longest_run: usize,
}

impl StreamSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: &Record) {
        match *record {
            Record::Literal(_) => self.literals += 1,
            Record::Run { len, .. } => {
                self.runs += 1;
                if record.is_escaped() {
                    self.escaped_runs += 1;
                }
                self.longest_run = self.longest_run.max(len);
            }
        }
        self.decoded_size += record.decoded_len();
    }

    pub fn compression_ratio(&self) -> f64 {
        if self.encoded_size == 0 {
            return 0.0;
        }
        self.decoded_size as f64 / self.encoded_size as f64
    }

    pub fn space_saved(&self) -> usize {
        self.decoded_size.saturating_sub(self.encoded_size)
    }
}

/// Walk every record of `stream`. Fails on the first malformed record.
pub fn summarize(stream: &[u8]) -> Result<StreamSummary> {
    let mut summary = StreamSummary::new();
    summary.encoded_size = stream.len();

    for record in Records::new(stream) {
        summary.add_record(&record?);
    }

    Ok(summary)
}
