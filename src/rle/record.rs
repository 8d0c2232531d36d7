//! Record layout shared by the encoder and the decoder.
//!
//! Literal: one byte in `0x00..=0x7F`.
//! Run: `[0x80 | value & 0x7F] [0x00 if value >= 0x80] [0xFF]* [1..=127]`

use crate::error::{BrleError, Result};

/// Marks a run tag; also the bit a literal must never carry.
pub const RUN_FLAG: u8 = 0x80;
pub const VALUE_MASK: u8 = 0x7F;
/// Length byte meaning "add 127, more follows".
pub const CONTINUATION: u8 = 0xFF;
/// Follows a run tag when the run value has its high bit set.
pub const HIGH_BIT_ESCAPE: u8 = 0x00;
/// Largest count a single terminator byte carries.
pub const MAX_TERMINATOR: usize = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Literal(u8),
    Run { value: u8, len: usize },
}

impl Record {
    /// Number of bytes this record expands to.
    pub fn decoded_len(&self) -> usize {
        match *self {
            Record::Literal(_) => 1,
            Record::Run { len, .. } => len,
        }
    }

    /// Whether the run value needed the high-bit escape.
    pub fn is_escaped(&self) -> bool {
        matches!(*self, Record::Run { value, .. } if value & RUN_FLAG != 0)
    }
}

/// Appends the continuation/terminator sequence for `len` (must be >= 1).
pub(crate) fn push_length(out: &mut Vec<u8>, mut len: usize) {
    debug_assert!(len >= 1, "run length must be positive");
    while len > MAX_TERMINATOR {
        out.push(CONTINUATION);
        len -= MAX_TERMINATOR;
    }
    out.push(len as u8);
}

/// Appends a complete run record.
pub(crate) fn push_run(out: &mut Vec<u8>, value: u8, len: usize) {
    out.push(RUN_FLAG | (value & VALUE_MASK));
    if value & RUN_FLAG != 0 {
        out.push(HIGH_BIT_ESCAPE);
    }
    push_length(out, len);
}

/// Encoded size of a run record, without building it.
pub(crate) fn run_record_size(value: u8, len: usize) -> usize {
    let escape = usize::from(value & RUN_FLAG != 0);
    let continuations = (len - 1) / MAX_TERMINATOR;
    1 + escape + continuations + 1
}

/// Parser over an encoded stream.
///
/// Every read is bounds-checked; a truncated record yields
/// `MalformedStream` and the iterator stops.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Records<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, failed: false }
    }

    /// Offset of the next record to be parsed.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn fail(&mut self, offset: usize, reason: &'static str) -> Option<Result<Record>> {
        self.failed = true;
        Some(Err(BrleError::malformed(offset, reason)))
    }

    fn read_run(&mut self, start: usize, tag: u8) -> Option<Result<Record>> {
        let mut value = tag & VALUE_MASK;

        match self.data.get(self.pos).copied() {
            None => return self.fail(start, "run tag without length"),
            Some(HIGH_BIT_ESCAPE) => {
                value |= RUN_FLAG;
                self.pos += 1;
            }
            Some(_) => {}
        }

        let mut len: usize = 0;
        loop {
            let Some(byte) = self.data.get(self.pos).copied() else {
                return self.fail(start, "run length not terminated");
            };
            self.pos += 1;

            let step = if byte & RUN_FLAG != 0 {
                MAX_TERMINATOR
            } else {
                byte as usize
            };
            len = match len.checked_add(step) {
                Some(len) => len,
                None => return self.fail(start, "run length overflow"),
            };
            if byte & RUN_FLAG == 0 {
                break;
            }
        }

        if len == 0 {
            return self.fail(start, "zero-length run");
        }
        Some(Ok(Record::Run { value, len }))
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.data.len() {
            return None;
        }

        let start = self.pos;
        let byte = self.data[start];
        self.pos += 1;

        if byte & RUN_FLAG == 0 {
            Some(Ok(Record::Literal(byte)))
        } else {
            self.read_run(start, byte)
        }
    }
}

impl std::iter::FusedIterator for Records<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &[u8]) -> Vec<Record> {
        Records::new(data).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn test_push_length_boundaries() {
        let cases: &[(usize, &[u8])] = &[
            (1, &[1]),
            (126, &[126]),
            (127, &[127]),
            (128, &[0xFF, 1]),
            (254, &[0xFF, 127]),
            (255, &[0xFF, 0xFF, 1]),
        ];
        for &(len, expected) in cases {
            let mut out = Vec::new();
            push_length(&mut out, len);
            assert_eq!(out, expected, "length {}", len);
        }
    }

    #[test]
    fn test_push_run_escapes_high_values() {
        let mut out = Vec::new();
        push_run(&mut out, 0x04, 3);
        push_run(&mut out, 0xC3, 1);
        assert_eq!(out, vec![0x84, 0x03, 0xC3, 0x00, 0x01]);
    }

    #[test]
    fn test_run_record_size_matches_push() {
        for &value in &[0x00u8, 0x7F, 0x80, 0xFF] {
            for len in [1usize, 2, 127, 128, 254, 255, 1000] {
                let mut out = Vec::new();
                push_run(&mut out, value, len);
                assert_eq!(run_record_size(value, len), out.len());
            }
        }
    }

    #[test]
    fn test_parse_mixed() {
        let records = parse(&[0x03, 0x84, 0x03, 0xC3, 0x00, 0xFF, 0x01, 0x7F]);
        assert_eq!(
            records,
            vec![
                Record::Literal(0x03),
                Record::Run { value: 0x04, len: 3 },
                Record::Run { value: 0xC3, len: 128 },
                Record::Literal(0x7F),
            ]
        );
        assert!(records[2].is_escaped());
        assert!(!records[1].is_escaped());
    }

    #[test]
    fn test_lone_tag_is_malformed() {
        let mut records = Records::new(&[0x80]);
        match records.next() {
            Some(Err(BrleError::MalformedStream { offset, .. })) => assert_eq!(offset, 0),
            other => panic!("expected malformed stream, got {:?}", other),
        }
        assert!(records.next().is_none());
    }

    #[test]
    fn test_unterminated_continuation() {
        let mut records = Records::new(&[0x01, 0x85, 0xFF, 0xFF]);
        assert_eq!(records.next().unwrap().unwrap(), Record::Literal(0x01));
        match records.next() {
            Some(Err(BrleError::MalformedStream { offset, reason })) => {
                assert_eq!(offset, 1);
                assert_eq!(reason, "run length not terminated");
            }
            other => panic!("expected malformed stream, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_without_length() {
        let result: Result<Vec<_>> = Records::new(&[0x90, 0x00]).collect();
        assert!(matches!(result, Err(BrleError::MalformedStream { .. })));
    }

    #[test]
    fn test_zero_length_run_rejected() {
        let result: Result<Vec<_>> = Records::new(&[0x90, 0x00, 0x00]).collect();
        match result {
            Err(BrleError::MalformedStream { reason, .. }) => assert_eq!(reason, "zero-length run"),
            other => panic!("expected zero-length run error, got {:?}", other),
        }
    }

    #[test]
    fn test_offset_tracks_position() {
        let data = [0x01, 0x84, 0x03, 0x02];
        let mut records = Records::new(&data);
        assert_eq!(records.offset(), 0);
        records.next();
        assert_eq!(records.offset(), 1);
        records.next();
        assert_eq!(records.offset(), 3);
        records.next();
        assert_eq!(records.offset(), 4);
        assert!(records.next().is_none());
    }
}
