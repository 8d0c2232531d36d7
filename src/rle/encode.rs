use super::record::{push_run, run_record_size, RUN_FLAG};
use super::scan::{runs, Run};
use log::trace;

/// Encode `data` into a fresh record stream.
///
/// Runs of length 1 below `0x80` are copied as literals; everything else,
/// including lone bytes with the high bit set, becomes a run record.
pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut encoded = Vec::with_capacity(data.len());
    for Run { value, len } in runs(data) {
        if is_literal(value, len) {
            encoded.push(value);
        } else {
            push_run(&mut encoded, value, len);
        }
    }

    trace!("encoded {} bytes into {}", data.len(), encoded.len());
    encoded
}

/// Exact size `encode(data)` would produce.
pub fn encoded_len(data: &[u8]) -> usize {
    runs(data)
        .map(|Run { value, len }| {
            if is_literal(value, len) {
                1
            } else {
                run_record_size(value, len)
            }
        })
        .sum()
}

fn is_literal(value: u8, len: usize) -> bool {
    len == 1 && value & RUN_FLAG == 0
}
