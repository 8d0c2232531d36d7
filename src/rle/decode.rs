use super::record::{Record, Records};
use crate::error::{BrleError, Result};
use log::trace;

/// Decode a record stream into a fresh buffer.
///
/// The stream is validated and sized in a first pass, so on error no
/// partial output is produced and on success the buffer is allocated once.
pub fn decode(stream: &[u8]) -> Result<Vec<u8>> {
    if stream.is_empty() {
        return Ok(Vec::new());
    }

    let total = decoded_len(stream)?;
    let mut decoded = Vec::with_capacity(total);

    for record in Records::new(stream) {
        match record? {
            Record::Literal(byte) => decoded.push(byte),
            Record::Run { value, len } => decoded.resize(decoded.len() + len, value),
        }
    }

    trace!("decoded {} bytes into {}", stream.len(), decoded.len());
    Ok(decoded)
}

/// Exact size `decode(stream)` would produce, with the same validation.
pub fn decoded_len(stream: &[u8]) -> Result<usize> {
    let mut records = Records::new(stream);
    let mut total: usize = 0;

    loop {
        let offset = records.offset();
        let Some(record) = records.next() else {
            break;
        };
        total = total
            .checked_add(record?.decoded_len())
            .ok_or_else(|| BrleError::malformed(offset, "decoded length overflow"))?;
    }

    Ok(total)
}
