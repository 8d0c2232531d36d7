//! Byte run-length codec.
//!
//! Runs of identical bytes collapse into a tag byte (value with the high bit
//! set) followed by a length written as `0xFF` continuations plus a terminator
//! in `1..=127`. Bytes below `0x80` that do not repeat pass through as
//! literals. A run whose value has the high bit set carries a `0x00` escape
//! after the tag, so every byte value round-trips.

pub mod decode;
pub mod encode;
pub mod record;
pub mod scan;

pub use decode::{decode, decoded_len};
pub use encode::{encode, encoded_len};
pub use record::{Record, Records};
pub use scan::{run_length, runs, Run, Runs};
