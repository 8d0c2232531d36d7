use std::fmt::Write;

/// Render a buffer as `{3, 74, 4}`: lowercase hex, no prefix.
pub fn format_buffer(data: &[u8]) -> String {
    let mut out = String::with_capacity(2 + data.len() * 4);
    out.push('{');
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{:x}", byte);
    }
    out.push('}');
    out
}
