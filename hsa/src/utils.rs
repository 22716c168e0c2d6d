use std::string::FromUtf8Error;

/// Converts a fixed-size, NUL-padded runtime name buffer to a `String`,
/// truncating at the first NUL.
pub fn fixed_buf_to_string(buf: &[u8]) -> Result<String, FromUtf8Error> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());

    String::from_utf8(buf[..end].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_at_first_nul() {
        let mut buf = [0u8; 64];
        buf[..7].copy_from_slice(b"gfx1100");

        assert_eq!(fixed_buf_to_string(&buf).unwrap(), "gfx1100");
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(fixed_buf_to_string(&[0u8; 64]).unwrap(), "");
    }

    #[test]
    fn test_full_buffer_without_nul() {
        let buf = [b'a'; 16];

        assert_eq!(fixed_buf_to_string(&buf).unwrap(), "a".repeat(16));
    }
}
