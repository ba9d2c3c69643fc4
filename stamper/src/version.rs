//! On-disk format of the version marker.

/// Bucket holding application-level metadata.
pub const META_BUCKET: &str = "meta";

/// Key of the version marker inside [`META_BUCKET`].
pub const VERSION_KEY: &[u8] = b"ver";

/// Encode a version as 4 big-endian bytes.
pub fn encode(version: u32) -> [u8; 4] {
    version.to_be_bytes()
}

/// Decode a stored version. Anything that is not exactly 4 bytes long is
/// treated as unknown.
pub fn decode(bytes: &[u8]) -> Option<u32> {
    let arr: [u8; 4] = bytes.try_into().ok()?;
    Some(u32::from_be_bytes(arr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_big_endian() {
        assert_eq!(encode(7), [0, 0, 0, 7]);
        assert_eq!(encode(0x0102_0304), [1, 2, 3, 4]);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(decode(&[]), None);
        assert_eq!(decode(&[0, 0, 5]), None);
        assert_eq!(decode(&[0, 0, 0, 0, 5]), None);
    }

    #[test]
    fn decode_reads_big_endian() {
        assert_eq!(decode(&[0, 0, 0, 5]), Some(5));
        assert_eq!(decode(&[0xff; 4]), Some(u32::MAX));
    }
}
