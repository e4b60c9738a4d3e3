//! Byte-span arithmetic for non-contiguous field placement
//!
//! Layouts store multi-byte integers across byte ranges that are not always
//! contiguous (a 64-bit value split 4+4 around the hash filler, a 32-bit
//! value split 2+2). Each placement is declared as a list of [`ByteSpan`]s
//! whose lengths sum to the value width, so encode and decode stay
//! mechanically symmetric.

use byteorder::{BigEndian, ByteOrder};

use crate::IDENTIFIER_LEN;

/// Half-open byte range within the 16-byte identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan {
    pub start: usize,
    pub end: usize,
}

impl ByteSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Write `src` into the listed spans of `dst`, in span order.
///
/// The concatenated span lengths must equal `src.len()`.
pub fn scatter(src: &[u8], spans: &[ByteSpan], dst: &mut [u8; IDENTIFIER_LEN]) {
    let mut offset = 0;
    for span in spans {
        dst[span.start..span.end].copy_from_slice(&src[offset..offset + span.len()]);
        offset += span.len();
    }
    debug_assert_eq!(offset, src.len());
}

/// Concatenate the listed spans of `src`, in span order.
///
/// The concatenated span lengths must equal `N`.
pub fn gather<const N: usize>(src: &[u8; IDENTIFIER_LEN], spans: &[ByteSpan]) -> [u8; N] {
    let mut out = [0u8; N];
    let mut offset = 0;
    for span in spans {
        out[offset..offset + span.len()].copy_from_slice(&src[span.start..span.end]);
        offset += span.len();
    }
    debug_assert_eq!(offset, N);
    out
}

/// Variable-width [`gather`] used for digest extraction.
pub fn gather_vec(src: &[u8; IDENTIFIER_LEN], spans: &[ByteSpan]) -> Vec<u8> {
    let mut out = Vec::with_capacity(spans.iter().map(ByteSpan::len).sum());
    for span in spans {
        out.extend_from_slice(&src[span.start..span.end]);
    }
    out
}

/// Write the big-endian bytes of `value` into the listed spans.
pub fn write_i32(value: i32, spans: &[ByteSpan], dst: &mut [u8; IDENTIFIER_LEN]) {
    let mut be = [0u8; 4];
    BigEndian::write_i32(&mut be, value);
    scatter(&be, spans, dst);
}

/// Write the big-endian bytes of `value` into the listed spans.
pub fn write_i64(value: i64, spans: &[ByteSpan], dst: &mut [u8; IDENTIFIER_LEN]) {
    let mut be = [0u8; 8];
    BigEndian::write_i64(&mut be, value);
    scatter(&be, spans, dst);
}

/// Big-endian decode of the concatenated spans.
pub fn read_i32(src: &[u8; IDENTIFIER_LEN], spans: &[ByteSpan]) -> i32 {
    BigEndian::read_i32(&gather::<4>(src, spans))
}

/// Big-endian decode of the concatenated spans.
pub fn read_i64(src: &[u8; IDENTIFIER_LEN], spans: &[ByteSpan]) -> i64 {
    BigEndian::read_i64(&gather::<8>(src, spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT: &[ByteSpan] = &[ByteSpan::new(0, 4), ByteSpan::new(12, 16)];
    const SPLIT_2_2: &[ByteSpan] = &[ByteSpan::new(4, 6), ByteSpan::new(10, 12)];

    #[test]
    fn test_scatter_gather_split_spans() {
        let mut buf = [0u8; IDENTIFIER_LEN];
        scatter(&[1, 2, 3, 4, 5, 6, 7, 8], SPLIT, &mut buf);
        assert_eq!(&buf[0..4], &[1, 2, 3, 4]);
        assert_eq!(&buf[4..12], &[0; 8]);
        assert_eq!(&buf[12..16], &[5, 6, 7, 8]);

        let gathered: [u8; 8] = gather(&buf, SPLIT);
        assert_eq!(gathered, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(gather_vec(&buf, SPLIT), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_i64_roundtrip_across_gap() {
        for value in [0i64, 1, -1, i64::MIN, i64::MAX, 0x0102030405060708] {
            let mut buf = [0u8; IDENTIFIER_LEN];
            write_i64(value, SPLIT, &mut buf);
            assert_eq!(read_i64(&buf, SPLIT), value);
        }
    }

    #[test]
    fn test_i32_roundtrip_split_2_2() {
        for value in [0i32, 1, -1, i32::MIN, i32::MAX, 0x0A0B0C0D] {
            let mut buf = [0u8; IDENTIFIER_LEN];
            write_i32(value, SPLIT_2_2, &mut buf);
            assert_eq!(read_i32(&buf, SPLIT_2_2), value);
        }
        let mut buf = [0u8; IDENTIFIER_LEN];
        write_i32(0x0A0B0C0D, SPLIT_2_2, &mut buf);
        assert_eq!(&buf[4..6], &[0x0A, 0x0B]);
        assert_eq!(&buf[10..12], &[0x0C, 0x0D]);
    }
}
