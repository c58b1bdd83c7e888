//! LZ4 block compression for accepted objects.

/// Encoded bytes plus the size reduction they achieved.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub data: Vec<u8>,
    /// `(1 - encoded/original) * 100`; 0 for empty input, negative when
    /// the encoding is larger than the original.
    pub ratio_percent: f64,
}

/// Compress `data`. The output carries its decompressed size as a prefix
/// so `decompress` can restore it without side information.
pub fn compress(data: &[u8]) -> Compressed {
    let encoded = lz4_flex::compress_prepend_size(data);
    let ratio_percent = reduction_percent(data.len(), encoded.len());
    Compressed {
        data: encoded,
        ratio_percent,
    }
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>, lz4_flex::block::DecompressError> {
    lz4_flex::decompress_size_prepended(data)
}

/// Percentage saved going from `original` to `encoded` bytes.
pub fn reduction_percent(original: usize, encoded: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - encoded as f64 / original as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn repetitive_text_shrinks() {
        let original = b"Hello World! ".repeat(100);
        let out = compress(&original);
        assert!(out.data.len() < original.len());
        assert!(out.ratio_percent > 50.0);
    }

    #[test]
    fn empty_input_reports_zero_ratio() {
        let out = compress(b"");
        assert_eq!(out.ratio_percent, 0.0);
    }

    #[test]
    fn tiny_input_may_grow() {
        let out = compress(b"abc");
        assert!(out.data.len() > 3);
        assert!(out.ratio_percent < 0.0);
    }

    proptest! {
        #[test]
        fn prop_recoverable(data in prop::collection::vec(any::<u8>(), 0..16_384)) {
            let out = compress(&data);
            prop_assert_eq!(decompress(&out.data).unwrap(), data);
        }
    }
}
