//! Property tests for bit-packed integer arrays across all widths.

use dictomaton::PackedArray;
use dictomaton::packed::width;
use proptest::prelude::*;

fn mask(bits: u32) -> u32 {
    if bits == 32 { u32::MAX } else { (1 << bits) - 1 }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn stores_truncated_values(
        bits in 1u32..=32,
        values in prop::collection::vec(any::<u32>(), 0..100),
    ) {
        let mut array = PackedArray::new(values.len(), bits);
        for (i, &value) in values.iter().enumerate() {
            array.set(i, value);
        }
        for (i, &value) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i), value & mask(bits));
        }
    }

    #[test]
    fn writes_in_any_order(
        bits in 1u32..=32,
        writes in prop::collection::vec((0usize..40, any::<u32>()), 0..200),
    ) {
        let mut array = PackedArray::new(40, bits);
        let mut model = vec![0u32; 40];
        for (index, value) in writes {
            array.set(index, value);
            model[index] = value & mask(bits);
        }
        let stored: Vec<u32> = array.iter().collect();
        prop_assert_eq!(stored, model);
    }

    #[test]
    fn binary_search_agrees_with_slice(
        mut values in prop::collection::vec(0u32..1000, 0..60),
        needle in 0u32..1000,
    ) {
        values.sort_unstable();
        values.dedup();
        let mut array = PackedArray::new(values.len(), width(999));
        for (i, &value) in values.iter().enumerate() {
            array.set(i, value);
        }
        prop_assert_eq!(array.binary_search(0, values.len(), needle), values.binary_search(&needle));
    }

    #[test]
    fn width_fits_value(n in any::<u32>()) {
        let bits = width(n);
        prop_assert!(bits <= 32);
        prop_assert_eq!(n & mask(bits), n);
        if bits > 0 {
            prop_assert!(n >> (bits - 1) == 1);
        }
    }
}
