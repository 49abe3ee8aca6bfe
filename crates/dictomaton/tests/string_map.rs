//! Property tests for immutable string maps.

use std::collections::BTreeMap;

use dictomaton::{MapBuilder, OrderedMapBuilder};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn behaves_like_btree_map(
        entries in prop::collection::vec(("[a-f]{0,6}", any::<i64>()), 0..80),
        probe in "[a-f]{0,6}",
    ) {
        let mut builder = MapBuilder::new();
        let mut model = BTreeMap::new();
        for (key, value) in &entries {
            builder.insert(key.as_str(), *value);
            model.insert(key.clone(), *value);
        }
        let map = builder.build();

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.get(&probe), model.get(&probe));
        let entries: Vec<(String, i64)> = map.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(String, i64)> = model.into_iter().collect();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn ordered_builder_matches_unordered(
        model in prop::collection::btree_map("[a-f]{0,6}", any::<u16>(), 0..80),
    ) {
        let mut ordered = OrderedMapBuilder::new();
        let mut unordered = MapBuilder::new();
        for (key, value) in model.iter().rev() {
            unordered.insert(key.as_str(), *value);
        }
        for (key, value) in &model {
            ordered.insert(key, *value).unwrap();
        }

        let ordered = ordered.build();
        let unordered = unordered.build();
        for key in model.keys() {
            prop_assert_eq!(ordered.get(key), unordered.get(key));
        }
        prop_assert_eq!(ordered.values().collect::<Vec<_>>(), unordered.values().collect::<Vec<_>>());
    }
}
