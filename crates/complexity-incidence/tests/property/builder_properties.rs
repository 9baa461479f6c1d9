use std::collections::HashSet;

use complexity_core::CountryProducts;
use complexity_incidence::build;
use proptest::prelude::*;

fn arb_mapping() -> impl Strategy<Value = CountryProducts> {
    prop::collection::vec(
        ("[a-e]{1,3}", prop::collection::vec("[p-t]{1,2}", 1..6)),
        1..8,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn shape_matches_labels(mapping in arb_mapping()) {
        let inc = build(&mapping);
        prop_assert_eq!(inc.matrix().nrows(), mapping.len());
        let distinct: HashSet<&str> = mapping
            .iter()
            .flat_map(|(_, products)| products.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(inc.matrix().ncols(), distinct.len());
    }

    #[test]
    fn entries_are_binary_and_match_lists(mapping in arb_mapping()) {
        let inc = build(&mapping);
        for (i, (_, products)) in mapping.iter().enumerate() {
            for (j, label) in inc.products().iter().enumerate() {
                let expected = if products.contains(label) { 1.0 } else { 0.0 };
                prop_assert_eq!(inc.matrix()[(i, j)], expected);
            }
        }
    }

    #[test]
    fn duplicating_every_list_changes_nothing(mapping in arb_mapping()) {
        let doubled: CountryProducts = mapping
            .iter()
            .map(|(country, products)| {
                let mut twice = products.to_vec();
                twice.extend_from_slice(products);
                (country.to_string(), twice)
            })
            .collect();
        prop_assert_eq!(build(&doubled), build(&mapping));
    }

    #[test]
    fn product_labels_are_unique(mapping in arb_mapping()) {
        let inc = build(&mapping);
        let unique: HashSet<&String> = inc.products().iter().collect();
        prop_assert_eq!(unique.len(), inc.products().len());
    }
}
