use complexity_core::CountryProducts;
use complexity_engine::ComplexityEngine;
use complexity_incidence::build_validated;
use proptest::prelude::*;

/// Random valid mappings: every country exports at least one product and
/// every product in the catalogue is exported by someone.
fn arb_mapping() -> impl Strategy<Value = CountryProducts> {
    (2usize..6, 2usize..6)
        .prop_flat_map(|(countries, products)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), products), countries)
        })
        .prop_map(|rows| {
            let n_products = rows[0].len();
            let mut rows = rows;
            // Guarantee non-empty rows and columns.
            for (i, row) in rows.iter_mut().enumerate() {
                row[i % n_products] = true;
            }
            for j in 0..n_products {
                let i = j % rows.len();
                rows[i][j] = true;
            }
            rows.iter()
                .enumerate()
                .map(|(i, row)| {
                    let products: Vec<String> = row
                        .iter()
                        .enumerate()
                        .filter(|(_, on)| **on)
                        .map(|(j, _)| format!("p{j}"))
                        .collect();
                    (format!("c{i}"), products)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn a_rows_and_b_columns_sum_to_one(mapping in arb_mapping()) {
        let inc = build_validated(&mapping).unwrap();
        let bd = ComplexityEngine::default().breakdown(&inc).unwrap();
        for row in bd.a.row_iter() {
            prop_assert!((row.sum() - 1.0).abs() < 1e-9);
        }
        for col in bd.b.column_iter() {
            prop_assert!((col.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn spaces_are_square_and_labeled(mapping in arb_mapping()) {
        let inc = build_validated(&mapping).unwrap();
        let engine = ComplexityEngine::default();
        let (product_space, country_space) = engine.spaces(&inc).unwrap();
        prop_assert_eq!(product_space.shape(), (inc.n_products(), inc.n_products()));
        prop_assert_eq!(country_space.shape(), (inc.n_countries(), inc.n_countries()));
        // Country space is row-stochastic, product space column-stochastic.
        for row in country_space.row_iter() {
            prop_assert!((row.sum() - 1.0).abs() < 1e-9);
        }
        for col in product_space.column_iter() {
            prop_assert!((col.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn indices_align_with_labels(mapping in arb_mapping()) {
        let inc = build_validated(&mapping).unwrap();
        let report = ComplexityEngine::default().compute(&inc).unwrap();
        let eci_labels: Vec<&str> = report.eci.labels().collect();
        let countries: Vec<&str> = mapping.countries().collect();
        prop_assert_eq!(eci_labels, countries);
        let pci_labels: Vec<&str> = report.pci.labels().collect();
        let products: Vec<&str> = inc.products().iter().map(String::as_str).collect();
        prop_assert_eq!(pci_labels, products);
        prop_assert!(report.eci.iter().all(|(_, v)| v.is_finite()));
        prop_assert!(report.pci.iter().all(|(_, v)| v.is_finite()));
    }

    #[test]
    fn compute_is_deterministic(mapping in arb_mapping()) {
        let inc = build_validated(&mapping).unwrap();
        let engine = ComplexityEngine::default();
        prop_assert_eq!(engine.compute(&inc).unwrap(), engine.compute(&inc).unwrap());
    }
}
