use complexity_core::config::EigenConfig;
use complexity_core::errors::ComplexityErrorCode;
use complexity_core::traits::IComplexityEngine;
use complexity_core::{ComplexityError, IncidenceMatrix};
use complexity_engine::{spaces, ComplexityEngine};
use complexity_incidence::{build, build_validated};
use nalgebra::DMatrix;
use test_fixtures::{assert_close_up_to_sign, scenario};

fn incidence_for(name: &str) -> IncidenceMatrix {
    build_validated(&scenario(name).countries).unwrap()
}

// ── Normalizations ─────────────────────────────────────────────────────────

#[test]
fn triangle_breakdown_matches_hand_computation() {
    let engine = ComplexityEngine::default();
    let inc = incidence_for("triangle");
    let bd = engine.breakdown(&inc).unwrap();

    assert_eq!(bd.diversity.as_slice(), &[2.0, 2.0, 2.0]);
    assert_eq!(bd.ubiquity.as_slice(), &[2.0, 2.0, 2.0]);

    let half = inc.matrix() * 0.5;
    assert_eq!(bd.a, half);
    assert_eq!(bd.b, half);
}

#[test]
fn full_two_by_two_normalizations_are_constant() {
    let engine = ComplexityEngine::default();
    let bd = engine.breakdown(&incidence_for("full_two_by_two")).unwrap();
    assert_eq!(bd.diversity.as_slice(), &[2.0, 2.0]);
    assert_eq!(bd.ubiquity.as_slice(), &[2.0, 2.0]);
    assert_eq!(bd.a, DMatrix::from_element(2, 2, 0.5));
    assert_eq!(bd.b, DMatrix::from_element(2, 2, 0.5));
}

// ── Spaces ─────────────────────────────────────────────────────────────────

#[test]
fn spaces_are_exactly_at_b_and_a_bt() {
    let engine = ComplexityEngine::default();
    let inc = incidence_for("nested");
    let bd = engine.breakdown(&inc).unwrap();
    let report = engine.compute(&inc).unwrap();

    assert_eq!(report.product_space.values(), &(bd.a.transpose() * &bd.b));
    assert_eq!(report.country_space.values(), &(&bd.a * bd.b.transpose()));
    assert_eq!(report.product_space.values(), &spaces::product_space(&bd.a, &bd.b));
    assert_eq!(report.product_space.nrows(), inc.n_products());
    assert_eq!(report.country_space.nrows(), inc.n_countries());
    assert_eq!(report.country_space.row_labels(), inc.countries());
    assert_eq!(report.product_space.col_labels(), inc.products());
}

#[test]
fn triangle_country_space_values() {
    let report = ComplexityEngine::default()
        .compute(&incidence_for("triangle"))
        .unwrap();
    let expected = DMatrix::from_row_slice(3, 3, &[0.5, 0.25, 0.25, 0.25, 0.5, 0.25, 0.25, 0.25, 0.5]);
    assert!((report.country_space.values() - &expected).norm() < 1e-12);
    assert!((report.product_space.values() - &expected).norm() < 1e-12);
}

// ── Indices ────────────────────────────────────────────────────────────────

#[test]
fn triangle_indices_span_the_degenerate_plane() {
    let report = ComplexityEngine::default()
        .compute(&incidence_for("triangle"))
        .unwrap();

    for series in [&report.eci, &report.pci] {
        assert_eq!(series.len(), 3);
        let v = series.values();
        assert!((v.norm() - 1.0).abs() < 1e-9);
        // Orthogonal to the trivial all-ones direction.
        assert!(v.sum().abs() < 1e-6);
    }
    assert_eq!(report.eci.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(report.pci.labels().collect::<Vec<_>>(), vec!["x", "y", "z"]);

    // Still an eigenvector for 0.25.
    let c = report.country_space.values();
    let v = report.eci.values();
    assert!((c * &v - &v * 0.25).norm() < 1e-6);
}

#[test]
fn nested_eci_orders_countries_by_diversity() {
    let s = scenario("nested");
    let report = ComplexityEngine::default()
        .compute(&build_validated(&s.countries).unwrap())
        .unwrap();

    let eci: Vec<f64> = report.eci.iter().map(|(_, v)| v).collect();
    assert_close_up_to_sign(&eci, &s.expected.eci_up_to_sign, 1e-6);
    let pci: Vec<f64> = report.pci.iter().map(|(_, v)| v).collect();
    assert_close_up_to_sign(&pci, &s.expected.pci_up_to_sign, 1e-6);

    let increasing = eci.windows(2).all(|w| w[0] < w[1]);
    let decreasing = eci.windows(2).all(|w| w[0] > w[1]);
    assert!(increasing || decreasing, "ECI not monotone: {eci:?}");
}

#[test]
fn full_two_by_two_has_defined_second_eigenvector() {
    let report = ComplexityEngine::default()
        .compute(&incidence_for("full_two_by_two"))
        .unwrap();
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let eci: Vec<f64> = report.eci.iter().map(|(_, v)| v).collect();
    assert_close_up_to_sign(&eci, &[h, -h], 1e-9);
    // First component is the phase pivot and is made positive.
    assert!(eci[0] > 0.0);
}

#[test]
fn disconnected_blocks_give_orthogonal_second_vector() {
    let engine = ComplexityEngine::default();
    let inc = incidence_for("disconnected");
    let (_, country_space) = engine.spaces(&inc).unwrap();
    let pairs = engine
        .solver()
        .leading_pairs(&country_space, 2, "country space")
        .unwrap();

    assert!((pairs[0].value.re - 1.0).abs() < 1e-9);
    assert!((pairs[1].value.re - 1.0).abs() < 1e-9);
    assert!(pairs[0].vector.dotc(&pairs[1].vector).norm() < 1e-9);

    let report = engine.compute(&inc).unwrap();
    assert!((report.eci.values().norm() - 1.0).abs() < 1e-9);
}

#[test]
fn compute_is_idempotent() {
    let engine = ComplexityEngine::default();
    let inc = incidence_for("nested");
    let first = engine.compute(&inc).unwrap();
    let second = engine.compute(&inc).unwrap();
    assert_eq!(first, second);
}

#[test]
fn trait_object_dispatch() {
    let engine: &dyn IComplexityEngine = &ComplexityEngine::new(&EigenConfig::default());
    let report = engine.compute(&incidence_for("uneven")).unwrap();
    assert_eq!(report.eci.len(), 2);
    assert_eq!(report.pci.len(), 3);
}

// ── Failures ───────────────────────────────────────────────────────────────

#[test]
fn unvalidated_empty_basket_is_degenerate() {
    let inc = build(&scenario("empty_basket").countries);
    let err = ComplexityEngine::default().compute(&inc).unwrap_err();
    assert!(matches!(err, ComplexityError::DegenerateInput { .. }));
    assert_eq!(err.error_code(), "DEGENERATE_INPUT");
}

#[test]
fn single_country_is_insufficient() {
    let inc = build(&scenario("single_country").countries);
    let err = ComplexityEngine::default().compute(&inc).unwrap_err();
    assert!(matches!(
        err,
        ComplexityError::InsufficientData {
            countries: 1,
            products: 2
        }
    ));
}

#[test]
fn single_product_is_insufficient() {
    let inc = IncidenceMatrix::new(
        DMatrix::from_element(3, 1, 1.0),
        vec!["a".into(), "b".into(), "c".into()],
        vec!["x".into()],
    )
    .unwrap();
    assert!(matches!(
        ComplexityEngine::default().compute(&inc),
        Err(ComplexityError::InsufficientData { products: 1, .. })
    ));
}

#[test]
fn starved_solver_reports_numeric_instability() {
    let config = EigenConfig {
        tolerance: Some(1e-300),
        max_iterations: Some(1),
        inverse_iterations: Some(1),
    };
    let engine = ComplexityEngine::new(&config);
    let err = engine.compute(&incidence_for("nested")).unwrap_err();
    assert!(
        matches!(err, ComplexityError::NumericInstability { .. }),
        "unexpected error {err:?}"
    );
}
