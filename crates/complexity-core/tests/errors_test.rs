use complexity_core::errors::*;

#[test]
fn insufficient_data_carries_dimensions() {
    let err = ComplexityError::InsufficientData {
        countries: 1,
        products: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains("1 countries"));
    assert!(msg.contains("2 products"));
}

#[test]
fn degenerate_input_carries_reason() {
    let err = ComplexityError::degenerate("country 'b' exports no products");
    assert!(err.to_string().contains("country 'b'"));
}

#[test]
fn numeric_instability_carries_stage() {
    let err = ComplexityError::numeric("country space", "schur did not converge");
    let msg = err.to_string();
    assert!(msg.contains("country space"));
    assert!(msg.contains("schur did not converge"));
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(
        ComplexityError::degenerate("x").error_code(),
        "DEGENERATE_INPUT"
    );
    assert_eq!(
        ComplexityError::InsufficientData {
            countries: 0,
            products: 0
        }
        .error_code(),
        "INSUFFICIENT_DATA"
    );
    assert_eq!(
        ComplexityError::numeric("s", "r").error_code(),
        "NUMERIC_INSTABILITY"
    );
}

#[test]
fn coded_string_prefixes_code() {
    let err = ComplexityError::degenerate("blank product name");
    assert_eq!(
        err.coded_string(),
        "[DEGENERATE_INPUT] degenerate input: blank product name"
    );
}

// --- From impls ---

#[test]
fn config_error_converts_and_keeps_code() {
    let err: ComplexityError = ConfigError::ValidationFailed {
        field: "eigen.tolerance".into(),
        message: "must be positive".into(),
    }
    .into();
    assert!(matches!(err, ComplexityError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("eigen.tolerance"));
}

#[test]
fn input_error_converts_and_keeps_code() {
    let err: ComplexityError = InputError::Malformed {
        source_name: "countries.txt".into(),
        line: 3,
        message: "missing ':'".into(),
    }
    .into();
    assert_eq!(err.error_code(), "INPUT_ERROR");
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn write_error_uses_output_code() {
    let err = InputError::Write {
        message: "broken pipe".into(),
    };
    assert_eq!(err.error_code(), "OUTPUT_ERROR");
}
