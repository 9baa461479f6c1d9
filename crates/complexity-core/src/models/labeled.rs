//! Matrices and series carrying their row/column labels.

use nalgebra::{DMatrix, DVector};
use serde::ser::{Serialize, Serializer};

use crate::errors::{ComplexityError, ComplexityResult};

/// Dense matrix with a label per row and per column.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    values: DMatrix<f64>,
}

impl LabeledMatrix {
    /// Fails with `DimensionMismatch` when the labels disagree with the shape.
    pub fn new(
        values: DMatrix<f64>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
    ) -> ComplexityResult<Self> {
        if row_labels.len() != values.nrows() {
            return Err(ComplexityError::DimensionMismatch {
                what: "row labels".to_string(),
                expected: values.nrows(),
                actual: row_labels.len(),
            });
        }
        if col_labels.len() != values.ncols() {
            return Err(ComplexityError::DimensionMismatch {
                what: "column labels".to_string(),
                expected: values.ncols(),
                actual: col_labels.len(),
            });
        }
        Ok(Self {
            row_labels,
            col_labels,
            values,
        })
    }

    pub(crate) fn from_parts(
        values: DMatrix<f64>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
    ) -> Self {
        Self {
            row_labels,
            col_labels,
            values,
        }
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Look up a cell by its labels.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.row_labels.iter().position(|l| l == row)?;
        let j = self.col_labels.iter().position(|l| l == col)?;
        Some(self.values[(i, j)])
    }

    /// Row-major copy of the values.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl Serialize for LabeledMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct View<'a> {
            rows: &'a [String],
            columns: &'a [String],
            values: Vec<Vec<f64>>,
        }

        View {
            rows: &self.row_labels,
            columns: &self.col_labels,
            values: self.to_rows(),
        }
        .serialize(serializer)
    }
}

/// Named sequence of `(label, value)` pairs in label order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LabeledSeries {
    name: String,
    entries: Vec<(String, f64)>,
}

impl LabeledSeries {
    /// Fails with `DimensionMismatch` when `labels` and `values` differ in length.
    pub fn new(
        name: impl Into<String>,
        labels: &[String],
        values: &DVector<f64>,
    ) -> ComplexityResult<Self> {
        let name = name.into();
        if labels.len() != values.len() {
            return Err(ComplexityError::DimensionMismatch {
                what: format!("{name} labels"),
                expected: values.len(),
                actual: labels.len(),
            });
        }
        Ok(Self {
            name,
            entries: labels.iter().cloned().zip(values.iter().copied()).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn values(&self) -> DVector<f64> {
        DVector::from_iterator(self.entries.len(), self.entries.iter().map(|(_, v)| *v))
    }

    /// Same labels, values replaced element-wise by `f`.
    pub fn map_values(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            name: self.name.clone(),
            entries: self.entries.iter().map(|(l, v)| (l.clone(), f(*v))).collect(),
        }
    }

    /// Entries sorted by descending value. Ties keep label order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matrix_rejects_mismatched_labels() {
        let err = LabeledMatrix::new(DMatrix::zeros(2, 3), labels(&["a"]), labels(&["x", "y", "z"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ComplexityError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn matrix_lookup_by_label() {
        let m = LabeledMatrix::new(
            DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]),
            labels(&["a", "b"]),
            labels(&["x", "y"]),
        )
        .unwrap();
        assert_eq!(m.get("b", "x"), Some(3.0));
        assert_eq!(m.get("c", "x"), None);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn matrix_serializes_row_major() {
        let m = LabeledMatrix::new(
            DMatrix::from_row_slice(1, 2, &[0.5, 1.0]),
            labels(&["a"]),
            labels(&["x", "y"]),
        )
        .unwrap();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["rows"], serde_json::json!(["a"]));
        assert_eq!(json["values"], serde_json::json!([[0.5, 1.0]]));
    }

    #[test]
    fn series_ranked_descending() {
        let s = LabeledSeries::new(
            "ECI",
            &labels(&["a", "b", "c"]),
            &DVector::from_vec(vec![0.1, 0.9, -0.3]),
        )
        .unwrap();
        let ranked: Vec<&str> = s.ranked().into_iter().map(|(l, _)| l).collect();
        assert_eq!(ranked, vec!["b", "a", "c"]);
        assert_eq!(s.get("c"), Some(-0.3));
    }

    #[test]
    fn series_rejects_length_mismatch() {
        let err = LabeledSeries::new("PCI", &labels(&["x"]), &DVector::zeros(2)).unwrap_err();
        assert!(err.to_string().contains("PCI labels"));
    }
}
