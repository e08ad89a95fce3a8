// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Feature row construction.
//!
//! The extractor produces an ordered, fixed-length feature vector. The
//! classifier was trained on a single-row table whose columns are named by
//! position (`rgb0`, `rgb1`, ...). [`FeatureRow`] keeps the vector itself as
//! the wire format and exposes the column names as a static schema, so the
//! table shape is a property of the type rather than something rebuilt per
//! call.

use ndarray::Array1;

/// Column name for the feature at `index` in the row schema.
#[must_use]
pub fn column_name(index: usize) -> String {
    format!("rgb{index}")
}

/// A single-row tabular view over a feature vector.
///
/// Values stay in extractor order; `column_name(i)` names `values()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Array1<f32>,
}

impl FeatureRow {
    /// Create a row from an extracted feature vector.
    #[must_use]
    pub const fn new(values: Array1<f32>) -> Self {
        Self { values }
    }

    /// Number of columns in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The ordered feature values.
    #[must_use]
    pub const fn values(&self) -> &Array1<f32> {
        &self.values
    }

    /// The column schema for this row, in value order.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        (0..self.len()).map(column_name).collect()
    }

    /// Iterate over `(column name, value)` pairs in value order.
    pub fn iter(&self) -> impl Iterator<Item = (String, f32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (column_name(i), v))
    }
}

impl From<Vec<f32>> for FeatureRow {
    fn from(values: Vec<f32>) -> Self {
        Self::new(Array1::from_vec(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "rgb0");
        assert_eq!(column_name(1023), "rgb1023");
    }

    #[test]
    fn test_row_column_count_matches_vector() {
        let row = FeatureRow::from(vec![0.1, 0.2, 0.3]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.columns().len(), row.len());
    }

    #[test]
    fn test_row_preserves_order() {
        let row = FeatureRow::from(vec![0.5, -1.5, 2.0]);
        let pairs: Vec<(String, f32)> = row.iter().collect();
        assert_eq!(pairs[0], ("rgb0".to_string(), 0.5));
        assert_eq!(pairs[1], ("rgb1".to_string(), -1.5));
        assert_eq!(pairs[2], ("rgb2".to_string(), 2.0));
    }

    #[test]
    fn test_empty_row() {
        let row = FeatureRow::from(Vec::new());
        assert!(row.is_empty());
        assert!(row.columns().is_empty());
    }
}
