use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use foresight_core::{CATEGORICAL_COLUMNS, ProjectedFeatureRecord};

use crate::result::ArtifactError;

/// Numeric columns passed through after the one-hot blocks.
const NUMERIC_WIDTH: usize = 3;

/// One-hot encoding of the categorical columns followed by numeric passthrough.
///
/// Layout of an encoded row:
/// `[onehot(education) | onehot(location) | onehot(title) | onehot(industry) | age | tenure_months | remote_flag]`.
/// A category that was not seen at fit time encodes to an all-zero block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEncoder {
    pub education: Vec<String>,
    pub location: Vec<String>,
    pub title: Vec<String>,
    pub industry: Vec<String>,
}

impl FeatureEncoder {
    /// Vocabularies in categorical column order.
    pub fn vocabularies(&self) -> [&[String]; 4] {
        [&self.education, &self.location, &self.title, &self.industry]
    }

    /// Length of an encoded row.
    pub fn width(&self) -> usize {
        self.vocabularies().iter().map(|v| v.len()).sum::<usize>() + NUMERIC_WIDTH
    }

    /// Reject vocabularies with duplicate entries (the one-hot position would be ambiguous).
    pub fn validate(&self) -> Result<(), ArtifactError> {
        for (column, vocab) in CATEGORICAL_COLUMNS.iter().zip(self.vocabularies()) {
            let mut seen = HashSet::with_capacity(vocab.len());
            if let Some(dup) = vocab.iter().find(|c| !seen.insert(c.as_str())) {
                return Err(ArtifactError::invalid(format!(
                    "duplicate category {dup:?} in column {column}"
                )));
            }
        }
        Ok(())
    }

    pub fn encode(&self, record: &ProjectedFeatureRecord) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.width());

        for (vocab, value) in self.vocabularies().into_iter().zip(record.categorical()) {
            let start = row.len();
            row.resize(start + vocab.len(), 0.0);
            if let Some(pos) = vocab.iter().position(|c| c == value) {
                row[start + pos] = 1.0;
            }
        }

        row.extend_from_slice(&record.numeric());
        row
    }
}
