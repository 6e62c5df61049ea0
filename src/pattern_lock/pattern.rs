use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, duplicate-free sequence of selected dot indices.
///
/// New values are produced by [`Pattern::extended`]; an existing value is
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<usize>);

impl Pattern {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(index: usize) -> Self {
        Self(vec![index])
    }

    /// Builds a pattern from consumer-provided indices, dropping repeats so
    /// the no-duplicate invariant holds even for malformed input.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut out = Vec::with_capacity(indices.len());
        for &index in indices {
            if !out.contains(&index) {
                out.push(index);
            }
        }
        Self(out)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Pattern with `index` appended, or `None` when it is already present.
    pub fn extended(&self, index: usize) -> Option<Self> {
        if self.contains(index) {
            return None;
        }
        let mut next = self.0.clone();
        next.push(index);
        Some(Self(next))
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for Pattern {
    fn from(value: Vec<usize>) -> Self {
        Self::from_indices(&value)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_pattern(&self.0))
    }
}

/// Display form used by the demo: 1-based indices concatenated, so
/// `[0, 4, 8]` becomes `"159"`.
pub fn format_pattern(indices: &[usize]) -> String {
    indices.iter().map(|index| (index + 1).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_based_digits() {
        assert_eq!(format_pattern(&[0, 4, 8]), "159");
        assert_eq!(format_pattern(&[]), "");
        assert_eq!(Pattern::from(vec![2, 1, 0]).to_string(), "321");
    }

    #[test]
    fn extended_rejects_repeats() {
        let pattern = Pattern::single(2);
        let next = pattern.extended(5).unwrap();
        assert_eq!(next.indices(), &[2, 5]);
        assert_eq!(next.extended(2), None);
        assert_eq!(pattern.indices(), &[2]);
    }

    #[test]
    fn from_indices_drops_duplicates_keeping_first_occurrence() {
        let pattern = Pattern::from_indices(&[3, 1, 3, 0, 1]);
        assert_eq!(pattern.indices(), &[3, 1, 0]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&Pattern::from(vec![0, 4, 8])).unwrap();
        assert_eq!(json, "[0,4,8]");
    }
}
