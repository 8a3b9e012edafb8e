use serde::{Deserialize, Serialize};

/// Per-term search counter. The normalized (lower-cased) term is the
/// identity: at most one record exists per term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub term: String,
    pub count: i64,
}

impl SearchTerm {
    /// Lower-case normalization applied before any store access.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn first_occurrence(raw: &str) -> Self {
        Self {
            term: Self::normalize(raw),
            count: 1,
        }
    }
}

/// Single most-searched term, with a sentinel for an empty store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSearch {
    pub term: String,
    pub count: i64,
}

impl TopSearch {
    pub fn no_data() -> Self {
        Self {
            term: "No data yet".into(),
            count: 0,
        }
    }
}

impl From<SearchTerm> for TopSearch {
    fn from(t: SearchTerm) -> Self {
        Self {
            term: t.term,
            count: t.count,
        }
    }
}

/// Top-N report row. The display name is the canonical product name
/// when the term matches a product exactly, otherwise the raw term;
/// the wire field stays `isim` for compatibility with the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTermEntry {
    #[serde(rename = "isim")]
    pub name: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(SearchTerm::normalize("  MILK "), "milk");
        assert_eq!(SearchTerm::normalize("Süt"), "süt");
    }

    #[test]
    fn first_occurrence_starts_at_one() {
        let t = SearchTerm::first_occurrence("Bread");
        assert_eq!(t.term, "bread");
        assert_eq!(t.count, 1);
    }
}
