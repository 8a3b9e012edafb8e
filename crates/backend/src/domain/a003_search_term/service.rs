use std::collections::BTreeMap;

use super::repository;
use crate::domain::a001_product;
use crate::shared::error::AppError;
use contracts::domain::a003_search_term::{SearchTerm, TopSearch, TopTermEntry};

/// Record a search occurrence. Called on every product-name search,
/// whether or not the search matched anything.
pub async fn record(raw_term: &str) -> Result<(), AppError> {
    let term = SearchTerm::normalize(raw_term);
    if term.is_empty() {
        return Err(AppError::Validation("Query is required".into()));
    }
    repository::record(&term).await?;
    Ok(())
}

/// Aggregate stored counters per normalized term, order by summed
/// count descending with the term itself (ascending) as the
/// deterministic tie-break, and keep the first `limit` entries.
pub fn rank_terms(records: Vec<SearchTerm>, limit: usize) -> Vec<SearchTerm> {
    let mut summed: BTreeMap<String, i64> = BTreeMap::new();
    for r in records {
        *summed.entry(SearchTerm::normalize(&r.term)).or_insert(0) += r.count;
    }

    // BTreeMap iteration is term-ascending; the stable sort keeps that
    // order inside equal counts.
    let mut ranked: Vec<SearchTerm> = summed
        .into_iter()
        .map(|(term, count)| SearchTerm { term, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Top-N report with each term resolved against the catalog: an exact
/// case-insensitive product-name match substitutes the canonical
/// spelling, otherwise the raw term is reported as-is.
pub async fn top_terms(limit: usize) -> Result<Vec<TopTermEntry>, AppError> {
    let ranked = rank_terms(repository::list_all().await?, limit);

    let mut entries = Vec::with_capacity(ranked.len());
    for item in ranked {
        let name = match a001_product::repository::find_by_exact_name_ignore_case(&item.term).await?
        {
            Some(product) => product.name,
            None => item.term,
        };
        entries.push(TopTermEntry {
            name,
            count: item.count,
        });
    }
    Ok(entries)
}

/// Single most-searched term, or the "No data yet" sentinel for an
/// empty store.
pub async fn top_term() -> Result<TopSearch, AppError> {
    let top = repository::top_one().await?;
    Ok(top.map(Into::into).unwrap_or_else(TopSearch::no_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(t: &str, count: i64) -> SearchTerm {
        SearchTerm {
            term: t.into(),
            count,
        }
    }

    #[test]
    fn ranking_orders_by_count_descending() {
        let ranked = rank_terms(
            vec![term("milk", 5), term("bread", 3), term("eggs", 3)],
            2,
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], term("milk", 5));
        // Tie between bread and eggs breaks on the term itself.
        assert_eq!(ranked[1], term("bread", 3));
    }

    #[test]
    fn duplicate_records_sum_into_one_entry() {
        let ranked = rank_terms(vec![term("milk", 2), term("Milk", 3)], 10);
        assert_eq!(ranked, vec![term("milk", 5)]);
    }

    #[test]
    fn limit_caps_the_report() {
        let records = (0..20).map(|i| term(&format!("t{:02}", i), i)).collect();
        assert_eq!(rank_terms(records, 10).len(), 10);
    }

    #[test]
    fn empty_store_ranks_empty() {
        assert!(rank_terms(vec![], 10).is_empty());
    }
}
