// src/search/filter.rs
use crate::types::PropertyRecord;

/// Records priced at or under `budget`, in input order.
#[must_use]
pub fn linear_search(records: &[PropertyRecord], budget: f64) -> Vec<&PropertyRecord> {
    records.iter().filter(|r| r.price <= budget).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tests_support::priced;

    #[test]
    fn test_budget_is_inclusive_and_ordered() {
        let records = vec![priced(1, 500.0), priced(2, 100.0), priced(3, 300.0), priced(4, 301.0)];
        let ids: Vec<u64> = linear_search(&records, 300.0).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_nothing_affordable() {
        let records = vec![priced(1, 500.0)];
        assert!(linear_search(&records, 499.99).is_empty());
        assert!(linear_search(&[], 1e12).is_empty());
    }
}
