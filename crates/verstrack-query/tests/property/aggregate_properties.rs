//! Property tests for grouping: aggregate count and order, determinism.

use proptest::prelude::*;

use verstrack_core::config::GroupingMode;
use verstrack_core::models::ViewSchema;
use verstrack_core::record::{Record, Scalar};
use verstrack_query::GroupAggregator;

fn view_row(version: i64, file: Option<i64>) -> Record {
    Record::new()
        .with("version_id", version)
        .with("version_datetime", version * 60)
        .with("project_id", 1)
        .with("project_name", "alpha")
        .with("file_id", file)
        .with("file_datetime", file.map(|f| f * 10))
}

fn first_seen(keys: &[i64]) -> Vec<i64> {
    let mut seen = Vec::new();
    for key in keys {
        if !seen.contains(key) {
            seen.push(*key);
        }
    }
    seen
}

fn aggregate_ids(aggregator: &GroupAggregator, rows: &[Record]) -> Vec<i64> {
    aggregator
        .aggregate(rows)
        .unwrap()
        .iter()
        .filter_map(|a| a.id().and_then(Scalar::as_i64))
        .collect()
}

fn rows_strategy() -> impl Strategy<Value = Vec<(i64, Option<i64>)>> {
    prop::collection::vec((0i64..8, prop::option::of(0i64..1000)), 0..40)
}

proptest! {
    #[test]
    fn one_aggregate_per_distinct_key_in_first_seen_order(input in rows_strategy()) {
        let rows: Vec<Record> = input.iter().map(|(v, f)| view_row(*v, *f)).collect();
        let keys: Vec<i64> = input.iter().map(|(v, _)| *v).collect();
        prop_assert_eq!(aggregate_ids(&GroupAggregator::default(), &rows), first_seen(&keys));
    }

    #[test]
    fn linked_files_count_non_null_file_ids(input in rows_strategy()) {
        let rows: Vec<Record> = input.iter().map(|(v, f)| view_row(*v, *f)).collect();
        let aggregates = GroupAggregator::default().aggregate(&rows).unwrap();
        let files: usize = aggregates.iter().map(|a| a.linked_files.len()).sum();
        prop_assert_eq!(files, input.iter().filter(|(_, f)| f.is_some()).count());
    }

    #[test]
    fn aggregation_is_deterministic(input in rows_strategy()) {
        let rows: Vec<Record> = input.iter().map(|(v, f)| view_row(*v, *f)).collect();
        let aggregator = GroupAggregator::default();
        prop_assert_eq!(aggregator.aggregate(&rows).unwrap(), aggregator.aggregate(&rows).unwrap());
    }

    #[test]
    fn modes_agree_on_key_ordered_rows(mut input in rows_strategy()) {
        input.sort_by_key(|(v, _)| *v);
        let rows: Vec<Record> = input.iter().map(|(v, f)| view_row(*v, *f)).collect();
        let stable = GroupAggregator::new(ViewSchema::default(), GroupingMode::Stable);
        let contiguous = GroupAggregator::new(ViewSchema::default(), GroupingMode::Contiguous);
        prop_assert_eq!(stable.aggregate(&rows).unwrap(), contiguous.aggregate(&rows).unwrap());
    }
}
