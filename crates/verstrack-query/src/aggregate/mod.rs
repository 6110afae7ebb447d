//! Row-to-aggregate transformation.
//!
//! View rows are partitioned by the grouping key ([`partition`]) and each
//! group is folded into one [`VersionAggregate`] ([`fold`]). Aggregates come
//! out in first-seen key order.

pub mod fold;
pub mod partition;

use verstrack_core::config::{GroupingMode, QueryConfig};
use verstrack_core::errors::VerstrackResult;
use verstrack_core::models::{VersionAggregate, ViewSchema};
use verstrack_core::record::Record;
use verstrack_observability::aggregate_span;

use self::partition::{contiguous_runs, stable_groups};

/// Groups flat view rows into version aggregates. Stateless; one instance
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct GroupAggregator {
    schema: ViewSchema,
    mode: GroupingMode,
    verify_fanout: bool,
}

impl GroupAggregator {
    pub fn new(schema: ViewSchema, mode: GroupingMode) -> Self {
        Self {
            schema,
            mode,
            verify_fanout: false,
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.view_schema(), config.grouping).with_fanout_check(config.verify_fanout)
    }

    /// Reject groups whose rows disagree on version or project fields.
    pub fn with_fanout_check(mut self, enabled: bool) -> Self {
        self.verify_fanout = enabled;
        self
    }

    pub fn aggregate(&self, rows: &[Record]) -> VerstrackResult<Vec<VersionAggregate>> {
        let span = aggregate_span!(rows.len(), self.mode);
        let _guard = span.enter();

        let groups = match self.mode {
            GroupingMode::Stable => stable_groups(rows, &self.schema.group_key)?,
            GroupingMode::Contiguous => contiguous_runs(rows, &self.schema.group_key)?,
        };

        let mut aggregates = Vec::with_capacity(groups.len());
        for group in &groups {
            if self.verify_fanout {
                fold::verify_fanout(group, &self.schema)?;
            }
            aggregates.push(fold::fold_group(group, &self.schema)?);
        }

        tracing::debug!(
            rows = rows.len(),
            aggregates = aggregates.len(),
            "aggregated view rows"
        );
        Ok(aggregates)
    }
}

impl Default for GroupAggregator {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}
