//! ClientRepository: the five read operations over the client schema.

use tracing::Instrument;

use verstrack_core::config::QueryConfig;
use verstrack_core::constants::{
    FILE_TABLE, PROJECT_SPLIT_TABLE, PROJECT_TABLE, VERSION_CHANGE_TABLE,
};
use verstrack_core::errors::VerstrackResult;
use verstrack_core::models::{VersionAggregate, VersionChangeQuery};
use verstrack_core::record::{normalize_datetime, Record};
use verstrack_core::traits::RowSource;
use verstrack_observability::fetch_span;
use verstrack_observability::tracing_setup::spans::operations;

use crate::aggregate::GroupAggregator;
use crate::sql::{ColumnAllowList, PreparedQuery};

/// Read-only access to projects, splits, versions and files.
///
/// Holds no mutable state: every operation takes `&self` and is a pure
/// function of what the row source returns. Row-source errors are returned
/// unchanged.
pub struct ClientRepository<S: RowSource> {
    source: S,
    allow_list: ColumnAllowList,
    aggregator: GroupAggregator,
    max_limit: u32,
    datetime_field: String,
}

impl<S: RowSource> ClientRepository<S> {
    pub fn new(source: S, config: &QueryConfig) -> Self {
        Self {
            source,
            allow_list: ColumnAllowList::from_config(config),
            aggregator: GroupAggregator::from_config(config),
            max_limit: config.max_limit,
            datetime_field: config.datetime_field.clone(),
        }
    }

    pub fn with_defaults(source: S) -> Self {
        Self::new(source, &QueryConfig::default())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// One page of a project's versions, each with its project and linked files.
    ///
    /// `limit`/`skip` page over view rows, so a version whose files straddle a
    /// page boundary appears on both pages with a partial file list.
    pub async fn fetch_version_changes_per_project(
        &self,
        query: &VersionChangeQuery,
    ) -> VerstrackResult<Vec<VersionAggregate>> {
        let span = fetch_span!(operations::VERSION_CHANGES_PER_PROJECT, query.identifier);
        let prepared = PreparedQuery::version_changes(query, &self.allow_list, self.max_limit)?;
        let rows = self.dispatch(&prepared).instrument(span.clone()).await?;
        let _guard = span.enter();
        self.aggregator.aggregate(&rows)
    }

    pub async fn fetch_project_splits(&self) -> VerstrackResult<Vec<Record>> {
        self.fetch_table(PROJECT_SPLIT_TABLE, operations::PROJECT_SPLITS)
            .await
    }

    pub async fn fetch_version_changes(&self) -> VerstrackResult<Vec<Record>> {
        self.fetch_table(VERSION_CHANGE_TABLE, operations::VERSION_CHANGES)
            .await
    }

    pub async fn fetch_files(&self) -> VerstrackResult<Vec<Record>> {
        self.fetch_table(FILE_TABLE, operations::FILES).await
    }

    pub async fn fetch_projects(&self) -> VerstrackResult<Vec<Record>> {
        self.fetch_table(PROJECT_TABLE, operations::PROJECTS).await
    }

    /// Every row of `table`, ungrouped, with the datetime field normalized.
    async fn fetch_table(&self, table: &str, operation: &str) -> VerstrackResult<Vec<Record>> {
        let prepared = PreparedQuery::table(table);
        let rows = self
            .dispatch(&prepared)
            .instrument(fetch_span!(operation))
            .await?;
        let normalized = rows
            .into_iter()
            .map(|row| normalize_datetime(row, &self.datetime_field))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(normalized)
    }

    async fn dispatch(&self, prepared: &PreparedQuery) -> VerstrackResult<Vec<Record>> {
        tracing::debug!(
            sql = prepared.sql(),
            params = prepared.params().len(),
            "dispatching query"
        );
        self.source.fetch_all(prepared.sql(), prepared.params()).await
    }
}
