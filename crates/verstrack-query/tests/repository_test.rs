//! End-to-end: ClientRepository over the seeded sample database, plus a
//! couple of hand-written row sources.

use std::sync::Mutex;

use chrono::{TimeZone, Utc};

use verstrack_core::config::{QueryConfig, StorageConfig};
use verstrack_core::errors::{QueryError, StorageError, VerstrackError, VerstrackResult};
use verstrack_core::models::{SortOrder, VersionChangeQuery};
use verstrack_core::record::{Record, Scalar};
use verstrack_core::traits::RowSource;
use verstrack_query::ClientRepository;
use verstrack_storage::SqliteRowSource;

fn sample_repository() -> (tempfile::TempDir, ClientRepository<SqliteRowSource>) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = verstrack_fixtures::create_sample_db(dir.path());
    let source = SqliteRowSource::open_path(&path, &StorageConfig::default()).expect("open");
    (dir, ClientRepository::with_defaults(source))
}

fn ids(records: impl IntoIterator<Item = Option<Scalar>>) -> Vec<i64> {
    records
        .into_iter()
        .filter_map(|id| id.and_then(|v| v.as_i64()))
        .collect()
}

fn alpha(order: SortOrder, limit: u32, skip: u32) -> VersionChangeQuery {
    VersionChangeQuery::new("alpha", "version_id", order, limit, skip)
}

#[tokio::test]
async fn versions_come_back_with_project_and_files() {
    let (_dir, repo) = sample_repository();
    let aggregates = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Asc, 50, 0))
        .await
        .unwrap();

    assert_eq!(ids(aggregates.iter().map(|a| a.id().cloned())), vec![1, 2, 3]);

    let v1 = &aggregates[0];
    assert_eq!(v1.version.get("name"), Some(&Scalar::Text("v1".into())));
    assert_eq!(
        v1.version.get("datetime"),
        Some(&Scalar::DateTime(Utc.timestamp_opt(1_600_000_000, 0).unwrap()))
    );
    assert_eq!(v1.project, Record::new().with("id", 1).with("name", "alpha"));
    let mut file_ids = ids(v1.linked_files.iter().map(|f| f.get("id").cloned()));
    file_ids.sort_unstable();
    assert_eq!(file_ids, vec![10, 11]);

    assert_eq!(aggregates[1].linked_files.len(), 1);
    assert!(aggregates[2].linked_files.is_empty());
}

#[tokio::test]
async fn file_datetimes_keep_fractional_seconds() {
    let (_dir, repo) = sample_repository();
    let aggregates = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Asc, 50, 0).with_filter("file_id", 10))
        .await
        .unwrap();
    assert_eq!(aggregates.len(), 1);
    let expected = Utc.timestamp_opt(1_600_000_001, 500_000_000).unwrap();
    assert_eq!(
        aggregates[0].linked_files[0].get("datetime"),
        Some(&Scalar::DateTime(expected))
    );
}

#[tokio::test]
async fn descending_order_reverses_versions() {
    let (_dir, repo) = sample_repository();
    let aggregates = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Desc, 50, 0))
        .await
        .unwrap();
    assert_eq!(ids(aggregates.iter().map(|a| a.id().cloned())), vec![3, 2, 1]);
}

#[tokio::test]
async fn filter_restricts_rows_before_grouping() {
    let (_dir, repo) = sample_repository();
    let aggregates = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Asc, 50, 0).with_filter("file_name", "a.txt"))
        .await
        .unwrap();
    assert_eq!(ids(aggregates.iter().map(|a| a.id().cloned())), vec![1, 2]);
    assert!(aggregates.iter().all(|a| a.linked_files.len() == 1));
}

#[tokio::test]
async fn pagination_counts_view_rows() {
    let (_dir, repo) = sample_repository();
    let first = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Asc, 2, 0))
        .await
        .unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].linked_files.len(), 2);

    let second = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Asc, 2, 2))
        .await
        .unwrap();
    assert_eq!(ids(second.iter().map(|a| a.id().cloned())), vec![2, 3]);
}

#[tokio::test]
async fn other_project_is_isolated() {
    let (_dir, repo) = sample_repository();
    let query = VersionChangeQuery::new("beta", "version_id", SortOrder::Asc, 50, 0);
    let aggregates = repo.fetch_version_changes_per_project(&query).await.unwrap();
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].project.get("name"), Some(&Scalar::Text("beta".into())));

    let unknown = VersionChangeQuery::new("gamma", "version_id", SortOrder::Asc, 50, 0);
    assert!(repo.fetch_version_changes_per_project(&unknown).await.unwrap().is_empty());
}

#[tokio::test]
async fn pass_through_fetchers_normalize_datetime_only() {
    let (_dir, repo) = sample_repository();

    let projects = repo.fetch_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0], Record::new().with("id", 1).with("name", "alpha"));

    assert_eq!(repo.fetch_project_splits().await.unwrap().len(), 3);

    let versions = repo.fetch_version_changes().await.unwrap();
    assert_eq!(versions.len(), 4);
    assert!(versions
        .iter()
        .all(|v| matches!(v.get("datetime"), Some(Scalar::DateTime(_)))));
    assert_eq!(versions[0].get("project_id"), Some(&Scalar::Int(1)));

    let files = repo.fetch_files().await.unwrap();
    assert_eq!(files.len(), 4);
    assert_eq!(
        files[0].columns().collect::<Vec<_>>(),
        vec!["id", "version_id", "name", "path", "datetime"]
    );
    assert!(matches!(files[0].get("datetime"), Some(Scalar::DateTime(_))));
}

#[tokio::test]
async fn operations_run_concurrently_on_one_repository() {
    let (_dir, repo) = sample_repository();
    let query = alpha(SortOrder::Asc, 50, 0);
    let (aggregates, splits, versions, files, projects) = tokio::join!(
        repo.fetch_version_changes_per_project(&query),
        repo.fetch_project_splits(),
        repo.fetch_version_changes(),
        repo.fetch_files(),
        repo.fetch_projects(),
    );
    assert_eq!(aggregates.unwrap().len(), 3);
    assert_eq!(splits.unwrap().len(), 3);
    assert_eq!(versions.unwrap().len(), 4);
    assert_eq!(files.unwrap().len(), 4);
    assert_eq!(projects.unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_queries_never_reach_the_source() {
    let source = RecordingSource::default();
    let repo = ClientRepository::with_defaults(source);

    let mut query = alpha(SortOrder::Asc, 10, 0);
    query.sort_field = "version_id DESC; --".into();
    let err = repo.fetch_version_changes_per_project(&query).await.unwrap_err();
    assert!(matches!(
        err,
        VerstrackError::QueryError(QueryError::DisallowedColumn { .. })
    ));

    let too_big = alpha(SortOrder::Asc, QueryConfig::default().max_limit + 1, 0);
    assert!(repo.fetch_version_changes_per_project(&too_big).await.is_err());

    let null_filter = alpha(SortOrder::Asc, 10, 0).with_filter("file_id", Scalar::Null);
    let err = repo.fetch_version_changes_per_project(&null_filter).await.unwrap_err();
    assert!(matches!(
        err,
        VerstrackError::QueryError(QueryError::PlaceholderMismatch { .. })
    ));

    assert!(repo.source().calls().is_empty());
}

#[tokio::test]
async fn dispatch_binds_positional_params() {
    let repo = ClientRepository::with_defaults(RecordingSource::default());
    let query = alpha(SortOrder::Desc, 25, 50).with_filter("version_name", "v2");
    repo.fetch_version_changes_per_project(&query).await.unwrap();
    repo.fetch_files().await.unwrap();

    let calls = repo.source().calls();
    assert_eq!(calls.len(), 2);
    let (sql, params) = &calls[0];
    assert!(sql.contains("ORDER BY version_id DESC"));
    assert_eq!(
        params,
        &vec![
            Scalar::Text("alpha".into()),
            Scalar::Text("v2".into()),
            Scalar::Int(25),
            Scalar::Int(50),
        ]
    );
    assert_eq!(calls[1], ("SELECT * FROM client_file".to_string(), vec![]));
}

#[tokio::test]
async fn source_errors_propagate_unchanged() {
    let repo = ClientRepository::with_defaults(FailingSource);
    let err = repo
        .fetch_version_changes_per_project(&alpha(SortOrder::Asc, 10, 0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        VerstrackError::StorageError(StorageError::SqliteError { ref message }) if message == "connection lost"
    ));
    assert!(matches!(
        repo.fetch_projects().await,
        Err(VerstrackError::StorageError(StorageError::SqliteError { .. }))
    ));
}

#[tokio::test]
async fn custom_datetime_field_is_normalized() {
    let source = RecordingSource::with_rows(vec![Record::new().with("id", 1).with("created", 60)]);
    let config = QueryConfig {
        datetime_field: "created".into(),
        ..QueryConfig::default()
    };
    let repo = ClientRepository::new(source, &config);
    let rows = repo.fetch_projects().await.unwrap();
    assert_eq!(
        rows[0].get("created"),
        Some(&Scalar::DateTime(Utc.timestamp_opt(60, 0).unwrap()))
    );
}

#[derive(Default)]
struct RecordingSource {
    rows: Vec<Record>,
    calls: Mutex<Vec<(String, Vec<Scalar>)>>,
}

impl RecordingSource {
    fn with_rows(rows: Vec<Record>) -> Self {
        Self {
            rows,
            calls: Mutex::default(),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<Scalar>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RowSource for RecordingSource {
    async fn fetch_all(&self, sql: &str, params: &[Scalar]) -> VerstrackResult<Vec<Record>> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        Ok(self.rows.clone())
    }
}

struct FailingSource;

impl RowSource for FailingSource {
    async fn fetch_all(&self, _sql: &str, _params: &[Scalar]) -> VerstrackResult<Vec<Record>> {
        Err(StorageError::SqliteError {
            message: "connection lost".into(),
        }
        .into())
    }
}
