use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DashboardSummary;
use crate::naming::FilenameAllocator;
use crate::response::Response;
use crate::service::DashboardService;
use std::fs;
use std::path::Path;

use super::pull::write_dashboard;

/// Writes every dashboard into `dir` as `<name>.json`.
///
/// The listing call must succeed, otherwise there is nothing to iterate. After
/// that each dashboard stands on its own: a failed fetch or write is recorded
/// in `failures` and the loop moves on.
pub fn run<S: DashboardService>(service: &S, dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // 1. List
    let body = service.get_all()?.report(&mut result)?;
    let summaries: Vec<DashboardSummary> = Response::payload(&body, "dashes")?;

    // 2. Target directory
    fs::create_dir_all(dir)?;
    let target = fs::canonicalize(dir)?;

    // 3. One file per dashboard, in listing order
    let mut names = FilenameAllocator::new();
    for summary in &summaries {
        let name = names.allocate(&summary.title, &summary.id);
        let path = target.join(format!("{}.json", name));

        match write_dashboard(service, &summary.id, &path, &mut result) {
            Ok(dash) => {
                result.written_files.push(path);
                result.dashboards.push(dash);
            }
            Err(error) => result.record_failure(format!("dashboard {}", summary.id), error),
        }
    }

    // 4. Summary
    let written = result.written_files.len();
    tracing::info!(written, failed = result.failures.len(), "pull_all finished");
    result.add_message(CmdMessage::success(format!(
        "Downloaded {} dashboards to {}",
        written,
        target.display()
    )));
    if result.has_failures() {
        result.add_message(CmdMessage::error(format!(
            "{} of {} dashboards could not be pulled",
            result.failures.len(),
            summaries.len()
        )));
    }

    result.summaries = summaries;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::error::DashError;
    use crate::service::memory::InMemoryService;
    use serde_json::json;

    fn file_names(result: &CmdResult) -> Vec<String> {
        result
            .written_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn empty_listing_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dashes");

        let res = run(&InMemoryService::new(), &target).unwrap();

        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
        assert!(res.written_files.is_empty());
        assert!(res.messages.iter().any(|m| m.content.contains("Downloaded 0 dashboards")));
    }

    #[test]
    fn derives_unique_names_in_listing_order() {
        let dir = tempfile::tempdir().unwrap();
        let svc = InMemoryService::new()
            .with_dashboard("Errors", "", json!([]))
            .with_dashboard("CPU Usage!!", "", json!([]))
            .with_dashboard("Errors", "", json!([]));

        let res = run(&svc, dir.path()).unwrap();

        assert_eq!(
            file_names(&res),
            vec!["errors.json", "cpu_usage.json", "errors-3.json"]
        );
        let third = codec::read_path(&dir.path().join("errors-3.json")).unwrap();
        assert_eq!(third.id.as_deref(), Some("3"));
    }

    #[test]
    fn existing_directory_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let svc = InMemoryService::new().with_dashboard("A", "", json!([]));

        run(&svc, dir.path()).unwrap();
        let res = run(&svc, dir.path()).unwrap();

        assert_eq!(file_names(&res), vec!["a.json"]);
    }

    #[test]
    fn file_in_the_way_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("taken");
        fs::write(&target, "").unwrap();

        let err = run(&InMemoryService::new(), &target).unwrap_err();
        assert!(matches!(err, DashError::Io(_)));
    }

    #[test]
    fn one_failing_dashboard_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let svc = InMemoryService::new()
            .with_dashboard("First", "", json!([]))
            .with_dashboard("Broken", "", json!([]))
            .with_dashboard("Last", "", json!([]))
            .with_unreadable("2");

        let res = run(&svc, dir.path()).unwrap();

        assert_eq!(file_names(&res), vec!["first.json", "last.json"]);
        assert_eq!(res.failures.len(), 1);
        assert_eq!(res.failures[0].item, "dashboard 2");
        assert!(matches!(res.failures[0].error, DashError::Remote { .. }));
        assert!(!dir.path().join("broken.json").exists());
    }

    #[test]
    fn reports_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let res = run(&InMemoryService::new(), dir.path()).unwrap();
        let expected = fs::canonicalize(dir.path()).unwrap();
        assert!(res
            .messages
            .iter()
            .any(|m| m.content.ends_with(&expected.display().to_string())));
    }
}
