use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Dashboard;
use crate::service::DashboardService;
use std::path::{Path, PathBuf};

/// Updates the remote dashboard named by each file's `id`, in the given order.
///
/// Files are independent: a malformed file or a rejected update is recorded
/// in `failures` and the next file is still pushed. Pushing never creates a
/// dashboard; an unknown `id` is an error from the service.
pub fn run<S: DashboardService>(service: &mut S, paths: &[PathBuf]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut pushed = 0;

    for path in paths {
        match push_file(service, path, &mut result) {
            Ok(dash) => {
                pushed += 1;
                result.add_message(CmdMessage::info(format!(
                    "Pushed {} to dashboard {}",
                    path.display(),
                    dash.id.as_deref().unwrap_or("?")
                )));
                result.dashboards.push(dash);
            }
            Err(error) => result.record_failure(path.display().to_string(), error),
        }
    }

    tracing::info!(pushed, failed = result.failures.len(), "push finished");
    result.add_message(CmdMessage::success(format!(
        "Pushed {} of {} dashboards",
        pushed,
        paths.len()
    )));
    Ok(result)
}

fn push_file<S: DashboardService>(
    service: &mut S,
    path: &Path,
    result: &mut CmdResult,
) -> Result<Dashboard> {
    let dash = codec::read_path(path)?;
    let id = dash.id.as_deref().unwrap_or_default();
    service.update(id, &dash.to_draft())?.report(result)?;
    Ok(dash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::service::memory::InMemoryService;
    use serde_json::json;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn updates_remote_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = InMemoryService::new().with_dashboard("Old", "", json!([]));
        let file = write(
            dir.path(),
            "cpu.json",
            r#"{"id": "1", "title": "New", "description": "D", "graphs": [{"q": "x"}]}"#,
        );

        let res = run(&mut svc, &[file]).unwrap();

        assert!(!res.has_failures());
        let stored = svc.stored("1").unwrap();
        assert_eq!(stored.title, "New");
        assert_eq!(stored.graphs, json!([{"q": "x"}]));
    }

    #[test]
    fn unknown_id_is_remote_error_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = InMemoryService::new();
        let file = write(
            dir.path(),
            "ghost.json",
            r#"{"id": "nonexistent", "title": "T", "description": "D", "graphs": []}"#,
        );

        let res = run(&mut svc, &[file]).unwrap();

        assert_eq!(res.failures.len(), 1);
        assert!(matches!(res.failures[0].error, DashError::Remote { .. }));
        assert!(svc.is_empty());
    }

    #[test]
    fn bad_files_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let mut svc = InMemoryService::new()
            .with_dashboard("A", "", json!([]))
            .with_dashboard("B", "", json!([]));
        let files = vec![
            write(dir.path(), "broken.json", "not json"),
            write(
                dir.path(),
                "no_id.json",
                r#"{"title": "T", "description": "D", "graphs": []}"#,
            ),
            dir.path().join("missing.json"),
            write(
                dir.path(),
                "b.json",
                r#"{"id": 2, "title": "B2", "description": "", "graphs": []}"#,
            ),
        ];

        let res = run(&mut svc, &files).unwrap();

        assert_eq!(res.failures.len(), 3);
        assert!(matches!(res.failures[0].error, DashError::MalformedData(_)));
        assert!(matches!(res.failures[1].error, DashError::MalformedData(_)));
        assert!(matches!(res.failures[2].error, DashError::Io(_)));
        assert_eq!(svc.stored("2").unwrap().title, "B2");
        assert!(res.messages.iter().any(|m| m.content == "Pushed 1 of 4 dashboards"));
    }
}
