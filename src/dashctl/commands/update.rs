use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DashboardDraft;
use crate::service::DashboardService;

/// Full replacement: title, description and graphs are always sent.
pub fn run<S: DashboardService>(
    service: &mut S,
    id: &str,
    draft: &DashboardDraft,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let body = service.update(id, draft)?.report(&mut result)?;

    result.add_message(CmdMessage::success(format!(
        "Dashboard updated ({}): {}",
        id, draft.title
    )));
    Ok(result.with_response(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::service::memory::InMemoryService;
    use serde_json::json;

    #[test]
    fn replaces_every_field() {
        let mut svc = InMemoryService::new().with_dashboard("Old", "old desc", json!([1, 2]));
        let draft = DashboardDraft::new("New", "", json!([]));

        run(&mut svc, "1", &draft).unwrap();

        assert_eq!(svc.stored("1"), Some(&draft));
    }

    #[test]
    fn unknown_id_is_remote_error() {
        let mut svc = InMemoryService::new();
        let err = run(&mut svc, "9", &DashboardDraft::new("T", "D", json!([]))).unwrap_err();
        assert!(matches!(err, DashError::Remote { .. }));
        assert!(svc.is_empty());
    }
}
