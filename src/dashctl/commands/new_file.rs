use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashError, Result};
use crate::model::DashboardDraft;
use crate::service::DashboardService;
use serde_json::json;
use std::path::Path;

use super::pull::write_dashboard;

/// Creates an empty dashboard titled after `path`, then pulls it into `path`.
///
/// The remote dashboard exists before the file does, so the file always
/// carries the server-assigned id.
pub fn run<S: DashboardService>(service: &mut S, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let title = path.display().to_string();
    let draft = DashboardDraft::new(
        title.clone(),
        format!("Description for {}", title),
        json!([]),
    );

    let response = service.create(&draft)?;
    let create_warnings = response.warnings().to_vec();
    let body = response.report(&mut result)?;
    let created = codec::from_response(&body)?;
    let id = created
        .id
        .ok_or_else(|| DashError::MalformedData("created dashboard has no id".to_string()))?;

    // Create warnings stay with the error if the local write fails
    let dash = write_dashboard(service, &id, path, &mut result)
        .map_err(|e| e.with_warnings(create_warnings))?;
    result.add_message(CmdMessage::success(format!(
        "Dashboard created ({}) and written to {}",
        id, title
    )));
    result.written_files.push(path.to_path_buf());
    result.dashboards.push(dash);
    Ok(result.with_response(body))
}
