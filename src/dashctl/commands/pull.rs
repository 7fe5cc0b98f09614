use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Dashboard;
use crate::service::DashboardService;
use std::path::Path;

pub fn run<S: DashboardService>(service: &S, id: &str, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let dash = write_dashboard(service, id, path, &mut result)?;

    result.add_message(CmdMessage::success(format!(
        "Pulled dashboard {} into {}",
        id,
        path.display()
    )));
    result.written_files.push(path.to_path_buf());
    result.dashboards.push(dash);
    Ok(result)
}

/// Fetches dashboard `id` and stores its file form at `path`.
///
/// The file is only touched once the fetch succeeded.
pub(crate) fn write_dashboard<S: DashboardService>(
    service: &S,
    id: &str,
    path: &Path,
    result: &mut CmdResult,
) -> Result<Dashboard> {
    let body = service.get(id)?.report(result)?;
    let dash = codec::from_response(&body)?;
    codec::write_file(path, &dash)?;
    Ok(dash)
}
