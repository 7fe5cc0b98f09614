use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DashboardDraft;
use crate::service::DashboardService;

pub fn run<S: DashboardService>(service: &mut S, draft: DashboardDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let body = service.create(&draft)?.report(&mut result)?;

    let dash = codec::from_response(&body)?;
    result.add_message(CmdMessage::success(format!(
        "Dashboard created ({}): {}",
        dash.id.as_deref().unwrap_or("?"),
        dash.title
    )));
    result.dashboards.push(dash);
    Ok(result.with_response(body))
}
