use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::service::DashboardService;

pub fn run<S: DashboardService>(service: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let body = service.delete(id)?.report(&mut result)?;

    result.add_message(CmdMessage::success(format!("Dashboard deleted: {}", id)));
    if !body.is_null() {
        result.response = Some(body);
    }
    Ok(result)
}
