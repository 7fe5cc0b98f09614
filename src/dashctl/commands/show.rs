use crate::codec;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::DashboardSummary;
use crate::response::Response;
use crate::service::DashboardService;

pub fn run<S: DashboardService>(service: &S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let body = service.get(id)?.report(&mut result)?;

    result.dashboards.push(codec::from_response(&body)?);
    Ok(result.with_response(body))
}

pub fn run_all<S: DashboardService>(service: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let body = service.get_all()?.report(&mut result)?;

    result.summaries = Response::payload::<Vec<DashboardSummary>>(&body, "dashes")?;
    Ok(result.with_response(body))
}
