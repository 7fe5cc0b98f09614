//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all dashctl operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (graphs from an argument or a reader, paths)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no rendering and never writes to stdout or stderr.
//!
//! ## Generic Over DashboardService
//!
//! `DashApi<S: DashboardService>` is generic over the backend:
//! - Production: `DashApi<HttpService>`
//! - Testing: `DashApi<InMemoryService>`

use crate::commands::{self, helpers};
use crate::error::Result;
use crate::model::DashboardDraft;
use crate::service::DashboardService;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct DashApi<S: DashboardService> {
    service: S,
}

impl<S: DashboardService> DashApi<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Creates a dashboard. Graphs come from `graphs`, or all of `stdin` when
    /// `graphs` is `None`; they are parsed before anything is sent.
    pub fn post<R: Read>(
        &mut self,
        title: String,
        description: String,
        graphs: Option<String>,
        stdin: R,
    ) -> Result<commands::CmdResult> {
        let graphs = helpers::read_graphs(graphs, stdin)?;
        commands::post::run(
            &mut self.service,
            DashboardDraft::new(title, description, graphs),
        )
    }

    pub fn update<R: Read>(
        &mut self,
        id: &str,
        title: String,
        description: String,
        graphs: Option<String>,
        stdin: R,
    ) -> Result<commands::CmdResult> {
        let graphs = helpers::read_graphs(graphs, stdin)?;
        let draft = DashboardDraft::new(title, description, graphs);
        commands::update::run(&mut self.service, id, &draft)
    }

    pub fn show(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.service, id)
    }

    pub fn show_all(&self) -> Result<commands::CmdResult> {
        commands::show::run_all(&self.service)
    }

    pub fn pull(&self, id: &str, path: &Path) -> Result<commands::CmdResult> {
        commands::pull::run(&self.service, id, path)
    }

    pub fn pull_all(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::pull_all::run(&self.service, dir)
    }

    pub fn push(&mut self, paths: &[PathBuf]) -> Result<commands::CmdResult> {
        commands::push::run(&mut self.service, paths)
    }

    pub fn new_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::new_file::run(&mut self.service, path)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.service, id)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

pub use commands::{CmdMessage, CmdResult, ItemFailure, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::service::memory::InMemoryService;
    use serde_json::json;
    use std::io;

    #[test]
    fn post_reads_graphs_from_stdin_when_not_inline() {
        let mut api = DashApi::new(InMemoryService::new());
        api.post(
            "T".into(),
            "D".into(),
            None,
            r#"[{"metric":"cpu"}]"#.as_bytes(),
        )
        .unwrap();

        assert_eq!(
            api.service().stored("1").unwrap().graphs,
            json!([{"metric": "cpu"}])
        );
    }

    #[test]
    fn malformed_graphs_never_reach_the_service() {
        let mut api = DashApi::new(InMemoryService::new());
        let err = api
            .post("T".into(), "D".into(), Some("not json".into()), io::empty())
            .unwrap_err();

        assert!(matches!(err, DashError::MalformedData(_)));
        assert_eq!(api.service().call_count(), 0);
    }

    #[test]
    fn update_uses_inline_graphs() {
        let mut api = DashApi::new(InMemoryService::new().with_dashboard("A", "", json!([])));
        api.update("1", "B".into(), "d".into(), Some("[3]".into()), io::empty())
            .unwrap();

        assert_eq!(
            api.service().stored("1"),
            Some(&DashboardDraft::new("B", "d", json!([3])))
        );
    }

    #[test]
    fn update_with_bad_graphs_makes_no_call() {
        let mut api = DashApi::new(InMemoryService::new().with_dashboard("A", "", json!([])));
        let err = api
            .update("1", "B".into(), "".into(), None, "{".as_bytes())
            .unwrap_err();
        assert!(matches!(err, DashError::MalformedData(_)));
        assert_eq!(api.service().call_count(), 0);
    }

    #[test]
    fn show_is_repeatable() {
        let api = DashApi::new(InMemoryService::new().with_dashboard("A", "", json!([{"b": 1, "a": 2}])));
        let first = api.show("1").unwrap().response;
        let second = api.show("1").unwrap().response;
        assert_eq!(first, second);
    }
}
