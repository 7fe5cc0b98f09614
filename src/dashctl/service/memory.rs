use super::DashboardService;
use crate::error::Result;
use crate::model::DashboardDraft;
use crate::response::Response;
use serde_json::{json, Value};
use std::cell::Cell;
use std::collections::HashSet;

const NOT_FOUND: &str = "No dashboard matches that dash_id.";

#[derive(Debug, Clone)]
struct StoredDash {
    id: String,
    draft: DashboardDraft,
}

/// In-memory service for testing and development.
///
/// Dashboards are listed in creation order, ids are sequential numbers, and
/// `get` responses carry the same server-only fields (`resource`, `url`) the
/// real service adds.
#[derive(Default)]
pub struct InMemoryService {
    dashes: Vec<StoredDash>,
    next_id: u64,
    warnings: Vec<String>,
    unreadable: HashSet<String>,
    calls: Cell<usize>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a dashboard without counting it as a call. Ids are assigned from 1.
    pub fn with_dashboard(mut self, title: &str, description: &str, graphs: Value) -> Self {
        self.insert(DashboardDraft::new(title, description, graphs));
        self
    }

    /// Attach these warnings to every response.
    pub fn with_warnings(mut self, warnings: &[&str]) -> Self {
        self.warnings = warnings.iter().map(|w| w.to_string()).collect();
        self
    }

    /// Make `get` fail for this id while it still shows up in listings.
    pub fn with_unreadable(mut self, id: &str) -> Self {
        self.unreadable.insert(id.to_string());
        self
    }

    /// Number of service calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    pub fn len(&self) -> usize {
        self.dashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dashes.is_empty()
    }

    /// The stored definition, bypassing the service contract.
    pub fn stored(&self, id: &str) -> Option<&DashboardDraft> {
        self.find(id).map(|d| &d.draft)
    }

    fn insert(&mut self, draft: DashboardDraft) -> String {
        self.next_id += 1;
        let id = self.next_id.to_string();
        self.dashes.push(StoredDash {
            id: id.clone(),
            draft,
        });
        id
    }

    fn find(&self, id: &str) -> Option<&StoredDash> {
        self.dashes.iter().find(|d| d.id == id)
    }

    fn record_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn respond(&self, mut body: Value) -> Response {
        if !self.warnings.is_empty() {
            body["warnings"] = json!(self.warnings);
        }
        Response::from_body(body)
    }

    fn not_found(&self) -> Response {
        self.respond(json!({ "errors": [NOT_FOUND] }))
    }
}

fn full_body(dash: &StoredDash) -> Value {
    json!({
        "id": dash.id.parse::<u64>().map(Value::from).unwrap_or_else(|_| json!(dash.id)),
        "title": dash.draft.title,
        "description": dash.draft.description,
        "graphs": dash.draft.graphs,
        "resource": format!("/api/v1/dash/{}", dash.id),
        "url": format!("/dash/dash/{}", dash.id),
    })
}

impl DashboardService for InMemoryService {
    fn get(&self, id: &str) -> Result<Response> {
        self.record_call();
        if self.unreadable.contains(id) {
            return Ok(self.respond(json!({ "errors": ["Dashboard is temporarily unavailable"] })));
        }
        Ok(match self.find(id) {
            Some(dash) => self.respond(json!({ "dash": full_body(dash) })),
            None => self.not_found(),
        })
    }

    fn get_all(&self) -> Result<Response> {
        self.record_call();
        let dashes: Vec<Value> = self
            .dashes
            .iter()
            .map(|d| {
                json!({
                    "id": d.id,
                    "title": d.draft.title,
                    "description": d.draft.description,
                    "resource": format!("/api/v1/dash/{}", d.id),
                })
            })
            .collect();
        Ok(self.respond(json!({ "dashes": dashes })))
    }

    fn create(&mut self, draft: &DashboardDraft) -> Result<Response> {
        self.record_call();
        let id = self.insert(draft.clone());
        let dash = self.find(&id).map(full_body).unwrap_or(Value::Null);
        Ok(self.respond(json!({ "dash": dash })))
    }

    fn update(&mut self, id: &str, draft: &DashboardDraft) -> Result<Response> {
        self.record_call();
        let Some(pos) = self.dashes.iter().position(|d| d.id == id) else {
            return Ok(self.not_found());
        };
        self.dashes[pos].draft = draft.clone();
        let dash = full_body(&self.dashes[pos]);
        Ok(self.respond(json!({ "dash": dash })))
    }

    fn delete(&mut self, id: &str) -> Result<Response> {
        self.record_call();
        let Some(pos) = self.dashes.iter().position(|d| d.id == id) else {
            return Ok(self.not_found());
        };
        self.dashes.remove(pos);
        if self.warnings.is_empty() {
            Ok(Response::empty())
        } else {
            Ok(self.respond(json!({})))
        }
    }
}
