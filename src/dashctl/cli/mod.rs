//! # CLI Behavior
//!
//! This is **one possible UI client** for dashctl, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. For the overall architecture, see the library docs.
//!
//! ## Verbs
//!
//! Everything lives under the `dashboard` group:
//!
//! ```text
//! dashctl dashboard post <title> <description> [graphs-json]
//! dashctl dashboard update <id> <title> <description> [graphs-json]
//! dashctl dashboard show <id>
//! dashctl dashboard show_all
//! dashctl dashboard pull <id> <file>
//! dashctl dashboard pull_all <dir>
//! dashctl dashboard push <file>...
//! dashctl dashboard new_file <file>
//! dashctl dashboard delete <id>
//! ```
//!
//! `post` and `update` read the graphs JSON from stdin when the argument is
//! left out, so `dashctl dashboard post T D < graphs.json` works.
//!
//! ## Exit Codes
//!
//! `0` on success, `1` on any fatal error. Batches (`pull_all`, `push`) print
//! every item's outcome first and exit `1` if any item failed.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-verb dispatch
//! - `render`: Output modes and message printing
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
pub use render::print_error;
