use super::render::OutputMode;
use clap::{Parser, Subcommand};
use dashctl::config::ConfigOverrides;
use std::path::PathBuf;

/// "0.1.0" when built outside git, "0.1.0@abc1234" (plus "-dirty") otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DIRTY: &str = env!("GIT_DIRTY");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else if GIT_DIRTY == "true" {
            format!("{}@{}-dirty", VERSION, GIT_HASH)
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "dashctl", bin_name = "dashctl", version = get_version())]
#[command(about = "Manage monitoring dashboards from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print responses (sorted keys, indented)
    #[arg(long, global = true, conflicts_with = "raw", help_heading = "Output")]
    pub pretty: bool,

    /// Print responses exactly as received
    #[arg(long, global = true, help_heading = "Output")]
    pub raw: bool,

    /// Config file (defaults to $DASHCTL_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Connection")]
    pub config: Option<PathBuf>,

    /// API key, overrides config and environment
    #[arg(long, global = true, help_heading = "Connection")]
    pub api_key: Option<String>,

    /// Application key, overrides config and environment
    #[arg(long, global = true, help_heading = "Connection")]
    pub app_key: Option<String>,

    /// Base URL of the service
    #[arg(long, global = true, value_name = "URL", help_heading = "Connection")]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", help_heading = "Connection")]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.pretty {
            OutputMode::Pretty
        } else if self.raw {
            OutputMode::Raw
        } else {
            OutputMode::Default
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            app_key: self.app_key.clone(),
            api_host: self.api_host.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, edit, and delete dashboards
    #[command(subcommand)]
    Dashboard(DashboardCommands),
}

#[derive(Subcommand, Debug)]
pub enum DashboardCommands {
    /// Create a dashboard
    Post {
        /// Title for the new dashboard
        title: String,

        /// Short description of the dashboard
        description: String,

        /// Graph definitions as a JSON string; read from stdin if omitted
        graphs: Option<String>,
    },

    /// Replace an existing dashboard with a new definition
    Update {
        /// Dashboard to replace
        dashboard_id: String,

        /// New title for the dashboard
        title: String,

        /// Short description of the dashboard
        description: String,

        /// Graph definitions as a JSON string; read from stdin if omitted
        graphs: Option<String>,
    },

    /// Show a dashboard definition
    Show {
        /// Dashboard to show
        dashboard_id: String,
    },

    /// Show a list of all dashboards
    #[command(name = "show_all", alias = "show-all")]
    ShowAll,

    /// Pull a dashboard on the server into a local file
    Pull {
        /// Dashboard to pull
        dashboard_id: String,

        /// File to pull the dashboard into
        filename: PathBuf,
    },

    /// Pull all dashboards into files in a directory
    #[command(name = "pull_all", alias = "pull-all")]
    PullAll {
        /// Directory to pull dashboards into (created if missing)
        pull_dir: PathBuf,
    },

    /// Push updates to dashboards from local files to the server
    Push {
        /// Dashboard files to push
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Create a new dashboard and put its contents in a file
    #[command(name = "new_file", alias = "new-file")]
    NewFile {
        /// Name of the file to create; also used as the dashboard title
        filename: PathBuf,
    },

    /// Delete a dashboard
    Delete {
        /// Dashboard to delete
        dashboard_id: String,
    },
}
