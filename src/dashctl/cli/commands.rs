use super::render::{print_messages, render_response, OutputMode};
use super::setup::{Cli, Commands, DashboardCommands};
use clap::Parser;
use dashctl::api::{CmdResult, DashApi};
use dashctl::config::{self, DashConfig};
use dashctl::error::{DashError, Result};
use dashctl::service::http::HttpService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: DashApi<HttpService>,
    mode: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let Commands::Dashboard(cmd) = cli.command;
    match cmd {
        DashboardCommands::Post {
            title,
            description,
            graphs,
        } => {
            let result = ctx
                .api
                .post(title, description, graphs, std::io::stdin().lock())?;
            finish(&ctx, &result)
        }
        DashboardCommands::Update {
            dashboard_id,
            title,
            description,
            graphs,
        } => {
            let result = ctx.api.update(
                &dashboard_id,
                title,
                description,
                graphs,
                std::io::stdin().lock(),
            )?;
            finish(&ctx, &result)
        }
        DashboardCommands::Show { dashboard_id } => {
            let result = ctx.api.show(&dashboard_id)?;
            finish(&ctx, &result)
        }
        DashboardCommands::ShowAll => {
            let result = ctx.api.show_all()?;
            finish(&ctx, &result)
        }
        DashboardCommands::Pull {
            dashboard_id,
            filename,
        } => {
            let result = ctx.api.pull(&dashboard_id, &filename)?;
            finish(&ctx, &result)
        }
        DashboardCommands::PullAll { pull_dir } => {
            let result = ctx.api.pull_all(&pull_dir)?;
            finish_batch(&ctx, &result, result.summaries.len())
        }
        DashboardCommands::Push { files } => {
            let total = files.len();
            let result = ctx.api.push(&files)?;
            finish_batch(&ctx, &result, total)
        }
        DashboardCommands::NewFile { filename } => {
            let result = ctx.api.new_file(&filename)?;
            finish(&ctx, &result)
        }
        DashboardCommands::Delete { dashboard_id } => {
            let result = ctx.api.delete(&dashboard_id)?;
            finish(&ctx, &result)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "dashctl=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = load_config(cli.config.clone())?
        .with_env(|key| std::env::var(key).ok())
        .with_overrides(cli.overrides());
    tracing::debug!(api_host = %config.api_host, timeout = config.timeout_secs, "config loaded");

    Ok(AppContext {
        api: DashApi::new(HttpService::new(&config)?),
        mode: cli.output_mode(),
    })
}

/// Explicit path, then `$DASHCTL_CONFIG`, then the user config dir.
fn load_config(explicit: Option<PathBuf>) -> Result<DashConfig> {
    let from_env = std::env::var_os(config::ENV_CONFIG).map(PathBuf::from);
    match explicit.or(from_env) {
        Some(path) => {
            if !path.exists() {
                return Err(DashError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            DashConfig::load_file(&path)
        }
        None => match config::default_config_dir() {
            Some(dir) => DashConfig::load(dir),
            None => Ok(DashConfig::default()),
        },
    }
}

fn finish(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    print_messages(&result.messages, result.response.is_some());
    if let Some(body) = &result.response {
        println!("{}", render_response(body, ctx.mode));
    }
    Ok(())
}

fn finish_batch(ctx: &AppContext, result: &CmdResult, total: usize) -> Result<()> {
    finish(ctx, result)?;
    if result.has_failures() {
        return Err(DashError::PartialFailure {
            failed: result.failures.len(),
            total,
        });
    }
    Ok(())
}
