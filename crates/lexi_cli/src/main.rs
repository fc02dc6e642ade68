//! CLI entry point for the lexi tutoring backend.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load configuration from env files.
/// Order: 1) ~/.lexi/env  2) .lexi/env (cwd or parent)  3) .env (project root)
fn load_lexi_config() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".lexi").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let project_env = dir.join(".lexi").join("env");
            if project_env.exists() {
                let _ = dotenvy::from_path(&project_env);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_lexi_config();
    let cli = Cli::parse();
    output::init(cli.output);

    if cli.verbose {
        let _ = lexi_observability::init(
            lexi_observability::ObservabilityConfig::new("lexi-cli").with_log_level("debug"),
        );
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
