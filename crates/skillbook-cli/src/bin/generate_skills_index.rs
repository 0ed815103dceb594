use anyhow::Result;
use skillbook_cli::config::Config;
use skillbook_cli::service::IndexService;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Load configuration
    let config = Config::load()?;

    IndexService::new(config).run()
}
