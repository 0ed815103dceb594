use anyhow::Result;
use skillbook_cli::config::Config;
use skillbook_cli::service::ValidateService;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Load configuration
    let config = Config::load()?;

    ValidateService::new(config).run()
}
