use anyhow::Context;
use clap::Parser;
use hello_pkgs::utils::logger;
use hello_pkgs::CliConfig;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let output = config
        .command
        .render(config.format)
        .with_context(|| format!("{:?} failed", config.command))?;

    println!("{}", output.trim_end());
    Ok(())
}
