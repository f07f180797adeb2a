use clap::Parser;
use nftctl::core::config::{self, CliOverrides, StartupLog};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nftctl", about = "Password-gated NFT deploy and airdrop wizard")]
struct Args {
    /// Config file (defaults to ~/.nftctl/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,

    /// Simulated latency of deploy/airdrop/upload, in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level {value:?}"))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut startup = StartupLog::default();
    let file_config = config::load_config(args.config.as_deref(), &mut startup)
        .map_err(std::io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_file: args.log_file,
            log_level: args.log_level,
            latency_ms: args.latency_ms,
        },
        &mut startup,
    );

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => {
            // The TUI has not taken the terminal yet
            eprintln!("nftctl: cannot open log file {}: {e}", resolved.log_file.display());
            for warning in startup.warnings() {
                eprintln!("nftctl: {warning}");
            }
        }
    }
    startup.replay();

    log::info!(
        "nftctl starting up (latency={}ms, timeout={}s)",
        resolved.latency_ms,
        resolved.timeout_secs
    );

    nftctl::tui::run(resolved)
}
