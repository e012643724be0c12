use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use app_version_validator::config::{ValidatorConfig, config_path, log_path};
use app_version_validator::logging::{LogFormat, init_logging};
use app_version_validator::version::parser::parse_device_version;
use app_version_validator::version::sources::LocalVersionSource;
use app_version_validator::version::{AppVersionValidator, VersionError, VersionNumberType};

/// Exit code reported when the device version is up to date
const EXIT_UP_TO_DATE: u8 = 0;

/// Exit code reported when the check itself fails
const EXIT_FAILURE: u8 = 1;

/// Exit code reported when the device version is behind
const EXIT_UPDATE_REQUIRED: u8 = 2;

#[derive(Parser)]
#[command(name = "app-version-validator")]
#[command(version, about = "Checks whether an installed application must be updated")]
struct Cli {
    /// Log output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    /// Write logs to the data directory log file instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the device version against the remote version endpoint
    Check(CheckArgs),
    /// Parse a dotted version string and print its canonical form
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Remote version endpoint (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// JSON file holding the application metadata
    #[arg(long, conflicts_with = "device_version")]
    metadata: Option<PathBuf>,

    /// Device version string, used instead of a metadata file
    #[arg(long)]
    device_version: Option<String>,

    /// Component deciding whether an update is required (major, minor or patch)
    #[arg(long)]
    policy: Option<VersionNumberType>,

    /// Config file (defaults to config.json in the data directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Remote fetch timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_file = cli.log_file.then(log_path);
    let _guard = init_logging(cli.log_format, log_file.as_deref())?;

    match cli.command {
        Command::Check(args) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_check(args)),
        Command::Parse { input } => {
            let parsed = parse_device_version(&input)
                .with_context(|| format!("Failed to parse '{input}'"))?;
            println!("{parsed}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_config(args: &CheckArgs) -> anyhow::Result<ValidatorConfig> {
    let config = match &args.config {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ValidatorConfig::load_or_default(&config_path())?,
    };

    Ok(apply_overrides(config, args))
}

/// Command line values win over the config file
fn apply_overrides(mut config: ValidatorConfig, args: &CheckArgs) -> ValidatorConfig {
    if let Some(url) = &args.url {
        config.remote_url = Some(url.clone());
    }
    if let Some(policy) = args.policy {
        config.version_number_type = policy;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    config
}

fn exit_code(result: &Result<(), VersionError>) -> u8 {
    match result {
        Ok(()) => EXIT_UP_TO_DATE,
        Err(VersionError::UpdateRequired { .. }) => EXIT_UPDATE_REQUIRED,
        Err(_) => EXIT_FAILURE,
    }
}

async fn run_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let config = resolve_config(&args)?;

    let local = match (&args.metadata, &args.device_version) {
        (Some(path), _) => {
            LocalVersionSource::from_metadata_file(path).with_version_key(&config.version_key)
        }
        (None, Some(version)) => LocalVersionSource::from_version_string(version),
        (None, None) => LocalVersionSource::new(None),
    };

    let validator = AppVersionValidator::from_config(&config, Arc::new(local))?
        .context("No remote URL configured; pass --url or set remoteUrl in the config file")?;

    let result = validator.check_app_version().await;

    if args.json {
        let output = match &result {
            Ok(()) => json!({ "status": "upToDate" }),
            Err(VersionError::UpdateRequired { device, online }) => json!({
                "status": "updateRequired",
                "device": device,
                "online": online,
            }),
            Err(e) => json!({ "status": "error", "error": e.to_string() }),
        };
        println!("{output}");
    }

    match &result {
        Ok(()) => {
            if !args.json {
                println!("Up to date");
            }
        }
        Err(VersionError::UpdateRequired { device, online }) => {
            if !args.json {
                println!("Update required: {device} -> {online}");
            }
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(ExitCode::from(exit_code(&result)))
}
