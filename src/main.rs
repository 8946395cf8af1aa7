//! wdb - tablet and stylus lookups in the libwacom data files.
//!
//! Provides both human-friendly and script-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io;

use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing::debug;

use wdb::cli::{self, Cli, Commands};
use wdb::config::{Settings, validate_data_dir};
use wdb::database::Database;
use wdb::device::{self, DeviceMetadata, fixed::FixedMetadata};
use wdb::error::{Result, WdbError};
use wdb::logging::init_logging;
use wdb::output::{
    DatabaseSummary, DeviceSummary, Output, OutputMode, StylusSummary, VersionInfo,
};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_logging(cli.use_json(), cli.verbose, cli.quiet);

    let output = OutputMode::from_cli(&cli).into_output();

    if let Err(e) = run(&cli, output.as_ref()) {
        output.error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: &dyn Output) -> Result<()> {
    match &cli.command {
        None => {
            print_quick_start(cli);
            Ok(())
        }
        Some(Commands::List(args)) => cmd_list(cli, output, args),
        Some(Commands::Show(args)) => cmd_show(cli, output, args),
        Some(Commands::Stylus(args)) => cmd_stylus(cli, output, args),
        Some(Commands::Version) => {
            output.version_info(&version_info());
            Ok(())
        }
        Some(Commands::Completions(args)) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "wdb", &mut io::stdout());
            Ok(())
        }
    }
}

// === Quick Start ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: QuickStartCommands,
    data_dir: &'static str,
}

#[derive(Serialize)]
struct QuickStartCommands {
    list_tablets: &'static str,
    by_usb_id: &'static str,
    by_name: &'static str,
    by_device_node: &'static str,
    styli: &'static str,
}

fn print_quick_start(cli: &Cli) {
    if cli.use_json() {
        let help = RobotQuickStart {
            tool: "wdb",
            version: build_info::VERSION,
            description: "Tablet and stylus descriptor lookups",
            commands: QuickStartCommands {
                list_tablets: "wdb list --robot",
                by_usb_id: "wdb show --usbid 056a:00b9 --robot",
                by_name: "wdb show --name \"Intuos4 6x9\" --robot",
                by_device_node: "wdb show --path /dev/input/event5 --fallback --robot",
                styli: "wdb stylus --robot",
            },
            data_dir: "--datadir DIR or WDB_DATADIR",
        };
        match serde_json::to_string_pretty(&help) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "Failed to serialize quick start"),
        }
        return;
    }

    use console::style;
    println!("{} {} - tablet database\n", style("wdb").bold().cyan(), build_info::VERSION);
    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!("  {}  List known tablets", style("wdb list").green());
    println!("  {}  Look up a USB tablet", style("wdb show --usbid 056a:00b9").green());
    println!("  {}  Look up a connected tablet", style("wdb show --path /dev/input/event5").green());
    println!("  {}  List the stylus catalog", style("wdb stylus").green());
    println!();
    println!("Run {} for full help", style("wdb --help").yellow());
}

// === Commands ===

fn open_database(cli: &Cli) -> Result<(Database, Settings)> {
    let settings = Settings::resolve(cli.datadir.as_deref(), cli.config.as_deref())?;
    validate_data_dir(&settings.load.data_dir)?;
    let db = Database::load(&settings.load);
    debug!(
        devices = db.device_count(),
        styli = db.stylus_count(),
        "Database ready"
    );
    Ok((db, settings))
}

fn cmd_list(cli: &Cli, output: &dyn Output, args: &cli::ListArgs) -> Result<()> {
    let (db, _) = open_database(cli)?;
    let devices: Vec<_> = db.devices().map(|d| DeviceSummary::new(d, &db)).collect();
    output.device_list(&DatabaseSummary::from(&db), &devices, args.long);
    Ok(())
}

fn cmd_show(cli: &Cli, output: &dyn Output, args: &cli::ShowArgs) -> Result<()> {
    let (db, settings) = open_database(cli)?;

    let device = if let Some((vendor_id, product_id)) = args.usbid {
        db.resolve_by_usb_id(vendor_id, product_id)?
    } else if let Some(name) = &args.name {
        db.resolve_by_name(name)?
    } else if let Some(key) = &args.match_key {
        db.lookup_by_match_key(key)
            .cloned()
            .ok_or(WdbError::UnknownModel { message: None })?
    } else if let Some(path) = &args.path {
        let metadata: Box<dyn DeviceMetadata> = match &args.properties {
            Some(file) => Box::new(FixedMetadata::load(file)?),
            None => device::system_metadata().ok_or_else(|| {
                WdbError::Other(
                    "Built without udev support; pass --properties FILE".to_string(),
                )
            })?,
        };
        db.resolve_by_path(metadata.as_ref(), path, args.fallback || settings.fallback)?
    } else {
        return Err(WdbError::Other("No lookup given".to_string()));
    };

    output.device_info(&DeviceSummary::new(&device, &db));
    Ok(())
}

fn cmd_stylus(cli: &Cli, output: &dyn Output, args: &cli::StylusArgs) -> Result<()> {
    let (db, _) = open_database(cli)?;

    match args.id {
        Some(id) => {
            let stylus = db.stylus(id).ok_or(WdbError::UnknownStylus(id))?;
            output.stylus_info(&StylusSummary::from(stylus));
        }
        None => {
            let styli: Vec<_> = db.styli().map(StylusSummary::from).collect();
            output.stylus_list(&styli);
        }
    }
    Ok(())
}

fn version_info() -> VersionInfo {
    VersionInfo {
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty() == "true",
        build_timestamp: build_info::build_timestamp(),
        rustc_version: build_info::rustc_semver(),
        target: build_info::target(),
        udev: cfg!(feature = "udev"),
    }
}
