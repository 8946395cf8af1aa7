//! CLI argument definitions.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DATA_DIR_ENV;

/// wdb - look up graphics tablets and styli in the libwacom data files.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "wdb", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "WDB_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Directory holding the *.tablet files and the stylus catalog
    #[arg(long, short = 'd', global = true, value_name = "DIR", env = DATA_DIR_ENV)]
    pub datadir: Option<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/wdb/config.toml)
    #[arg(long, short = 'c', global = true, value_name = "FILE", env = "WDB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tablets in the database
    List(ListArgs),

    /// Show one tablet
    Show(ShowArgs),

    /// List the stylus catalog, or show one stylus
    Stylus(StylusArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show match keys and a database summary
    #[arg(long, short = 'l')]
    pub long: bool,
}

/// How to find the tablet for `wdb show`.
///
/// # Examples
///
/// ```bash
/// wdb show --usbid 056a:00b9
/// wdb show --name "Intuos4 6x9"
/// wdb show --match usb:0x56a:0xb9
/// wdb show --path /dev/input/event5 --fallback
/// ```
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("lookup").required(true).args(["usbid", "name", "path", "match_key"])))]
pub struct ShowArgs {
    /// USB vendor and product id in hex, e.g. 056a:00b9
    #[arg(long, value_name = "VID:PID", value_parser = parse_usb_id)]
    pub usbid: Option<(u32, u32)>,

    /// Exact product name
    #[arg(long)]
    pub name: Option<String>,

    /// Device node of a connected tablet
    #[arg(long, value_name = "DEVNODE")]
    pub path: Option<PathBuf>,

    /// Match key as stored in the database
    #[arg(long = "match", value_name = "KEY")]
    pub match_key: Option<String>,

    /// Use the generic descriptor for unknown tablets (with --path)
    #[arg(long, requires = "path")]
    pub fallback: bool,

    /// Read device properties from a JSON file instead of udev (with --path)
    #[arg(long, value_name = "FILE", requires = "path")]
    pub properties: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StylusArgs {
    /// Stylus id in hex, e.g. 0x802
    #[arg(value_parser = parse_stylus_id)]
    pub id: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex id '{s}': {e}"))
}

/// Parses `VID:PID` with hex ids.
pub fn parse_usb_id(s: &str) -> Result<(u32, u32), String> {
    let (vendor, product) = s
        .split_once(':')
        .ok_or_else(|| format!("expected VID:PID, got '{s}'"))?;
    Ok((parse_hex(vendor)?, parse_hex(product)?))
}

/// Parses a stylus id in hex.
pub fn parse_stylus_id(s: &str) -> Result<u32, String> {
    parse_hex(s)
}
