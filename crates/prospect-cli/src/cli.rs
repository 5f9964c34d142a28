//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prospector",
    version,
    about = "Import prospects from spreadsheets into your outreach platform",
    long_about = "Import prospects from spreadsheet exports (CSV, TSV, TXT, XLSX, XLS).\n\n\
                  Columns are matched to canonical prospect fields automatically;\n\
                  inspect the inferred mapping first, override it where needed, then\n\
                  import into a prospect list in batches of 100."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow prospect data (emails, phone numbers) in log output.
    ///
    /// Off by default: row-level values are redacted because logs tend to
    /// outlive the import and end up in shared places.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a spreadsheet and show the inferred column mapping.
    Inspect(InspectArgs),

    /// Import prospects from a spreadsheet into a list.
    Import(ImportArgs),

    /// List the canonical prospect fields and their known column aliases.
    Fields,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Spreadsheet to decode (.csv, .tsv, .txt, .xlsx, .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Spreadsheet to import (.csv, .tsv, .txt, .xlsx, .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Prospect list to import into.
    #[arg(long = "list-id", value_name = "ID")]
    pub list_id: i64,

    /// Campaign to attach imported prospects to.
    #[arg(long = "campaign-id", value_name = "ID")]
    pub campaign_id: Option<i64>,

    /// Skip prospects the platform already knows.
    #[arg(long = "add-only-if-new")]
    pub add_only_if_new: bool,

    /// Skip prospects that are already in another campaign.
    #[arg(long = "not-in-other-campaign")]
    pub not_in_other_campaign: bool,

    /// Override an inferred binding, e.g. --map email="Work E-mail".
    ///
    /// May be given multiple times. The column must exist in the file; the
    /// field name is one of the canonical names shown by `prospector fields`.
    #[arg(long = "map", value_name = "FIELD=COLUMN")]
    pub map: Vec<String>,

    /// Prospects per bulk-import request.
    #[arg(long = "batch-size", value_name = "N", default_value_t = 100)]
    pub batch_size: usize,

    /// Parse, map and batch, but do not submit anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Base URL of the platform API.
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "PROSPECT_API_URL",
        default_value = "https://api.manyreach.com/api/v2"
    )]
    pub api_url: String,

    /// API key; sent as the X-API-Key header.
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "PROSPECT_API_KEY",
        hide_env_values = true,
        default_value = ""
    )]
    pub api_key: String,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
