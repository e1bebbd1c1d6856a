//! # CLI Argument Definitions
//!
//! Subcommands, arguments and flags of the `gdx` tool.

use clap::{Args, Parser, Subcommand};
use guidex::domain::config::ExportFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gdx")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Windows interface GUID database: scan SDK headers, resolve interface names")]
pub struct Cli {
    /// Configuration file (defaults to `guidex.toml` in the working directory if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the interface name of a GUID, or the GUID itself when unknown
    Lookup {
        /// Interface GUID, with or without braces, any case
        guid: String,

        /// INI database to read instead of the embedded table
        #[arg(long)]
        ini: Option<PathBuf>,
    },
    /// Scan Windows SDK headers and export the interface database
    Scan(ScanArgs),
    /// Export the activatable WinRT classes registered on this machine (Windows only)
    Classes(ClassesArgs),
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// `Include/<version>` directory of the Windows SDK
    #[arg(long)]
    pub sdk: Option<PathBuf>,

    /// SDK build number (also selects the default SDK path)
    #[arg(long)]
    pub build: Option<u32>,

    /// Only scan the WinRT folders
    #[arg(long)]
    pub winrt_only: bool,

    /// Output directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output formats: ini, xml, html, rust (repeat or comma-separate)
    #[arg(short, long = "format", value_delimiter = ',')]
    pub formats: Vec<ExportFormat>,
}

#[derive(Debug, Args)]
pub struct ClassesArgs {
    /// Windows build used in the file names (defaults to the running build)
    #[arg(long)]
    pub build: Option<u32>,

    /// Output directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output formats: ini, xml, html (repeat or comma-separate)
    #[arg(short, long = "format", value_delimiter = ',')]
    pub formats: Vec<ExportFormat>,
}
