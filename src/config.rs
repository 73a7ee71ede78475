/*!
 * Configuration handling for folder-to-llm
 */

use std::fs;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};
use clap_complete::Shell;

use crate::error::{FolderError, Result};
use crate::exclude::ExclusionMatcher;
use crate::types::{LlmTarget, OutputFormat};
use crate::writer::RenderOptions;

const EXAMPLES: &str = "\
Examples:
  folder-to-llm /path/to/folder                    # Basic usage with Claude XML output
  folder-to-llm /path/to/folder -l openai          # Format for OpenAI models
  folder-to-llm /path/to/folder -s                 # Skip outputting folder structure
  folder-to-llm /path/to/folder -y                 # Skip confirmation step
  folder-to-llm /path/to/folder -e node_modules/ .git/  # Show directories but exclude contents
  folder-to-llm /path/to/folder -o output.txt      # Save to file";

/// Command-line arguments for folder-to-llm
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "folder-to-llm",
    version,
    about = "Convert folder structure to LLM prompt format",
    after_help = EXAMPLES,
    disable_version_flag = true
)]
pub struct Args {
    /// Path to the folder to process
    #[clap(required_unless_present = "generate")]
    pub folder_path: Option<PathBuf>,

    /// Patterns to exclude (add '/' suffix for directory exclusion with structure preservation)
    #[clap(short, long, num_args = 1.., value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Output format type - only used with the claude target
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Target LLM format
    #[clap(short, long, value_enum, default_value_t = LlmTarget::Claude)]
    pub llm: LlmTarget,

    /// Skip outputting the folder structure
    #[clap(short, long)]
    pub skip_structure: bool,

    /// Skip confirmation step
    #[clap(short = 'y', long)]
    pub no_confirm: bool,

    /// Output file (default: print to stdout)
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[clap(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,
}

impl Args {
    /// Full command definition, with `-v/--version` in place of clap's `-V`
    pub fn build_command() -> Command {
        Self::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
    }

    /// Parse process arguments, exiting on `--help`, `--version` or misuse
    pub fn parse_args() -> Self {
        Self::from_matches(Self::build_command().get_matches())
    }

    /// Parse an explicit argument list
    pub fn try_parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::build_command().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    fn from_matches(matches: ArgMatches) -> Self {
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Absolute, canonical root directory
    pub root: PathBuf,

    /// Compiled exclusion patterns
    pub matcher: ExclusionMatcher,

    /// Output selection
    pub render: RenderOptions,

    /// Whether to ask before rendering
    pub confirm: bool,

    /// Output file, standard output when absent
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Create a validated configuration from command-line arguments
    ///
    /// Fails when the root is missing or not a directory, or when a
    /// pattern does not compile.
    pub fn from_args(args: Args) -> Result<Self> {
        let folder = args
            .folder_path
            .ok_or_else(|| crate::error!(InvalidArgument, "a folder path is required"))?;

        if !folder.is_dir() {
            return Err(FolderError::InvalidRoot(folder));
        }
        let root = fs::canonicalize(&folder)?;
        let matcher = ExclusionMatcher::new(&args.exclude)?;

        Ok(Self {
            root,
            matcher,
            render: RenderOptions {
                format: args.format,
                llm: args.llm,
                include_structure: !args.skip_structure,
            },
            confirm: !args.no_confirm,
            output_file: args.output,
        })
    }
}
