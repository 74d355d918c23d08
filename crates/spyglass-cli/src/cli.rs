//! Command-line interface for the spyglass utility
//!
//! Provides a CLI to classify Mermaid.js diagram source, scan Markdown
//! documents for diagram blocks, and resolve theme-aware renderer
//! configuration.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::report::{format_record, format_summary, ScanRecord};
use crate::scanner::extract_fenced_blocks;
use spyglass::config::{resolve_config, ConfigFragments};
use spyglass::core::logging::init_logging;
use spyglass::core::ThemeMode;
use spyglass::detect::is_mermaid_code;

/// Spyglass - Find and classify Mermaid.js diagram blocks in documentation
#[derive(Parser)]
#[command(name = "spyglass")]
#[command(about = "A Rust utility to find and classify Mermaid.js diagram blocks in docs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify input as Mermaid diagram source or not
    Detect {
        /// Input file to analyze (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Scan a Markdown document for fenced blocks containing Mermaid source
    Scan {
        /// Markdown file to scan (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Resolve the renderer configuration for a theme mode
    Config {
        /// Theme mode to resolve for
        #[arg(long, value_enum, default_value_t = ModeChoice::Light)]
        mode: ModeChoice,

        /// Light-mode config fragment (JSON file)
        #[arg(long)]
        light: Option<PathBuf>,

        /// Dark-mode config fragment (JSON file)
        #[arg(long)]
        dark: Option<PathBuf>,

        /// Direct-override config (JSON file); wins over everything else
        #[arg(long = "override")]
        override_config: Option<PathBuf>,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

/// Theme modes accepted on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ModeChoice {
    #[default]
    Light,
    Dark,
}

impl From<ModeChoice> for ThemeMode {
    fn from(value: ModeChoice) -> Self {
        match value {
            ModeChoice::Light => ThemeMode::Light,
            ModeChoice::Dark => ThemeMode::Dark,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
pub struct SpyglassApp;

impl SpyglassApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level = std::env::var("SPYGLASS_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format = std::env::var("SPYGLASS_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Spyglass v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Detect { input } => self.detect_command(input, cli.verbose),
            Commands::Scan { input, json, color } => {
                self.scan_command(input, json, color, cli.verbose)
            }
            Commands::Config {
                mode,
                light,
                dark,
                override_config,
                compact,
            } => self.config_command(mode, light, dark, override_config, compact),
        }
    }

    /// Handle the detect command
    fn detect_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        if is_mermaid_code(&content) {
            println!("mermaid");
            Ok(())
        } else {
            Err(anyhow!("input is not Mermaid diagram source"))
        }
    }

    /// Handle the scan command
    fn scan_command(
        &self,
        input: Option<PathBuf>,
        json: bool,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let records: Vec<ScanRecord> = extract_fenced_blocks(&content)
            .into_iter()
            .map(|block| ScanRecord {
                line: block.line,
                language: block.language,
                mermaid: is_mermaid_code(&block.text),
            })
            .collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        let colorize = self.should_colorize(color);
        for record in &records {
            println!("{}", format_record(record, colorize));
        }
        println!("{}", format_summary(&records));

        Ok(())
    }

    /// Handle the config command
    fn config_command(
        &self,
        mode: ModeChoice,
        light: Option<PathBuf>,
        dark: Option<PathBuf>,
        override_config: Option<PathBuf>,
        compact: bool,
    ) -> Result<()> {
        let read_fragment = |path: &Option<PathBuf>| -> Result<Option<String>> {
            path.as_ref()
                .map(|p| {
                    fs::read_to_string(p)
                        .with_context(|| format!("Failed to read fragment: {}", p.display()))
                })
                .transpose()
        };

        let override_raw = read_fragment(&override_config)?;
        let light_raw = read_fragment(&light)?;
        let dark_raw = read_fragment(&dark)?;

        let fragments = ConfigFragments::from_json(
            override_raw.as_deref(),
            light_raw.as_deref(),
            dark_raw.as_deref(),
        )?;

        let resolved = resolve_config(mode.into(), &fragments);

        let output = if compact {
            serde_json::to_string(&resolved)?
        } else {
            serde_json::to_string_pretty(&resolved)?
        };
        println!("{}", output);

        Ok(())
    }

    /// Determine whether to colorize output
    fn should_colorize(&self, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                crossterm::tty::IsTty::is_tty(&std::io::stdout())
            }
        }
    }

    /// Read input from a file or stdin
    fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            None => self.read_stdin(),
            Some(path) if path.to_str() == Some("-") => self.read_stdin(),
            Some(path) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
        }
    }

    fn read_stdin(&self) -> Result<String> {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }
}

impl Default for SpyglassApp {
    fn default() -> Self {
        Self::new()
    }
}
