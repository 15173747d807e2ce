// SPDX-License-Identifier: MIT
//
// tinct — color contrast auditing and design-token export.
//
// This is the command-line caller that wires the crates together:
//
//   tinct-color  → hex / RGB / HSL conversion and validation
//   tinct-theme  → theme schema, defaults, contrast evaluation, auditing
//   tinct-export → CSS, Tailwind, SCSS, JSON and native token output
//
// Every subcommand is a straight pipeline:
//
//   file or stdin → Theme::from_json → [audit] → report / export → stdout
//
// Diagnostics go to stderr through tracing; stdout only carries results so
// output can be piped.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tinct_color::{is_hex_color, normalize_hex};
use tinct_export::{ExportFormat, ExportOptions, export};
use tinct_theme::contrast::WCAG_AA;
use tinct_theme::{
    AuditReport, PartialTheme, Theme, adjust_for_contrast, check_contrast, contrast_level,
    contrast_ratio, default_theme, merge_with_defaults, validate_and_fix_contrast,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "TINCT_LOG";

#[derive(Debug, Parser)]
#[command(name = "tinct", version, about = "Audit theme contrast and export design tokens")]
struct Cli {
    /// Log level used when `TINCT_LOG` is unset or invalid.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Repair every text/surface pair below WCAG AA and report the changes.
    Audit(AuditArgs),
    /// Print the measured contrast of every text/surface pair.
    Check(InputArgs),
    /// Render a theme as design tokens.
    Export(ExportArgs),
    /// Measure one foreground/background pair.
    Contrast(ContrastArgs),
    /// Print the built-in default theme as JSON.
    Defaults,
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Theme JSON file, or `-` for stdin.
    file: PathBuf,

    /// Accept a sparse document and fill everything from the defaults
    /// instead of requiring the core groups and colors.
    #[arg(long)]
    partial: bool,
}

#[derive(Debug, Args)]
struct AuditArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Write the repaired theme document here.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Exit with status 1 when any pair needed repair.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Args)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format.
    #[arg(long, short, default_value_t = ExportFormat::Css, conflicts_with = "all")]
    format: ExportFormat,

    /// Write every format into `--out-dir` under its conventional name.
    #[arg(long, requires = "out_dir")]
    all: bool,

    /// Target directory for `--all`.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Prefix prepended to every token name.
    #[arg(long)]
    prefix: Option<String>,

    /// Kotlin object / Swift enum / TypeScript type name.
    #[arg(long, default_value = tinct_export::DEFAULT_CLASS_NAME)]
    class_name: String,

    /// Repair contrast before exporting.
    #[arg(long)]
    audit: bool,
}

#[derive(Debug, Args)]
struct ContrastArgs {
    /// Foreground hex color.
    foreground: String,

    /// Background hex color.
    background: String,

    /// Ratio the pair should reach.
    #[arg(long, default_value_t = WCAG_AA)]
    target: f64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: LogLevel) {
    let default_level = level.as_directive();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Audit(args) => audit(&args),
        Command::Check(args) => {
            check(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Export(args) => {
            export_tokens(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Contrast(args) => contrast(&args),
        Command::Defaults => {
            println!("{}", default_theme().to_json_pretty()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ─── Input ──────────────────────────────────────────────────────────────────

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read theme from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_theme(input: &InputArgs) -> anyhow::Result<Theme> {
    let text = read_input(&input.file)?;
    let source = input.file.display();
    let theme = if input.partial {
        let partial = PartialTheme::from_json(&text)
            .with_context(|| format!("failed to parse {source}"))?;
        merge_with_defaults(partial)
    } else {
        Theme::from_json(&text).with_context(|| format!("failed to load {source}"))?
    };
    debug!(name = %theme.name, %source, "theme ready");
    Ok(theme)
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn audit(args: &AuditArgs) -> anyhow::Result<ExitCode> {
    let theme = load_theme(&args.input)?;
    let report = validate_and_fix_contrast(&theme);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.adjustments)?);
    } else {
        print!("{}", render_report(&report));
    }

    if let Some(path) = &args.output {
        fs::write(path, report.theme.to_json_pretty()? + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "repaired theme written");
    }

    if args.check && !report.is_compliant() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();
    let name = &report.theme.name;
    if report.is_compliant() {
        let _ = writeln!(out, "{name}: every pair meets WCAG AA");
        return out;
    }
    let _ = writeln!(out, "{name}: {} adjustment(s)", report.adjustments.len());
    for adj in &report.adjustments {
        let _ = writeln!(
            out,
            "  {:<5}  {:<11}  {} ({:.2}:1) -> {} ({:.2}:1)",
            adj.mode.as_str(),
            adj.pair,
            adj.original,
            adj.original_ratio,
            adj.fixed,
            adj.fixed_ratio
        );
    }
    out
}

fn check(args: &InputArgs) -> anyhow::Result<()> {
    let theme = load_theme(args)?;
    for pair in check_contrast(&theme) {
        println!(
            "{:<5}  {:<11}  {} on {}  {:>5.2}:1  {}",
            pair.mode.as_str(),
            pair.pair,
            pair.foreground,
            pair.background,
            pair.ratio,
            pair.level
        );
    }
    Ok(())
}

fn export_tokens(args: &ExportArgs) -> anyhow::Result<()> {
    let mut theme = load_theme(&args.input)?;
    if args.audit {
        theme = validate_and_fix_contrast(&theme).theme;
    }

    let options = ExportOptions {
        prefix: args.prefix.clone(),
        class_name: args.class_name.clone(),
    };

    if !args.all {
        print!("{}", export(&theme, args.format, &options));
        return Ok(());
    }

    let Some(dir) = &args.out_dir else {
        bail!("--all needs --out-dir");
    };
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for format in ExportFormat::ALL {
        let path = dir.join(format.default_file_name(&options));
        fs::write(&path, export(&theme, format, &options))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(%format, path = %path.display(), "tokens written");
    }
    Ok(())
}

fn contrast(args: &ContrastArgs) -> anyhow::Result<ExitCode> {
    for color in [&args.foreground, &args.background] {
        if !is_hex_color(color) {
            bail!("`{color}` is not a hex color");
        }
    }
    if !(1.0..=21.0).contains(&args.target) {
        bail!("target must be between 1 and 21, got {}", args.target);
    }

    let ratio = contrast_ratio(&args.foreground, &args.background);
    let fg = normalize_hex(&args.foreground).unwrap_or_else(|| args.foreground.clone());
    let bg = normalize_hex(&args.background).unwrap_or_else(|| args.background.clone());
    println!("{fg} on {bg}: {ratio:.2}:1 ({})", contrast_level(ratio));

    if ratio >= args.target {
        return Ok(ExitCode::SUCCESS);
    }
    let fixed = adjust_for_contrast(&fg, &bg, args.target);
    let fixed_ratio = contrast_ratio(&fixed, &bg);
    println!("suggested foreground: {fixed} ({fixed_ratio:.2}:1)");
    Ok(ExitCode::from(1))
}
