use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use item_tooltip_core::Item;
use item_tooltip_parser::report::{ParseReport, ParseReportBundle};
use item_tooltip_parser::{
    ItemSource, OutputFormat, RenderContext, TooltipConfig, format_error, format_item,
    format_report, parse_item_with_report,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Markup,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Markup => Self::Markup,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "item-tooltip")]
#[command(about = "Parse game-item tooltips and render them as wiki markup")]
struct Cli {
    /// Log classifier decisions (same as RUST_LOG=item_tooltip=debug).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a tooltip body read from a file.
    ParseFile(ParseFileArgs),
    /// Parse a tooltip body read from stdin.
    ParseStdin(ParseStdinArgs),
    /// Render a set of YAML/JSON item sources into an output directory.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct ItemArgs {
    /// Override argument as key=value; may be repeated and applies in order.
    #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    args: Vec<(String, String)>,
    /// Title of the page the tooltip is rendered on.
    #[arg(long)]
    page: Option<String>,
    /// Output both the item and the parse report.
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "markup")]
    format: CliOutputFormat,
    /// YAML rendering configuration.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to file containing the tooltip body.
    #[arg(long)]
    input: PathBuf,
    #[command(flatten)]
    item: ItemArgs,
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    #[command(flatten)]
    item: ItemArgs,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Item source files and/or directories containing them.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output directory for rendered items and the batch report.
    #[arg(long)]
    output: PathBuf,
    /// Number of parallel jobs (default: number of CPUs).
    #[arg(long)]
    jobs: Option<usize>,
    /// Output format for item and report files.
    #[arg(long, default_value = "markup")]
    format: CliOutputFormat,
    /// YAML rendering configuration.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::ParseFile(args) => run_parse_file(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::Batch(args) => run_batch(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "item_tooltip=debug"
    } else {
        "item_tooltip=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn load_config(path: Option<&Path>) -> Result<TooltipConfig, String> {
    match path {
        Some(path) => TooltipConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display())),
        None => Ok(TooltipConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// parse-file / parse-stdin
// ---------------------------------------------------------------------------

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    run_parse_body(&body, args.item)
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let body = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    run_parse_body(&body, args.item)
}

fn run_parse_body(body: &str, args: ItemArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let format: OutputFormat = args.format.into();
    let overrides = args
        .args
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()));
    let run = parse_item_with_report(body, overrides, &config);

    if args.with_report {
        #[derive(serde::Serialize)]
        struct ParseOutput<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            item: Option<&'a Item>,
            report: &'a ParseReport,
        }

        let output = ParseOutput {
            item: run.result.as_ref().ok(),
            report: &run.report,
        };

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&output)
                    .map_err(|e| format!("Failed to serialize output: {e}"))?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(&output)
                    .map_err(|e| format!("Failed to serialize output: {e}"))?;
                println!("{yaml}");
            }
            _ => {
                match &run.result {
                    Ok(item) => {
                        let ctx = RenderContext::for_page(item, args.page.as_deref(), &config);
                        print!("{}", format_item(item, format, &ctx)?);
                    }
                    Err(err) => println!("{}", format_error(err, format, &config)),
                }
                print!("{}", format_report(&run.report, format)?);
            }
        }
        return Ok(());
    }

    match run.result {
        Ok(item) => {
            let ctx = RenderContext::for_page(&item, args.page.as_deref(), &config);
            print!("{}", format_item(&item, format, &ctx)?);
            Ok(())
        }
        Err(err) => Err(format_error(&err, format, &config)),
    }
}

// ---------------------------------------------------------------------------
// batch
// ---------------------------------------------------------------------------

struct BatchOutcome {
    stem: String,
    rendered: Option<String>,
    report: ParseReport,
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    use rayon::prelude::*;

    let config = load_config(args.config.as_deref())?;
    let format: OutputFormat = args.format.into();
    let sources = collect_source_paths(&args.inputs)?;
    if sources.is_empty() {
        return Err("No item sources (.yml, .yaml, .json) found in the given inputs".to_string());
    }

    fs::create_dir_all(&args.output).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            args.output.display()
        )
    })?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.unwrap_or(0))
        .build()
        .map_err(|e| format!("Failed to create thread pool: {e}"))?;

    info!(sources = sources.len(), "Rendering item sources");
    let results: Vec<Result<BatchOutcome, String>> = pool.install(|| {
        sources
            .par_iter()
            .map(|path| render_source(path, format, &config))
            .collect()
    });

    let mut outcomes = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(failure) => failures.push(failure),
        }
    }
    outcomes.sort_by(|a, b| a.stem.cmp(&b.stem));
    failures.sort();

    let ext = format_extension(format);
    let mut written = 0usize;
    for outcome in &outcomes {
        let Some(rendered) = &outcome.rendered else {
            continue;
        };
        let path = args.output.join(format!("{}.{ext}", outcome.stem));
        fs::write(&path, rendered)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
        written += 1;
    }
    println!("Rendered {written} item(s) to {}.", args.output.display());

    let failed_items = outcomes.iter().filter(|o| !o.report.success).count();
    let bundle = ParseReportBundle {
        version: PACKAGE_VERSION.to_string(),
        reports: outcomes.into_iter().map(|outcome| outcome.report).collect(),
        failures: failures.clone(),
    };
    let report_path = args.output.join(format!("batch-report.{ext}"));
    let report_raw = format_report_bundle(&bundle, format)?;
    fs::write(&report_path, report_raw)
        .map_err(|err| format!("Failed to write '{}': {err}", report_path.display()))?;

    if failed_items > 0 {
        eprintln!("{failed_items} item(s) failed to parse or validate.");
    }
    if !failures.is_empty() {
        eprintln!(
            "{} source(s) could not be read: {}",
            failures.len(),
            failures.join(", ")
        );
    }

    Ok(())
}

fn render_source(
    path: &Path,
    format: OutputFormat,
    config: &TooltipConfig,
) -> Result<BatchOutcome, String> {
    let source =
        ItemSource::load(path).map_err(|err| format!("{}: {err}", path.display()))?;
    let stem = path
        .file_stem()
        .map(|stem| sanitize_filename_segment(&stem.to_string_lossy()))
        .unwrap_or_else(|| "item".to_string());
    debug!(source = %path.display(), "Rendering item source");

    let run = parse_item_with_report(&source.body, source.arguments(), config);
    let rendered = match &run.result {
        Ok(item) => {
            let ctx = RenderContext::for_page(item, source.page.as_deref(), config);
            Some(format_item(item, format, &ctx)?)
        }
        // The page shows the error in place of the tooltip.
        Err(err) if matches!(format, OutputFormat::Markup) => {
            Some(format_error(err, format, config))
        }
        Err(_) => None,
    };

    Ok(BatchOutcome {
        stem,
        rendered,
        report: run.report,
    })
}

/// Expands directories (one level) and keeps YAML/JSON files, sorted.
fn collect_source_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input)
                .map_err(|err| format!("Failed to read directory '{}': {err}", input.display()))?;
            for entry in entries {
                let entry = entry.map_err(|err| {
                    format!("Failed to read directory '{}': {err}", input.display())
                })?;
                let path = entry.path();
                if path.is_file() && is_source_file(&path) {
                    paths.push(path);
                }
            }
        } else if input.is_file() {
            paths.push(input.clone());
        } else {
            return Err(format!("Input '{}' does not exist", input.display()));
        }
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "yml" | "yaml" | "json"))
}

fn format_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Markup => "wiki",
        OutputFormat::Table => "txt",
    }
}

/// Formats a `ParseReportBundle` in the requested output format.
fn format_report_bundle(bundle: &ParseReportBundle, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(bundle)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(bundle).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markup | OutputFormat::Table => {
            let mut out = String::new();
            for report in &bundle.reports {
                out.push_str(&format_report(report, format)?);
            }
            Ok(out)
        }
    }
}

fn sanitize_filename_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
            out.push(ch);
        } else {
            out.push('-');
        }
    }
    let cleaned = out.trim_matches('-');
    if cleaned.is_empty() {
        "item".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{format_extension, parse_key_value, sanitize_filename_segment};
    use item_tooltip_parser::OutputFormat;

    #[test]
    fn test_parse_key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_value("id=50783"),
            Ok(("id".to_string(), "50783".to_string()))
        );
        assert_eq!(
            parse_key_value("equip=a=b"),
            Ok(("equip".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_key_value("heroic="), Ok(("heroic".to_string(), String::new())));
    }

    #[test]
    fn test_parse_key_value_rejects_missing_key() {
        assert!(parse_key_value("no-equals").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_sanitize_filename_segment_keeps_safe_chars() {
        assert_eq!(sanitize_filename_segment("ashbringer"), "ashbringer");
        assert_eq!(sanitize_filename_segment("tier-10.robe"), "tier-10.robe");
        assert_eq!(sanitize_filename_segment("Hallow's End"), "Hallow-s-End");
        assert_eq!(sanitize_filename_segment("???"), "item");
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(format_extension(OutputFormat::Markup), "wiki");
        assert_eq!(format_extension(OutputFormat::Table), "txt");
    }
}
