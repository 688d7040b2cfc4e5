use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mdguide_config::{Config, ConfigError};
use mdguide_engine::{
    DocumentOutcome, LoadError, PipelineOptions, Report, Source, io, process,
    render::inline_text, to_markdown,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdguide", version, about = "Lint and render Markdown study guides")]
struct Cli {
    /// Config file (defaults to ./mdguide.toml, then ~/.config/mdguide/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Process documents one at a time
    #[arg(long, global = true)]
    sequential: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate guides and print the findings report
    Check(CheckArgs),

    /// Validate guides and write rendered HTML
    Build(BuildArgs),

    /// Print (or rewrite) guides in normalized Markdown
    Fmt(FmtArgs),
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Markdown files or directories to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(clap::Args)]
struct BuildArgs {
    #[command(flatten)]
    check: CheckArgs,

    /// Output directory (overrides `out_dir` from config)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Wrap each fragment in a minimal HTML page
    #[arg(long)]
    standalone: bool,
}

#[derive(clap::Args)]
struct FmtArgs {
    /// Markdown files or directories to format
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Rewrite files in place instead of printing
    #[arg(short, long)]
    write: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

const DEFAULT_OUT_DIR: &str = "site";

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;
/// Same status clap uses for usage errors.
const USAGE_ERROR: u8 = 2;

/// A file to process and the directory its source name is relative to.
#[derive(Debug)]
struct Input {
    path: PathBuf,
    root: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let status = match execute(cli) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("Error: {err:#}");
            failure_status(&err)
        }
    };
    ExitCode::from(status)
}

/// Bad configuration (including glob patterns) is a usage error; anything
/// else that stops the run is a plain failure.
fn failure_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        USAGE_ERROR
    } else {
        FAILURE
    }
}

fn execute(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = Config::discover(cli.config.as_deref(), &cwd).context("failed to load config")?;
    let options = PipelineOptions {
        validation: config.validation_options(),
        parallel: config.parallel && !cli.sequential,
    };

    match cli.command {
        Command::Check(args) => {
            let inputs = collect_inputs(&args.inputs, &config)?;
            let report = run(&inputs, &options);
            print_report(&report, args.format)?;
            Ok(report_status(&report))
        }
        Command::Build(args) => {
            let inputs = collect_inputs(&args.check.inputs, &config)?;
            let report = run(&inputs, &options);
            let out_dir = args
                .out
                .or_else(|| config.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
            write_html(&report, &out_dir, args.standalone)?;
            print_report(&report, args.check.format)?;
            Ok(report_status(&report))
        }
        Command::Fmt(args) => {
            let inputs = collect_inputs(&args.inputs, &config)?;
            let report = run(&inputs, &options);
            format_documents(&inputs, &report, args.write)?;
            Ok(if report.failed().next().is_none() {
                SUCCESS
            } else {
                FAILURE
            })
        }
    }
}

/// Directories expand through the config globs; files are taken as given.
///
/// A path that does not exist is kept so it shows up as an unreadable
/// document rather than aborting the run.
fn collect_inputs(paths: &[PathBuf], config: &Config) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let files = config
                .resolve_inputs(path)
                .with_context(|| format!("failed to scan {}", path.display()))?;
            if files.is_empty() {
                log::warn!("no guides matched under {}", path.display());
            }
            inputs.extend(files.into_iter().map(|file| Input {
                path: file,
                root: path.clone(),
            }));
        } else {
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            inputs.push(Input {
                path: path.clone(),
                root,
            });
        }
    }
    Ok(inputs)
}

fn run(inputs: &[Input], options: &PipelineOptions) -> Report {
    let sources: Vec<Result<Source, LoadError>> = inputs
        .iter()
        .map(|input| io::read_source(&input.path, &input.root))
        .collect();
    process(sources, options)
}

fn print_report(report: &Report, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{report}"),
        Format::Json => {
            let json = serde_json::to_string_pretty(&report.summary())
                .context("failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn report_status(report: &Report) -> u8 {
    if report.is_clean() { SUCCESS } else { FAILURE }
}

fn write_html(report: &Report, out_dir: &Path, standalone: bool) -> Result<()> {
    for processed in report.succeeded() {
        let rel = mdguide_engine::models::source::output_path_for(processed.document.name());
        let body = if standalone {
            standalone_page(&processed.document, &processed.html)
        } else {
            processed.html.clone()
        };
        let written = io::write_output(&rel, out_dir, &body)
            .with_context(|| format!("failed to write HTML for {}", processed.document.name()))?;
        log::info!("wrote {}", written.display());
    }
    Ok(())
}

/// Minimal page shell; the title is the first h1, falling back to the name.
fn standalone_page(document: &mdguide_engine::Document, fragment: &str) -> String {
    let title = document
        .headings()
        .find(|(_, level, _)| *level == 1)
        .map(|(_, _, text)| inline_text(text))
        .unwrap_or_else(|| document.name().to_string());
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
            "<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        ),
        html_escape::encode_text(&title),
        fragment
    )
}

fn format_documents(inputs: &[Input], report: &Report, write: bool) -> Result<()> {
    for (input, outcome) in inputs.iter().zip(report.outcomes()) {
        let DocumentOutcome { name, result } = outcome;
        match result {
            Ok(processed) => {
                let markdown = to_markdown(processed.document.blocks());
                if write {
                    std::fs::write(&input.path, markdown)
                        .with_context(|| format!("failed to rewrite {}", input.path.display()))?;
                    log::info!("formatted {name}");
                } else {
                    print!("{markdown}");
                }
            }
            Err(err) => eprintln!("{name}: {err}"),
        }
    }
    Ok(())
}
