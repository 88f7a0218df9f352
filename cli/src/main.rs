use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jsontools_core::config::ThreadCount;
use jsontools_core::{batch, ops, Config};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "jsontools")]
#[command(about = "Flatten, schema-infer, and structurally transform JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Indent output two spaces per level instead of emitting compact JSON
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a nested document into a single-level object of dotted paths
    Flatten(SingleDocArgs),

    /// Infer a JSON-Schema fragment describing a document's shape
    Schema(SingleDocArgs),

    /// Map every leaf path in a document to its scalar type name
    PathTypes(SingleDocArgs),

    /// Drop `null`-valued object members, recursively
    RemoveNulls(SingleDocArgs),

    /// Drop `""`-valued object members, recursively
    RemoveEmptyStrings(SingleDocArgs),

    /// Rename object keys matching a pattern
    ReplaceKeys(RegexArgs),

    /// Replace string values matching a pattern
    ReplaceValues(RegexArgs),

    /// Run one operation over many documents, dispatching to the thread
    /// pool when the batch is large enough to be worth it
    Batch(BatchArgs),
}

#[derive(clap::Args)]
struct SingleDocArgs {
    /// Input JSON file (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (writes stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct RegexArgs {
    /// Whole-string-anchored regular expression
    pattern: String,

    /// Literal replacement text
    replacement: String,

    /// Input JSON file (reads stdin if omitted)
    input: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BatchOp {
    Flatten,
    Schema,
    PathTypes,
    RemoveNulls,
    RemoveEmptyStrings,
}

#[derive(clap::Args)]
struct BatchArgs {
    /// Which operation to run over every input document
    #[arg(long, value_enum)]
    op: BatchOp,

    /// Input JSON files
    inputs: Vec<PathBuf>,

    /// Force thread-pool dispatch regardless of the size/count heuristic
    #[arg(long)]
    threads: bool,

    /// Worker count when `--threads` is set (0 = auto)
    #[arg(long, default_value_t = 0)]
    num_threads: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Flatten(args) => run_single(args, cli.pretty, ops::flatten_json),
        Commands::Schema(args) => run_single(args, cli.pretty, ops::schema_of_json),
        Commands::PathTypes(args) => run_single(args, cli.pretty, ops::path_types_of_json),
        Commands::RemoveNulls(args) => run_single(args, cli.pretty, ops::remove_nulls_json),
        Commands::RemoveEmptyStrings(args) => {
            run_single(args, cli.pretty, ops::remove_empty_strings_json)
        }
        Commands::ReplaceKeys(args) => run_regex(args, cli.pretty, ops::replace_keys_json),
        Commands::ReplaceValues(args) => run_regex(args, cli.pretty, ops::replace_values_json),
        Commands::Batch(args) => run_batch(args, cli.pretty),
    }
}

fn run_single(
    args: SingleDocArgs,
    pretty: bool,
    op: impl Fn(&[u8], bool) -> Result<Vec<u8>, jsontools_core::JsonToolsError>,
) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let output = op(&input, pretty).map_err(anyhow::Error::from)?;
    write_output(args.output.as_deref(), &output)
}

fn run_regex(
    args: RegexArgs,
    pretty: bool,
    op: impl Fn(&[u8], &str, &str, bool) -> Result<Vec<u8>, jsontools_core::JsonToolsError>,
) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let output = op(&input, &args.pattern, &args.replacement, pretty)
        .map_err(anyhow::Error::from)?;
    write_output(args.output.as_deref(), &output)
}

fn run_batch(args: BatchArgs, pretty: bool) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("batch requires at least one input file");
    }

    let documents: Vec<Vec<u8>> = args
        .inputs
        .iter()
        .map(|p| {
            fs::read(p).with_context(|| format!("failed to read input file: {}", p.display()))
        })
        .collect::<Result<_>>()?;
    let borrowed: Vec<&[u8]> = documents.iter().map(|d| d.as_slice()).collect();

    let config = Config {
        pretty_print: pretty,
        use_threads: args.threads,
        num_threads: if args.num_threads == 0 {
            ThreadCount::Auto
        } else {
            ThreadCount::Fixed(args.num_threads)
        },
        ..Config::default()
    };

    if args.op == BatchOp::Schema {
        let merged = batch::schema_of_batch(&borrowed, &config).map_err(anyhow::Error::from)?;
        io::stdout().write_all(&merged)?;
        writeln!(io::stdout())?;
        return Ok(());
    }

    let results = match args.op {
        BatchOp::Flatten => batch::flatten_batch(&borrowed, &config),
        BatchOp::PathTypes => batch::path_types_batch(&borrowed, &config),
        BatchOp::RemoveNulls => batch::remove_nulls_batch(&borrowed, &config),
        BatchOp::RemoveEmptyStrings => batch::remove_empty_strings_batch(&borrowed, &config),
        BatchOp::Schema => unreachable!("handled above"),
    };

    let mut had_error = false;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(bytes) => {
                lock.write_all(&bytes)?;
                writeln!(lock)?;
            }
            Err(task_error) => {
                had_error = true;
                eprintln!(
                    "document {} ({}): {}",
                    index,
                    args.inputs[index].display(),
                    task_error.source.to_report().message
                );
            }
        }
    }

    if had_error {
        anyhow::bail!("one or more documents in the batch failed");
    }
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => {
            fs::read(p).with_context(|| format!("failed to read input file: {}", p.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::Read::read_to_end(&mut io::stdin(), &mut buf)
                .context("failed to read JSON from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&std::path::Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, bytes)
            .with_context(|| format!("failed to write output file: {}", p.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(bytes)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}
