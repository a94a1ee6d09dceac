mod buffer_io;
mod error;
mod logging;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use textsmith_core::{
    BufferStats, CharacterClass, ClassId, GenerateRequest, RemoveMode, RemoveRequest, ReplacePair,
    ReplaceRequest,
};
use textsmith_engine::{ConflictPolicy, Engine, Operation};

use buffer_io::BufferArgs;
use error::CliResult;
use logging::init_logging;
use settings::{Settings, load_settings, render_settings};

#[derive(Parser, Debug)]
#[command(
    name = "textsmith",
    version,
    about = "Generate, remove, and replace characters in a text buffer"
)]
struct Cli {
    /// Settings file (defaults to ./textsmith.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Tracing filter, e.g. `debug` or `textsmith_engine=trace`.
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
    #[command(flatten)]
    buffer: BufferArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate characters from the chosen classes.
    Generate(GenerateArgs),
    /// Report how a generation request relates to the existing buffer.
    Resolve(ResolveArgs),
    /// Remove characters by class or from a literal list.
    Remove(RemoveArgs),
    /// Replace characters by class, or literal substrings by pairs.
    Replace(ReplaceArgs),
    /// Apply a JSON script of operations in order.
    Apply(ApplyArgs),
    /// Print length and per-class character counts.
    Stats,
    /// List the built-in character classes.
    Classes,
    /// Print the JSON Schema for operation scripts.
    Schema,
    /// Print the effective settings as TOML.
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnConflict {
    Clear,
    Append,
    Abort,
}

impl From<OnConflict> for ConflictPolicy {
    fn from(value: OnConflict) -> Self {
        match value {
            OnConflict::Clear => ConflictPolicy::Clear,
            OnConflict::Append => ConflictPolicy::Append,
            OnConflict::Abort => ConflictPolicy::Abort,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RemoveModeArg {
    Selection,
    Custom,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Classes to draw from (comma separated).
    #[arg(long, value_delimiter = ',', value_parser = parse_class)]
    classes: Vec<CharacterClass>,
    /// Number of characters to generate.
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Ceiling on the final buffer length.
    #[arg(long, allow_negative_numbers = true)]
    full_length: Option<i64>,
    /// Append to existing content without asking.
    #[arg(long, default_value_t = false, conflicts_with = "on_conflict")]
    append: bool,
    /// How to handle a non-empty buffer (overrides the settings file).
    #[arg(long, value_enum)]
    on_conflict: Option<OnConflict>,
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Classes of the intended generation (comma separated).
    #[arg(long, value_delimiter = ',', value_parser = parse_class)]
    classes: Vec<CharacterClass>,
    /// Ceiling on the final buffer length.
    #[arg(long, allow_negative_numbers = true)]
    full_length: Option<i64>,
}

#[derive(Args, Debug)]
struct RemoveArgs {
    /// Selection mode removes --classes; custom mode removes --chars.
    #[arg(long, value_enum)]
    mode: Option<RemoveModeArg>,
    /// Classes to remove (comma separated).
    #[arg(long, value_delimiter = ',', value_parser = parse_class)]
    classes: Vec<CharacterClass>,
    /// Literal characters to remove.
    #[arg(long, value_name = "CHARS")]
    chars: Option<String>,
}

#[derive(Args, Debug)]
struct ReplaceArgs {
    /// Classes to replace (comma separated).
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_class,
        conflicts_with = "pair"
    )]
    from: Vec<CharacterClass>,
    /// Classes to draw replacements from (comma separated).
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_class,
        conflicts_with = "pair"
    )]
    to: Vec<CharacterClass>,
    /// Literal FROM=TO substitution; repeat to apply several in order.
    #[arg(long, value_name = "FROM=TO", value_parser = parse_pair)]
    pair: Vec<ReplacePair>,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// JSON file holding an array of operations.
    #[arg(long, value_name = "PATH")]
    script: PathBuf,
    /// How generation steps handle a non-empty buffer.
    #[arg(long, value_enum)]
    on_conflict: Option<OnConflict>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let Cli {
        config,
        seed,
        log_level,
        buffer,
        command,
    } = cli;

    let mut settings = load_settings(config.as_deref())?;
    if seed.is_some() {
        settings.seed = seed;
    }
    if let Some(level) = log_level {
        settings.log_level = level;
    }
    init_logging(&settings)?;

    tracing::debug!(
        event = "settings_loaded",
        seed = ?settings.seed,
        max_generate = settings.max_generate
    );

    let mut engine = Engine::new(settings.engine_options());

    match command {
        Command::Generate(args) => run_generate(&mut engine, &settings, &buffer, args),
        Command::Resolve(args) => run_resolve(&engine, &buffer, args),
        Command::Remove(args) => run_remove(&mut engine, &buffer, args),
        Command::Replace(args) => run_replace(&mut engine, &buffer, args),
        Command::Apply(args) => run_apply(&mut engine, &settings, &buffer, args),
        Command::Stats => {
            let stats = BufferStats::of(&buffer.read()?);
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Command::Classes => {
            for class in CharacterClass::ALL {
                println!("{:<8} {:<18} {}", class, class.label(), class.characters());
            }
            Ok(())
        }
        Command::Schema => {
            let schema = schemars::schema_for!(Vec<Operation>);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Command::Config => {
            print!("{}", render_settings(&settings)?);
            Ok(())
        }
    }
}

fn run_generate(
    engine: &mut Engine,
    settings: &Settings,
    buffer: &BufferArgs,
    args: GenerateArgs,
) -> CliResult<()> {
    let current = buffer.read()?;
    let request = GenerateRequest {
        classes: class_ids(&args.classes),
        count: args.count,
        full_length: args.full_length,
    };
    let policy = args
        .on_conflict
        .map(ConflictPolicy::from)
        .unwrap_or(settings.on_conflict);
    let operation = Operation::Generate {
        request,
        append: args.append,
    };

    let outcome = engine.apply(&current, &operation, policy)?;
    buffer.write(&outcome.buffer)?;
    eprintln!("{}", outcome.summary());
    Ok(())
}

fn run_resolve(engine: &Engine, buffer: &BufferArgs, args: ResolveArgs) -> CliResult<()> {
    let current = buffer.read()?;
    let classes = class_ids(&args.classes);
    let resolution = engine.resolve_conflict(&current, &classes, args.full_length);
    let report = json!({
        "resolution": resolution,
        "title": resolution.title(),
        "message": resolution.message(),
        "choices": resolution.choices(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_remove(engine: &mut Engine, buffer: &BufferArgs, args: RemoveArgs) -> CliResult<()> {
    let mode = match args.mode {
        Some(RemoveModeArg::Selection) => RemoveMode::Selection,
        Some(RemoveModeArg::Custom) => RemoveMode::Custom,
        None if args.classes.is_empty() && args.chars.is_some() => RemoveMode::Custom,
        None => RemoveMode::Selection,
    };
    let request = RemoveRequest {
        mode,
        classes: class_ids(&args.classes),
        literal_chars: args.chars.unwrap_or_default(),
    };

    let operation = Operation::Remove(request);
    let current = buffer.read()?;
    let outcome = engine.apply(&current, &operation, ConflictPolicy::Abort)?;
    buffer.write(&outcome.buffer)?;
    eprintln!("{}", outcome.summary());
    Ok(())
}

fn run_replace(engine: &mut Engine, buffer: &BufferArgs, args: ReplaceArgs) -> CliResult<()> {
    let request = if args.pair.is_empty() {
        ReplaceRequest::Selection {
            from: class_ids(&args.from),
            to: class_ids(&args.to),
        }
    } else {
        ReplaceRequest::Custom { pairs: args.pair }
    };

    let operation = Operation::Replace(request);
    let current = buffer.read()?;
    let outcome = engine.apply(&current, &operation, ConflictPolicy::Abort)?;
    buffer.write(&outcome.buffer)?;
    eprintln!("{}", outcome.summary());
    Ok(())
}

fn run_apply(
    engine: &mut Engine,
    settings: &Settings,
    buffer: &BufferArgs,
    args: ApplyArgs,
) -> CliResult<()> {
    let script = std::fs::read_to_string(&args.script)?;
    let operations: Vec<Operation> = serde_json::from_str(&script)?;
    let policy = args
        .on_conflict
        .map(ConflictPolicy::from)
        .unwrap_or(settings.on_conflict);

    let current = buffer.read()?;
    let outcome = engine.apply_all(&current, &operations, policy)?;
    buffer.write(&outcome.buffer)?;
    eprintln!(
        "Script applied: {} steps, {} characters affected.",
        outcome.steps.len(),
        outcome.affected_total()
    );
    Ok(())
}

fn parse_class(value: &str) -> Result<CharacterClass, textsmith_core::Error> {
    value.trim().parse()
}

fn parse_pair(value: &str) -> Result<ReplacePair, String> {
    let (from, to) = value
        .split_once('=')
        .ok_or_else(|| format!("expected FROM=TO, got '{value}'"))?;
    if from.is_empty() {
        return Err("replace pair needs a non-empty FROM".to_string());
    }
    Ok(ReplacePair::new(from, to))
}

fn class_ids(classes: &[CharacterClass]) -> Vec<ClassId> {
    classes.iter().copied().map(ClassId::from).collect()
}
