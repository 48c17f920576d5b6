#![allow(clippy::print_stderr)]
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use fleece::{narrow, Document, DocumentOptions, Map, Value};
use tracing_subscriber::EnvFilter;

mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "fleece", version, about = "Typed lookups in JSON documents")]
struct Cli {
    /// Reject inputs larger than this many bytes.
    #[arg(long, global = true, value_name = "BYTES")]
    max_size: Option<usize>,
    /// Reject documents nesting more arrays or objects than this.
    #[arg(long, global = true, value_name = "LEVELS", default_value_t = DocumentOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value found by following object keys from the root.
    Get {
        /// JSON file to read, `-` for stdin.
        file: PathBuf,
        /// Object keys to follow.
        keys: Vec<String>,
        /// Fail unless the value is of this type.
        #[arg(long = "as", value_enum, value_name = "TYPE")]
        target: Option<Target>,
        /// Print the object at this position of the array found at the path.
        #[arg(long, conflicts_with = "target")]
        index: Option<usize>,
        /// Print strings without JSON quoting.
        #[arg(long)]
        raw: bool,
    },
    /// Print the value at an RFC 6901 JSON Pointer.
    Pointer {
        /// JSON file to read, `-` for stdin.
        file: PathBuf,
        /// Pointer such as `/items/0/name`.
        pointer: String,
        /// Print strings without JSON quoting.
        #[arg(long)]
        raw: bool,
    },
    /// Pretty-print the document.
    Dump {
        /// JSON file to read, `-` for stdin.
        file: PathBuf,
        /// Spaces per nesting level.
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Print the input bytes unchanged.
        #[arg(long, conflicts_with = "indent")]
        raw: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    Int,
    Float,
    String,
    Bool,
    Array,
    Map,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(exit_code = error.exit_code(), "Command failed");
            eprintln!("{}", error::render(&error));
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_env("FLEECE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut options = DocumentOptions::new().max_depth(cli.max_depth);
    if let Some(limit) = cli.max_size {
        options = options.max_size(limit);
    }
    match cli.command {
        Command::Get {
            file,
            keys,
            target,
            index,
            raw,
        } => {
            let document = load(&options, &file)?;
            let path: Vec<&str> = keys.iter().map(String::as_str).collect();
            let output = match index {
                Some(index) => get_indexed(&document, index, &path)?,
                None => get(&document, &path, target, raw)?,
            };
            writeln!(out, "{output}")?;
        }
        Command::Pointer { file, pointer, raw } => {
            let document = load(&options, &file)?;
            let value = document.pointer(&pointer)?;
            writeln!(out, "{}", render(value, raw))?;
        }
        Command::Dump { file, indent, raw } => {
            let document = load(&options, &file)?;
            if raw {
                out.write_all(document.dump())?;
            } else {
                writeln!(out, "{}", document.dump_pretty(indent))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn load(options: &DocumentOptions, file: &Path) -> Result<Document, CliError> {
    let bytes = read_input(file).map_err(|source| CliError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    tracing::debug!(file = %file.display(), bytes = bytes.len(), "Read input");
    Ok(options.load(bytes)?)
}

fn read_input(file: &Path) -> io::Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(file)
    }
}

fn get(
    document: &Document,
    path: &[&str],
    target: Option<Target>,
    raw: bool,
) -> Result<String, CliError> {
    let value = document.resolve(path).map_err(fleece::AccessError::from)?;
    match target {
        Some(Target::Int) => return Ok(narrow::<i64>(value)?.to_string()),
        Some(Target::Float) => {
            narrow::<f64>(value)?;
        }
        Some(Target::String) => {
            narrow::<&str>(value)?;
        }
        Some(Target::Bool) => {
            narrow::<bool>(value)?;
        }
        Some(Target::Array) => {
            narrow::<&[Value]>(value)?;
        }
        Some(Target::Map) => {
            narrow::<&Map>(value)?;
        }
        None => {}
    }
    Ok(render(value, raw))
}

fn get_indexed(document: &Document, index: usize, path: &[&str]) -> Result<String, CliError> {
    let map = document.get_indexed_map(index, path)?;
    Ok(Value::Object(map.clone()).to_string())
}

fn render(value: &Value, raw: bool) -> String {
    match value {
        Value::String(text) if raw => text.clone(),
        other => other.to_string(),
    }
}
