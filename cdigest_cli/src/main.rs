use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use cdigest_cli::config::{AppConfig, ConfigManager, get_config};
use cdigest_cli::output::{
    AlgorithmRow, DigestReport, OutputFormat, OutputFormatter, create_formatter,
};
use cdigest_cli::terminal;
use cdigest_core::{
    AlgorithmId, Digest, DigestContext, XofContext, compute_common_reader, hmac, mac_sha3_256,
};

#[derive(Parser)]
#[command(name = "cdigest")]
#[command(
    author,
    version,
    about = "Digest, XOF and MAC calculator over SHA-1, SHA-2 and SHA-3",
    long_about = None
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Digest file(s) or stdin ("-")
    Hash {
        /// Files to digest, "-" for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Digest algorithm (defaults to output.default_algorithm)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<AlgorithmId>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// SHA-1 and SHA-256 of each input in a single pass
    Common {
        /// Files to digest, "-" for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// One digest over the contents of several files, in argument order
    Sequence {
        /// Files whose contents form the sequence elements
        #[arg(required = true)]
        elements: Vec<PathBuf>,

        /// Digest algorithm (defaults to output.default_algorithm)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<AlgorithmId>,

        /// Bytes digested before the first element
        #[arg(long, default_value = "")]
        prefix: String,

        /// Bytes digested after the last element
        #[arg(long, default_value = "")]
        suffix: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// HMAC of a file or stdin
    Hmac {
        /// Secret key
        #[arg(short, long)]
        key: String,

        /// File to authenticate, "-" for stdin
        input: PathBuf,

        /// Underlying digest algorithm
        #[arg(short, long, value_parser = parse_algorithm, default_value = "sha256")]
        algorithm: AlgorithmId,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// SHA3 sponge MAC of a file or stdin
    Mac {
        /// Secret key
        #[arg(short, long)]
        key: String,

        /// File to authenticate, "-" for stdin
        input: PathBuf,

        /// Output length in bytes
        #[arg(short = 'n', long, default_value_t = 32)]
        length: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// SHAKE256 output of a file or stdin
    Xof {
        /// File to absorb, "-" for stdin
        input: PathBuf,

        /// Output length in bytes
        #[arg(short = 'n', long, default_value_t = 32)]
        length: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported algorithms
    Algorithms {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration file path
    Path,

    /// Get a configuration value
    Get {
        /// Configuration key (e.g., output.default_algorithm)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., stream.buffer_size)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (defaults to output.default_format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormatArg>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormatArg {
    Text,
    Json,
    JsonLines,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::JsonLines => OutputFormat::JsonLines,
        }
    }
}

fn parse_algorithm(s: &str) -> Result<AlgorithmId, String> {
    AlgorithmId::parse(s).map_err(|_| {
        let known: Vec<&str> = AlgorithmId::ALL.iter().map(|alg| alg.name()).collect();
        format!("unknown algorithm '{s}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("cdigest_core", log::LevelFilter::Debug)
            .filter_module("cdigest_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    run(cli.command)
}

fn load_config() -> Result<AppConfig> {
    get_config().context("Failed to load configuration")
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Hash {
            inputs,
            algorithm,
            output,
        } => {
            let config = load_config()?;
            let algorithm = resolve_algorithm(algorithm, &config)?;
            let reports = inputs
                .iter()
                .map(|input| hash_input(input, algorithm, &config))
                .collect::<Result<Vec<_>>>()?;
            emit(&reports, &output, &config)
        }
        Commands::Common { inputs, output } => {
            let config = load_config()?;
            let reports = inputs
                .iter()
                .map(|input| common_input(input, &config))
                .collect::<Result<Vec<_>>>()?;
            emit(&reports, &output, &config)
        }
        Commands::Sequence {
            elements,
            algorithm,
            prefix,
            suffix,
            output,
        } => {
            let config = load_config()?;
            let algorithm = resolve_algorithm(algorithm, &config)?;
            log::debug!("Sequence digest over {} elements", elements.len());
            let digest = sequence_input(
                &elements,
                algorithm,
                prefix.as_bytes(),
                suffix.as_bytes(),
                &config,
            )?;
            let label = elements
                .iter()
                .map(|path| input_label(path))
                .collect::<Vec<_>>()
                .join(",");
            emit(&[DigestReport::from_digest(label, &digest)], &output, &config)
        }
        Commands::Hmac {
            key,
            input,
            algorithm,
            output,
        } => {
            let config = load_config()?;
            let message = read_input(&input)?;
            let mac = hmac(algorithm, key.as_bytes(), &message);
            let report = DigestReport::new(input_label(&input))
                .with_entry(format!("hmac-{algorithm}"), mac.as_bytes());
            emit(&[report], &output, &config)
        }
        Commands::Mac {
            key,
            input,
            length,
            output,
        } => {
            let config = load_config()?;
            let message = read_input(&input)?;
            let mac = mac_sha3_256(key.as_bytes(), &message, length);
            let report = DigestReport::new(input_label(&input)).with_entry("mac-sha3-256", &mac);
            emit(&[report], &output, &config)
        }
        Commands::Xof {
            input,
            length,
            output,
        } => {
            let config = load_config()?;
            let mut xof = XofContext::new();
            xof.absorb(read_input(&input)?)?;
            let report =
                DigestReport::new(input_label(&input)).with_entry("shake256", &xof.squeeze(length));
            emit(&[report], &output, &config)
        }
        Commands::Algorithms { output } => {
            let config = load_config()?;
            let formatter = formatter_for(&output, &config)?;
            println!("{}", formatter.format_algorithms(&AlgorithmRow::all())?);
            Ok(())
        }
        Commands::Config { command } => config_command(command),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

fn resolve_algorithm(algorithm: Option<AlgorithmId>, config: &AppConfig) -> Result<AlgorithmId> {
    match algorithm {
        Some(algorithm) => Ok(algorithm),
        None => config.default_algorithm(),
    }
}

fn hash_input(path: &Path, algorithm: AlgorithmId, config: &AppConfig) -> Result<DigestReport> {
    let mut reader = open_input(path)?;
    let mut ctx = DigestContext::create(algorithm);
    let bytes = ctx
        .update_reader(reader.as_mut(), &config.stream)
        .with_context(|| format!("Failed to digest {}", input_label(path)))?;
    log::debug!("Hashed {bytes} bytes from {}", input_label(path));
    Ok(DigestReport::from_digest(input_label(path), &ctx.finalize()))
}

/// Digest `prefix`, each element file in order, then `suffix`, streaming every file
fn sequence_input(
    elements: &[PathBuf],
    algorithm: AlgorithmId,
    prefix: &[u8],
    suffix: &[u8],
    config: &AppConfig,
) -> Result<Digest> {
    let mut ctx = DigestContext::create(algorithm);
    ctx.update(prefix);
    for path in elements {
        let mut reader = open_input(path)?;
        ctx.update_reader(reader.as_mut(), &config.stream)
            .with_context(|| format!("Failed to digest {}", input_label(path)))?;
    }
    ctx.update(suffix);
    Ok(ctx.finalize())
}

fn common_input(path: &Path, config: &AppConfig) -> Result<DigestReport> {
    let mut reader = open_input(path)?;
    let digests = compute_common_reader(reader.as_mut(), &config.stream)
        .with_context(|| format!("Failed to digest {}", input_label(path)))?;
    Ok(DigestReport::from_common(input_label(path), &digests))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn input_label(path: &Path) -> String {
    if is_stdin(path) {
        "-".to_string()
    } else {
        path.display().to_string()
    }
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdin(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    if !path.exists() {
        anyhow::bail!("Path not found: {}", path.display());
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(file))
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_input(path)?;
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .with_context(|| format!("Failed to read {}", input_label(path)))?;
    Ok(data)
}

fn formatter_for(output: &OutputArgs, config: &AppConfig) -> Result<Box<dyn OutputFormatter>> {
    let format = match output.format {
        Some(arg) => arg.into(),
        None => config.default_format()?,
    };
    Ok(create_formatter(
        format,
        terminal::use_color(config.output.color_enabled),
    ))
}

fn emit(reports: &[DigestReport], output: &OutputArgs, config: &AppConfig) -> Result<()> {
    let formatter = formatter_for(output, config)?;
    println!("{}", formatter.format_batch(reports)?);
    Ok(())
}

fn config_command(command: ConfigCommand) -> Result<()> {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
        ConfigCommand::Get { key } => match manager.get(&key) {
            Ok(value) => {
                println!("{value}");
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::Set { key, value } => match manager.set(&key, &value) {
            Ok(()) => {
                eprintln!("{}", format!("Set {key} = {value}").green());
                eprintln!(
                    "Configuration saved to: {}",
                    manager.get_config_path().display()
                );
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e:#}").red());
                std::process::exit(1);
            }
        },
        ConfigCommand::List => {
            let items = manager.list()?;
            eprintln!("{}", "Configuration:".bold().blue());
            eprintln!("Config file: {}", manager.get_config_path().display());
            for (key, value) in items {
                println!("{} = {}", key.cyan(), value);
            }
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
