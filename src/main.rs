use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use explang::codegen::generate_runtime;
use explang::compiler::{package_program, AnalyzedProgram};

#[derive(Parser)]
#[command(name = "explang")]
#[command(author, version, about = "The ExpLang to JavaScript compiler back end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JavaScript from an analyzed IR module
    Generate {
        /// The analyzed IR module (JSON) to lower
        input: PathBuf,

        /// Output file (defaults to the input path with a .js extension)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Collapse whitespace runs in the generated module text
        #[arg(long)]
        compact: bool,

        /// Dump the deserialized IR to stdout
        #[arg(long)]
        dump_ir: bool,
    },

    /// Generate a program and execute it with node
    Run {
        /// The analyzed IR module (JSON) to run
        input: PathBuf,

        /// Arguments to pass to node
        args: Vec<String>,
    },

    /// Validate an IR module without generating code
    Check {
        /// The analyzed IR module (JSON) to check
        input: PathBuf,
    },

    /// Print the runtime prelude
    Runtime,
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            compact,
            dump_ir,
        } => generate_command(input, output, compact, dump_ir, cli.verbose),
        Commands::Run { input, args } => run(input, args),
        Commands::Check { input } => check(input),
        Commands::Runtime => {
            print!("{}", generate_runtime());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Load the semantic-analysis output from a JSON file
fn load_program(input: &Path) -> Result<AnalyzedProgram> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read IR module: {:?}", input))?;
    serde_json::from_str(&source)
        .with_context(|| format!("Failed to deserialize IR module: {:?}", input))
}

fn generate_command(
    input: PathBuf,
    output: Option<PathBuf>,
    compact: bool,
    dump_ir: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("{}: Loading IR module {:?}", "step".cyan().bold(), input);
    }
    let program = load_program(&input)?;

    if dump_ir {
        println!("{}", "=== IR ===".blue().bold());
        println!("{}", serde_json::to_string_pretty(&program.module)?);
        println!();
    }

    if verbose {
        println!("{}: Starting code generation", "step".cyan().bold());
    }
    let code = package_program(&program.module, &program.diagnostics, compact)?;

    let output_path = output.unwrap_or_else(|| {
        let mut path = input.clone();
        path.set_extension("js");
        path
    });
    fs::write(&output_path, &code)
        .with_context(|| format!("Failed to write output: {:?}", output_path))?;

    println!("{}: Created {:?}", "success".green().bold(), output_path);
    Ok(())
}

fn run(input: PathBuf, args: Vec<String>) -> Result<()> {
    log::info!("Running {:?} with args: {:?}", input, args);

    let program = load_program(&input)?;
    let code = package_program(&program.module, &program.diagnostics, false)?;

    // Write the packaged program to a temporary script for node
    let script = tempfile::Builder::new()
        .prefix("explang_run_")
        .suffix(".js")
        .tempfile()
        .context("Failed to create temporary script")?;
    fs::write(script.path(), &code)
        .with_context(|| format!("Failed to write temporary script: {:?}", script.path()))?;

    log::debug!("Executing {:?}", script.path());
    let status = Command::new("node")
        .arg(script.path())
        .args(&args)
        .status()
        .context("Failed to execute node. Is node on your PATH?")?;

    if !status.success() {
        if let Some(code) = status.code() {
            std::process::exit(code);
        }
        anyhow::bail!("Program terminated by signal");
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    log::info!("Checking {:?}", input);

    let program = load_program(&input)?;

    if !program.diagnostics.is_empty() {
        for diagnostic in &program.diagnostics {
            eprintln!("{}: {}", "diagnostic".yellow().bold(), diagnostic.message);
        }
        anyhow::bail!("{} upstream diagnostics present", program.diagnostics.len());
    }

    program.module.validate()?;

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}
