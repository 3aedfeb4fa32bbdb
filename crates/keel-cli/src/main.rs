use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use keel_emit::Target;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "keel")]
#[command(about = "Keel - contract description language compiled to Solidity")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Compile {
        input: PathBuf,

        #[arg(short, long, value_enum, default_value = "evm")]
        target: TargetArg,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        verbose: bool,
    },

    Build {
        #[arg(default_value = ".")]
        root: PathBuf,

        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Evm,
    Solana,
    Cosmos,
    All,
}

impl TargetArg {
    /// `all` means every implemented backend; an unimplemented target still
    /// has to be requested by name to surface its report.
    fn targets(self) -> Vec<Target> {
        match self {
            TargetArg::Evm => vec![Target::Evm],
            TargetArg::Solana => vec![Target::Solana],
            TargetArg::Cosmos => vec![Target::Cosmos],
            TargetArg::All => vec![Target::Evm, Target::Solana],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input,
            target,
            output,
            verbose,
        } => cmd_compile(&input, target, output, verbose),
        Commands::Build { root, verbose } => cmd_build(&root, verbose),
    }
}

fn cmd_compile(
    input: &Path,
    target: TargetArg,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    use colored::*;
    use std::fs;

    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("module");
    let module_name = keel_parser::sanitize_module_name(stem);

    if verbose {
        println!("{}", " Keel Compiler".bright_blue().bold());
        println!(" Input: {}", input.display());
    }

    let module = keel_parser::scan_module(&source, stem);
    if verbose {
        println!(
            " Module: {} ({} state vars, {} events, {} functions)",
            module.name,
            module.state.len(),
            module.events.len(),
            module.functions.len()
        );
    }

    let out_dir = output.unwrap_or_else(|| {
        input
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let targets = target.targets();
    let mut emitted = 0;
    for target in &targets {
        match keel_emit::emit(&module, *target) {
            Ok(text) => {
                let path = out_dir.join(format!("{}.{}", module_name, target.extension()));
                fs::write(&path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!(" {} {}", "emitted".bright_green(), path.display());
                emitted += 1;
            }
            Err(err) => {
                eprintln!(" {} {}", "skipped:".yellow(), err);
            }
        }
    }

    if emitted == 0 {
        bail!("no output produced for {}", input.display());
    }
    Ok(())
}

fn cmd_build(root: &Path, verbose: bool) -> Result<()> {
    use colored::*;

    let sources: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "keel"))
        .map(|entry| entry.into_path())
        .collect();

    if sources.is_empty() {
        println!("  No .keel sources found under {}", root.display());
        return Ok(());
    }

    let mut failed = 0;
    for source in &sources {
        if verbose {
            println!("{}", format!(" Building {}", source.display()).bright_blue());
        }
        if let Err(err) = cmd_compile(source, TargetArg::All, None, verbose) {
            eprintln!(" {} {}: {}", "failed".bright_red(), source.display(), err);
            failed += 1;
        }
    }

    println!(
        " Built {}/{} Keel source files",
        sources.len() - failed,
        sources.len()
    );
    if failed > 0 {
        bail!("{} of {} builds failed", failed, sources.len());
    }
    Ok(())
}
