use clap::{ArgAction, Args, Parser, Subcommand};
use recipe_manifest::config::{self, ManifestConfig};
use recipe_manifest::manifest::{self, Manifest, OutputPaths};
use recipe_manifest::{output, scan};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Flags that override the stock config (or the `--config` file).
#[derive(Args, Clone, Default)]
struct ScanArgs {
    /// Directory to scan [default: recipes]
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// TOML config file layered over the stock defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the manifest files are written to [default: the scan root]
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    /// Content file extension [default: html]
    #[arg(long, global = true)]
    extension: Option<String>,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME", global = true)]
    ignore_dirs: Vec<String>,

    /// Additional file name to leave out (repeatable)
    #[arg(long = "ignore-file", value_name = "NAME", global = true)]
    ignore_files: Vec<String>,
}

#[derive(Parser)]
#[command(name = "recipe-manifest")]
#[command(about = "Write a sorted manifest of the recipe pages in a directory")]
#[command(long_about = "\
Write a sorted manifest of the recipe pages in a directory

Walks the scan root (./recipes by default), keeps every .html file that is
not an index or manifest page and does not live in an asset or VCS folder,
and writes two files next to them:

  recipes/
  ├── manifest.txt     # one relative path per line
  └── manifest.json    # { generatedAt, count, files }

Both files are rewritten on every run. If the scan fails, neither is touched.

Run 'recipe-manifest gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    scan: ScanArgs,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and write both manifest files (the default)
    Generate,
    /// Scan and list the entries without writing anything
    Check,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Command::Generate);
    if matches!(command, Command::GenConfig) {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = resolve_config(&cli.scan)?;
    let cwd = std::env::current_dir()?;
    let result = scan::scan(&config)?;

    match command {
        Command::Check => {
            output::print_check_output(&result.files, &result.root, &cwd);
        }
        _ => {
            let out_dir = scan::resolve_root(config.output_dir(&result.root))?;
            let outputs = OutputPaths::new(&out_dir, &config.output.text, &config.output.json);
            let manifest = Manifest::now(result.files);
            manifest::write_manifest(&manifest, &outputs)?;
            output::print_generate_output(manifest.count, &outputs, &cwd);
        }
    }

    Ok(())
}

/// Stock defaults, then the `--config` file, then individual flags.
fn resolve_config(args: &ScanArgs) -> Result<ManifestConfig, config::ConfigError> {
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ManifestConfig::default(),
    };

    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(dir) = &args.out_dir {
        config.output.dir = Some(dir.clone());
    }
    if let Some(ext) = &args.extension {
        config.extension = ext.clone();
    }
    config.ignore_dirs.extend(args.ignore_dirs.iter().cloned());
    config.ignore_files.extend(args.ignore_files.iter().cloned());

    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so stdout carries only the command output.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging unavailable: {e}");
    }
}
