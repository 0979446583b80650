use anyhow::{Context, Result};
use boardkit::shell::{self, Shell};
use boardkit::{init_logging, session_from_config, Config, LengthUnit, Summary, ViewKind};
use boardkit_designer::export::{write_scene, MAX_DPI, MIN_DPI};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boardkit")]
#[command(about = "Design cutting boards from strips of wood")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive design shell (the default)
    Shell {
        /// Design file to open
        file: Option<PathBuf>,
    },
    /// Print the fit summary of a design file
    Summary {
        file: PathBuf,
        /// Display unit (in, cm, mm)
        #[arg(long)]
        unit: Option<LengthUnit>,
    },
    /// Render one view of a design file to .svg or .png
    Render {
        file: PathBuf,
        /// View to render (edge, end, 3d, schematic)
        #[arg(long, default_value = "edge")]
        view: ViewKind,
        /// Output file; the extension picks the format
        #[arg(long, short)]
        out: PathBuf,
        /// Raster resolution
        #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_DPI as i64..=MAX_DPI as i64))]
        dpi: Option<u32>,
    },
    /// Write every view of a design file
    Export {
        file: PathBuf,
        /// Output directory
        #[arg(long, short)]
        dir: Option<PathBuf>,
    },
    /// List the wood catalog
    Woods,
    /// List the board presets
    Presets,
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => Some(path),
        None => Config::default_path()
            .map_err(|e| tracing::warn!("{}", e))
            .ok(),
    };
    let config = config_path
        .as_deref()
        .map(Config::load_or_default)
        .unwrap_or_default();

    match cli.command.unwrap_or(Commands::Shell { file: None }) {
        Commands::Shell { file } => {
            let mut state = session_from_config(&config);
            shell::load_initial(&mut state, file.as_deref())?;
            let mut shell = Shell::new(state, config, config_path);
            let stdin = std::io::stdin();
            shell.run(stdin.lock(), std::io::stdout())?;
        }
        Commands::Summary { file, unit } => {
            let state = open(&config, &file)?;
            let summary = Summary::of(state.design(), unit.unwrap_or(state.unit));
            println!("{}", state.design_name);
            println!("{}", summary);
        }
        Commands::Render {
            file,
            view,
            out,
            dpi,
        } => {
            let state = open(&config, &file)?;
            let scene = state
                .render_scene(view)
                .with_context(|| format!("Cannot render {}", file.display()))?;
            write_scene(&scene, &out, dpi.unwrap_or(config.export.preview_dpi))
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Rendered {} view to {}", view, out.display());
        }
        Commands::Export { file, dir } => {
            let state = open(&config, &file)?;
            let dir = dir.unwrap_or_else(|| config.export.output_dir.clone());
            let written = state
                .export_all(&dir, config.export.dpi)
                .with_context(|| format!("Cannot export {}", file.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::Woods => shell::print_woods(&mut std::io::stdout())?,
        Commands::Presets => shell::print_presets(&mut std::io::stdout(), config.display.unit)?,
    }

    Ok(())
}

fn open(config: &Config, file: &Path) -> Result<boardkit::DesignerState> {
    let mut state = session_from_config(config);
    state
        .load_from_file(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    Ok(state)
}
