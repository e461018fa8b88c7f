use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_grid_config::{Config, VerticalAlign as ConfigAlign};
use markdown_grid_engine::{Grid, StyleContext, StyleSheet, VerticalAlign, io, render_lines};
use std::path::{Path, PathBuf};

mod output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tab-separated cell text, one line per grid row
    Tsv,
    /// Cell addresses with styles and marked-up text
    Cells,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Tsv => "tsv",
            Format::Cells => "txt",
        }
    }
}

#[derive(Parser)]
#[command(name = "markdown-grid")]
#[command(about = "Lay out a Markdown file on a spreadsheet-style grid")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output file (defaults to input name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Columns that make up one visual line
    #[arg(long)]
    merge_cols: Option<usize>,

    /// Font for headings and body text
    #[arg(long)]
    font: Option<String>,

    /// Config file (defaults to ~/.config/markdown-grid/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "tsv")]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("Created {}", output.display());
    Ok(())
}

/// Converts the input file and returns where the result was written.
fn run(cli: &Cli) -> Result<PathBuf> {
    let config = resolve_config(cli)?;
    log::debug!("Using config: {config:?}");

    let lines = io::read_lines(&cli.input)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?;

    let mut grid = Grid::new(StyleContext::new(style_sheet(&config)));
    let summary = render_lines(lines, &mut grid, config.layout.merge_cols)
        .with_context(|| format!("Failed to render {}", cli.input.display()))?;
    log::info!(
        "Rendered {} lines into {} rows",
        summary.lines,
        summary.rows
    );

    let content = match cli.format {
        Format::Tsv => output::to_tsv(&grid),
        Format::Cells => output::to_cells(&grid),
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, cli.format));
    io::write_file(&output, &content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(output)
}

/// File config, or defaults when there is none, with command-line flags on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found at {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    apply_overrides(loaded, cli.merge_cols, cli.font.clone())
}

fn apply_overrides(
    mut config: Config,
    merge_cols: Option<usize>,
    font: Option<String>,
) -> Result<Config> {
    if let Some(merge_cols) = merge_cols {
        config.layout.merge_cols = merge_cols;
    }
    if let Some(font) = font {
        config.font.name = font;
    }
    Ok(config.validate()?)
}

fn style_sheet(config: &Config) -> StyleSheet {
    StyleSheet {
        font_name: config.font.name.clone(),
        h1_size: config.font.h1_size,
        h2_size: config.font.h2_size,
        h3_size: config.font.h3_size,
        normal_size: config.font.normal_size,
        vertical_align: match config.cell.vertical_align {
            ConfigAlign::Top => VerticalAlign::Top,
            ConfigAlign::Center => VerticalAlign::Center,
            ConfigAlign::Bottom => VerticalAlign::Bottom,
        },
    }
}

fn default_output_path(input: &Path, format: Format) -> PathBuf {
    input.with_extension(format.extension())
}
