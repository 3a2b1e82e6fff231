//! Gridspan CLI - scripted merge/split driver

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridspan::prelude::*;
use gridspan::{header_labels, row_labels, GridCell};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "gridspan")]
#[command(author, version, about = "Merge and split regions of a grid from a script")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command script against a fresh grid
    Run {
        /// Script file (default: stdin)
        script: Option<PathBuf>,

        /// Number of rows
        #[arg(short, long, default_value_t = gridspan::DEFAULT_ROWS)]
        rows: u32,

        /// Number of columns
        #[arg(short, long, default_value_t = gridspan::DEFAULT_COLUMNS)]
        cols: u32,

        /// Output format for `print`
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Ignore gestures, merges and splits
        #[arg(long)]
        readonly: bool,
    },

    /// Print column and row header labels
    Headers {
        /// Number of columns
        #[arg(short, long)]
        columns: u32,

        /// Number of rows
        #[arg(short, long, default_value_t = 0)]
        rows: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One line of a script
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Select the given cells (if any), then merge the selection
    Merge(Vec<CellCoordinate>),
    /// Split the regions containing the given linear indices, or the
    /// selection when none are given
    Split(Vec<usize>),
    /// Select the rectangle around the given cells
    Select(Vec<CellCoordinate>),
    /// Start a gesture at the first cell, move through the rest, then end
    Drag(Vec<CellCoordinate>),
    /// Select every row the given cells touch
    Rows(Vec<CellCoordinate>),
    /// Clear the selection
    Clear,
    /// Print the grid
    Print,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            script,
            rows,
            cols,
            format,
            readonly,
        } => run(script.as_deref(), rows, cols, format, readonly),
        Commands::Headers { columns, rows } => show_headers(columns, rows),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn run(
    script: Option<&Path>,
    rows: u32,
    columns: u32,
    format: Format,
    readonly: bool,
) -> Result<()> {
    let source = match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let commands = parse_script(&source)?;

    let mut controller = GridController::with_options(&ControllerOptions {
        grid: GridOptions {
            rows,
            columns,
            ..Default::default()
        },
        readonly,
    });
    info!(rows, columns, commands = commands.len(), "running script");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (number, command) in commands {
        execute(&mut controller, &command, format, &mut out)
            .with_context(|| format!("line {}: {:?} failed", number, command))?;
    }
    Ok(())
}

fn execute(
    controller: &mut GridController,
    command: &Command,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    debug!(?command, "executing");
    match command {
        Command::Merge(coords) => {
            if !coords.is_empty() {
                controller.select(coords)?;
            }
            controller.merge()?;
        }
        Command::Split(indices) if indices.is_empty() => controller.split()?,
        Command::Split(indices) => controller.split_indices(indices)?,
        Command::Select(coords) => controller.select(coords)?,
        Command::Drag(coords) => {
            let Some((first, rest)) = coords.split_first() else {
                bail!("drag needs at least one cell");
            };
            let point = |coord: &CellCoordinate| -> Result<GesturePoint> {
                let cell = controller
                    .grid()
                    .cell(*coord)
                    .with_context(|| format!("cell {} is outside the grid", coord))?;
                Ok(GesturePoint::from_cell(cell))
            };
            let start = point(first)?;
            let moves = rest.iter().map(point).collect::<Result<Vec<_>>>()?;
            controller.on_gesture_start(start)?;
            for point in moves {
                controller.on_gesture_move(point)?;
            }
            controller.on_gesture_end(None)?;
        }
        Command::Rows(coords) => controller.select_rows(coords)?,
        Command::Clear => controller.clear_selection(),
        Command::Print => match format {
            Format::Text => out.write_all(render_text(controller).as_bytes())?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, &render_json(controller))?;
                writeln!(out)?;
            }
        },
    }
    Ok(())
}

/// Parse a script into numbered commands
///
/// Blank lines and lines starting with `#` are skipped.
fn parse_script(source: &str) -> Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (i, line) in source.lines().enumerate() {
        let number = i + 1;
        if let Some(command) =
            parse_line(line).with_context(|| format!("line {}: '{}'", number, line.trim()))?
        {
            commands.push((number, command));
        }
    }
    Ok(commands)
}

fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match name {
        "merge" => Command::Merge(parse_coordinates(&args)?),
        "split" => Command::Split(
            args.iter()
                .map(|arg| {
                    arg.parse::<usize>()
                        .with_context(|| format!("invalid index '{}'", arg))
                })
                .collect::<Result<_>>()?,
        ),
        "select" => Command::Select(require(parse_coordinates(&args)?, name)?),
        "drag" => Command::Drag(require(parse_coordinates(&args)?, name)?),
        "rows" => Command::Rows(require(parse_coordinates(&args)?, name)?),
        "clear" | "print" if !args.is_empty() => bail!("'{}' takes no arguments", name),
        "clear" => Command::Clear,
        "print" => Command::Print,
        other => bail!("unknown command '{}'", other),
    };
    Ok(Some(command))
}

fn parse_coordinates(args: &[&str]) -> Result<Vec<CellCoordinate>> {
    args.iter()
        .map(|arg| CellCoordinate::parse(arg).with_context(|| format!("invalid cell '{}'", arg)))
        .collect()
}

fn require(coords: Vec<CellCoordinate>, name: &str) -> Result<Vec<CellCoordinate>> {
    if coords.is_empty() {
        bail!("'{}' needs at least one cell", name);
    }
    Ok(coords)
}

/// Render the grid as a table of anchor keys
///
/// Absorbed cells print as `.`, multi-cell anchors carry their span, and
/// selected cells are marked with `*`.
fn render_text(controller: &GridController) -> String {
    let grid = controller.grid();
    let selection = controller.selection();
    let columns = grid.column_count();

    let label = |cell: &GridCell| -> String {
        let mut text = if cell.is_absorbed() {
            ".".to_string()
        } else if cell.row_span > 1 || cell.col_span > 1 {
            format!("{}[{}x{}]", cell.coordinate, cell.row_span, cell.col_span)
        } else {
            cell.coordinate.key()
        };
        if selection.is_highlighted(cell, columns) {
            text.push('*');
        }
        text
    };

    let labels: Vec<String> = grid.cells().iter().map(label).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(1);
    let headers = header_labels(columns);

    let mut output = String::new();
    output.push_str(&format!("{:>4} ", ""));
    for header in &headers {
        output.push_str(&format!(" {:<width$}", header, width = width));
    }
    output.push('\n');

    for (row, chunk) in row_labels(grid.row_count())
        .iter()
        .zip(labels.chunks(columns.max(1) as usize))
    {
        output.push_str(&format!("{:>4} ", row));
        for text in chunk {
            output.push_str(&format!(" {:<width$}", text, width = width));
        }
        output.push('\n');
    }
    output
}

fn render_json(controller: &GridController) -> serde_json::Value {
    let grid = controller.grid();
    serde_json::json!({
        "rows": grid.row_count(),
        "columns": grid.column_count(),
        "headers": header_labels(grid.column_count()),
        "cells": grid.view(),
        "regions": grid
            .merged_regions()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "selection": controller.selection().indices(),
    })
}

fn show_headers(columns: u32, rows: u32) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", header_labels(columns).join(" "))?;
    if rows > 0 {
        writeln!(out, "{}", row_labels(rows).join(" "))?;
    }
    Ok(())
}
