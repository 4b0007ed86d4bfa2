use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treebench::{
    build_bottom_up, build_iterative, build_recursive, render_svg, render_table, run_sweep,
    Builder, ChartStyle, ChildRules, SweepConfig, TimingConfig,
};

#[derive(Parser, Debug)]
#[command(name = "treebench", about = "Time recursive vs iterative binary tree construction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time the builders across a height range and chart the result.
    Compare {
        /// Root value for every tree.
        #[arg(long, default_value_t = 7, allow_hyphen_values = true)]
        root: i64,
        /// Smallest height measured.
        #[arg(long, default_value_t = 1)]
        min_height: u32,
        /// Largest height measured (inclusive).
        #[arg(long, default_value_t = 10)]
        max_height: u32,
        /// Builder calls per timed trial.
        #[arg(long, default_value_t = 1)]
        number: usize,
        /// Timed trials per measurement; the fastest is kept.
        #[arg(long, default_value_t = 5)]
        repeat: usize,
        /// Builders to compare (recursive, iterative, bottom-up).
        #[arg(long = "builder", default_values_t = [Builder::Recursive, Builder::Iterative])]
        builders: Vec<Builder>,
        /// Where to write the SVG chart.
        #[arg(long, default_value = "comparison.svg")]
        output: PathBuf,
    },
    /// Print one tree in its builder's notation.
    Show {
        /// Tree height (0 = a lone leaf).
        #[arg(long)]
        height: u32,
        /// Root value.
        #[arg(long, default_value_t = 7, allow_hyphen_values = true)]
        root: i64,
        /// Which builder's representation to print.
        #[arg(long, default_value_t = Builder::Iterative)]
        builder: Builder,
    },
}

/// Trees past this height are too large to print usefully.
const MAX_SHOW_HEIGHT: u32 = 12;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            root,
            min_height,
            max_height,
            number,
            repeat,
            builders,
            output,
        } => {
            let config = SweepConfig {
                root,
                heights: min_height..=max_height,
                builders,
                timing: TimingConfig { number, repeat },
            };
            run_compare(&config, output)?
        }
        Commands::Show {
            height,
            root,
            builder,
        } => run_show(height, root, builder)?,
    }

    Ok(())
}

fn run_compare(config: &SweepConfig, output: PathBuf) -> Result<()> {
    info!(
        root = config.root,
        heights = ?config.heights,
        number = config.timing.number,
        repeat = config.timing.repeat,
        "starting sweep"
    );

    let comparison = run_sweep(config).context("benchmark sweep failed")?;
    println!("{}", render_table(&comparison));

    let svg = render_svg(&comparison, &ChartStyle::default()).context("failed to render chart")?;
    std::fs::write(&output, svg)
        .with_context(|| format!("failed to write chart to {}", output.display()))?;
    info!(path = %output.display(), "chart written");

    Ok(())
}

fn run_show(height: u32, root: i64, builder: Builder) -> Result<()> {
    ensure!(
        height <= MAX_SHOW_HEIGHT,
        "height {height} is too large to print (max {MAX_SHOW_HEIGHT})"
    );

    let rules = ChildRules::default();
    match builder {
        Builder::Recursive => println!("{}", build_recursive(height, root, &rules)),
        Builder::Iterative => println!("{}", build_iterative(height, root, &rules)),
        Builder::BottomUp => println!("{}", build_bottom_up(height, root, &rules)),
    }

    Ok(())
}
