// File: crates/demo/src/main.rs
// Summary: `chart-gallery` CLI: list charts, render PNGs, dump option JSON, inspect the histogram, manage config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{build_option, compute_histogram, generate_samples, Chart, ChartKind, DisplayOptions, Gallery};
use clap::{Args, Parser, Subcommand};
use gallery_demo::{logging, Config};

/// Render and inspect the chart gallery from the command line
#[derive(Debug, Parser)]
#[command(name = "chart-gallery", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to $CHART_GALLERY_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every chart with its title
    List,
    /// Render one chart (or all of them) to PNG
    Render(RenderArgs),
    /// Print the declarative option of a chart as JSON
    #[command(name = "option")]
    ShowOption {
        kind: ChartKind,
        #[arg(long)]
        donut: bool,
        #[arg(long)]
        multi_bar: bool,
    },
    /// Print the grayscale histogram bins
    Histogram {
        #[arg(long, default_value_t = chart_core::DEFAULT_BIN_COUNT)]
        bins: usize,
        /// Also write the bins as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the defaults to the config path
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Chart to render (line, bar, horizontalBar, ...)
    #[arg(required_unless_present = "all")]
    kind: Option<ChartKind>,
    #[arg(long, conflicts_with = "kind")]
    all: bool,
    #[arg(long)]
    out_dir: Option<PathBuf>,
    #[arg(long)]
    theme: Option<String>,
    /// Render the pie chart as a donut
    #[arg(long)]
    donut: bool,
    /// Use the grouped dataset for the bar chart
    #[arg(long)]
    multi_bar: bool,
    /// Download-style export: doubled pixel ratio on white
    #[arg(long)]
    download: bool,
    #[arg(long)]
    pixel_ratio: Option<f32>,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&logging::level_for_verbosity(cli.verbose, &config.log.level));

    match cli.command {
        Command::List => list(),
        Command::Render(args) => render(&config, args),
        Command::ShowOption { kind, donut, multi_bar } => {
            let display = DisplayOptions { donut, multi_bar, ..config.display_options() };
            let option = build_option(kind, &display, &config.theme())?;
            println!("{}", option.to_json()?);
            Ok(())
        }
        Command::Histogram { bins, csv } => histogram(bins, csv.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigAction::Init { force } => {
                let path = Config::resolve_path(cli.config.as_deref());
                if path.exists() && !force {
                    anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
                }
                Config::default().save_to(&path)?;
                println!("Wrote {}", path.display());
                Ok(())
            }
        },
    }
}

fn list() -> Result<()> {
    for (i, kind) in ChartKind::ALL.iter().enumerate() {
        // shortcut digit: 1..9 then 0
        let key = (i + 1) % 10;
        println!("{key}  {:<14} {}", kind.slug(), kind.title());
    }
    Ok(())
}

fn render(config: &Config, args: RenderArgs) -> Result<()> {
    let kinds: Vec<ChartKind> = match args.kind {
        Some(k) if !args.all => vec![k],
        _ => ChartKind::ALL.to_vec(),
    };
    let theme = match &args.theme {
        Some(name) => chart_core::theme::find(name),
        None => config.theme(),
    };
    let display = DisplayOptions {
        donut: args.donut,
        multi_bar: args.multi_bar,
        ..config.display_options()
    };
    let mut opts = if args.download { chart_core::RenderOptions::download() } else { config.render_options() };
    if let Some(r) = args.pixel_ratio { opts.pixel_ratio = r; }
    if let Some(w) = args.width { opts.width = w; }
    if let Some(h) = args.height { opts.height = h; }
    let out_dir = args.out_dir.unwrap_or_else(|| config.output_dir());

    let mut gallery = Gallery::new(display, theme);
    let now = chrono::Utc::now();
    for kind in kinds {
        gallery.select(kind);
        let option = gallery.option().with_context(|| format!("building option for {kind}"))?;
        let name = if args.download { gallery.download_file_name(now) } else { format!("chart-{}.png", kind.slug()) };
        let path = out_dir.join(name);
        Chart::new(option, *gallery.theme())
            .render_to_png(&opts, &path)
            .with_context(|| format!("rendering {kind}"))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn histogram(bins: usize, csv_path: Option<&Path>) -> Result<()> {
    let samples = generate_samples();
    let h = compute_histogram(&samples, bins)?;
    println!("{} samples, range [{}, {}], bin width {:.2}", h.total(), h.min, h.max, h.bin_width);
    for b in &h.bins {
        println!("{:>4}  {:>6}", b.label, b.count);
    }

    if let Some(path) = csv_path {
        let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
        for b in &h.bins {
            wtr.serialize(b)?;
        }
        wtr.flush()?;
        tracing::info!(path = %path.display(), bins = h.bins.len(), "wrote histogram csv");
    }
    Ok(())
}
