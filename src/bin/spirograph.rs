use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Draw a spirograph pipeline described by a JSON config as an SVG polyline.
#[derive(Parser, Debug)]
#[command(name = "spirograph", version)]
struct Cli {
    /// Drawing configuration JSON.
    config: PathBuf,

    /// Output SVG path (overrides `output.filename`).
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = spirograph::DrawingConfig::from_path(&cli.config)
        .with_context(|| format!("load config '{}'", cli.config.display()))?;
    if let Some(svg) = cli.svg {
        config.output.filename = svg;
    }

    let drawing = spirograph::render_drawing(&config)?;
    let out = config.output.filename.clone();
    spirograph::write_drawing(&drawing, &out)?;

    let stats = &drawing.stats;
    eprintln!(
        "period {} ({:.4} t-cycles), {} points, length {:.2}",
        stats.period,
        stats.period.to_f64(),
        stats.output_points,
        stats.path_length
    );
    eprintln!("wrote {}", out.display());
    Ok(())
}
