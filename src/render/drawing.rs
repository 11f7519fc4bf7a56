use std::path::Path;

use anyhow::Context as _;

use crate::{
    config::model::DrawingConfig,
    foundation::core::{Point, Rect},
    foundation::error::SpiroResult,
    output::{
        canvas::{bounds, normalize_to_canvas},
        svg::render_svg,
    },
    period::ratio::Ratio,
    pipeline::executor::Pipeline,
    sample::{
        arc_length::{path_length, resample_by_arc_length, subsample_uniform},
        dense::dense_sample,
    },
    stage::registry::build_stages,
};

/// Summary of one run, measured before canvas normalization.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderStats {
    /// Combined pipeline period.
    pub period: Ratio,
    /// Dense samples evaluated.
    pub dense_samples: usize,
    /// Points in the written path.
    pub output_points: usize,
    /// Length of the output path in pipeline units.
    pub path_length: f64,
    /// Bounds of the output path in pipeline units.
    pub bounds: Option<Rect>,
}

/// A finished drawing.
#[derive(Clone, Debug)]
pub struct Drawing {
    /// Output path in canvas coordinates.
    pub points: Vec<Point>,
    /// Complete SVG document.
    pub svg: String,
    /// Run statistics.
    pub stats: RenderStats,
}

/// Build the pipeline described by `config` and draw one full period of it.
///
/// All configuration errors surface before the first sample is taken.
///
/// Pipeline:
/// 1. validate and build stages
/// 2. assemble the [`Pipeline`] (computes the period once)
/// 3. dense sample, then resample by arc length (or subsample uniformly)
/// 4. fit to the canvas and serialize
#[tracing::instrument(skip(config))]
pub fn render_drawing(config: &DrawingConfig) -> SpiroResult<Drawing> {
    config.validate()?;
    let stages = build_stages(&config.pipeline, &config.stages)?;
    if stages.is_empty() {
        tracing::warn!("empty pipeline; every sample is the seed point");
    }
    let pipeline = Pipeline::new(stages, config.output.seed())?;
    let period = pipeline.period();
    tracing::info!(
        pipeline = %pipeline.describe(),
        period = %period,
        cycles = period.to_f64(),
        "pipeline assembled"
    );

    let sampling = config.sampling_opts();
    let dense = dense_sample(&pipeline, &sampling)?;
    let wanted = config.sampling.output_samples;
    let points = if config.sampling.use_arc_length {
        tracing::info!(from = dense.len(), to = wanted, "arc-length reparameterization");
        resample_by_arc_length(&dense, wanted)
    } else {
        tracing::info!(from = dense.len(), to = wanted, "uniform-in-time subsampling");
        subsample_uniform(&dense, wanted)
    };
    drop(dense);

    let stats = RenderStats {
        period,
        dense_samples: sampling.samples,
        output_points: points.len(),
        path_length: path_length(&points),
        bounds: bounds(&points),
    };
    if let Some(b) = stats.bounds {
        tracing::info!(
            length = stats.path_length,
            x0 = b.x0,
            x1 = b.x1,
            y0 = b.y0,
            y1 = b.y1,
            points = stats.output_points,
            "path sampled"
        );
    }

    let canvas = config.output.canvas();
    let normalized = normalize_to_canvas(&points, &canvas);
    let svg = render_svg(&normalized, &canvas, &config.output.style());
    Ok(Drawing {
        points: normalized,
        svg,
        stats,
    })
}

/// Write `drawing` to `path`, creating missing parent directories.
pub fn write_drawing(drawing: &Drawing, path: &Path) -> SpiroResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, drawing.svg.as_bytes())
        .with_context(|| format!("write svg '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = drawing.svg.len(), "svg written");
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> SpiroResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/drawing.rs"]
mod tests;
