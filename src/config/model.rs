use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Point,
    foundation::error::{SpiroError, SpiroResult},
    output::{canvas::CanvasSpec, svg::StrokeStyle},
    sample::dense::{DEFAULT_DENSE_SAMPLES, SamplingOpts},
    stage::registry::{Sections, resolve},
};

/// A complete drawing description.
///
/// ```json
/// {
///   "pipeline": ["gear", "spin"],
///   "stages": {
///     "gear": { "type": "circle", "radius": 40, "cycles": 7 },
///     "spin": { "type": "rotation", "total_degrees": 360 }
///   },
///   "sampling": { "initial_samples": 100000, "output_samples": 10000 },
///   "output": { "width": 800, "height": 800, "filename": "gear.svg" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawingConfig {
    /// Ordered module identifiers; a comma-separated string is accepted too.
    #[serde(deserialize_with = "de_pipeline")]
    pub pipeline: Vec<String>,
    /// Stage option sections keyed by section name.
    #[serde(default)]
    pub stages: Sections,
    /// Sampling parameters.
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Canvas, styling and destination.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[sampling]` parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingConfig {
    /// Dense, uniform-in-time sample count.
    pub initial_samples: usize,
    /// Number of points in the written path.
    pub output_samples: usize,
    /// Reparameterize by arc length instead of subsampling uniformly in time.
    pub use_arc_length: bool,
    /// Evaluate dense samples on a rayon pool.
    pub parallel: bool,
    /// Worker threads for the parallel path; rayon's default when unset.
    pub threads: Option<usize>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            initial_samples: DEFAULT_DENSE_SAMPLES,
            output_samples: 10_000,
            use_arc_length: true,
            parallel: false,
            threads: None,
        }
    }
}

/// `[output]` parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub stroke_width: f64,
    pub stroke_color: String,
    pub background_color: String,
    pub filename: PathBuf,
    /// Seed point of every pipeline fold.
    pub start_x: f64,
    pub start_y: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let canvas = CanvasSpec::default();
        let style = StrokeStyle::default();
        Self {
            width: canvas.width,
            height: canvas.height,
            margin: canvas.margin,
            stroke_width: style.stroke_width,
            stroke_color: style.stroke_color,
            background_color: style.background_color,
            filename: PathBuf::from("output.svg"),
            start_x: 0.0,
            start_y: 0.0,
        }
    }
}

impl OutputConfig {
    /// Canvas frame.
    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }

    /// Stroke styling.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color.clone(),
            background_color: self.background_color.clone(),
        }
    }

    /// Starting coordinate handed to the pipeline.
    pub fn seed(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }
}

impl DrawingConfig {
    /// Parse a drawing from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpiroResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SpiroError::serde(format!("parse drawing JSON: {e}")))
    }

    /// Parse a drawing from a JSON string.
    pub fn from_json(s: &str) -> SpiroResult<Self> {
        serde_json::from_str(s).map_err(|e| SpiroError::serde(format!("parse drawing JSON: {e}")))
    }

    /// Parse a drawing from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SpiroResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SpiroError::config(format!("open drawing JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check everything that can be checked before any stage runs.
    ///
    /// Stage options themselves are validated when the stages are built.
    pub fn validate(&self) -> SpiroResult<()> {
        for ident in &self.pipeline {
            resolve(ident, &self.stages)?;
        }

        let s = &self.sampling;
        if s.initial_samples == 0 {
            return Err(SpiroError::config("sampling.initial_samples must be >= 1"));
        }
        if s.output_samples == 0 {
            return Err(SpiroError::config("sampling.output_samples must be >= 1"));
        }
        if s.threads == Some(0) {
            return Err(SpiroError::config("sampling.threads must be >= 1 when set"));
        }

        let o = &self.output;
        o.canvas().validate()?;
        o.style().validate()?;
        if !(o.start_x.is_finite() && o.start_y.is_finite()) {
            return Err(SpiroError::config("output start point must be finite"));
        }
        if o.filename.as_os_str().is_empty() {
            return Err(SpiroError::config("output.filename must be non-empty"));
        }
        Ok(())
    }

    /// Dense sampler options derived from `[sampling]`.
    pub fn sampling_opts(&self) -> SamplingOpts {
        SamplingOpts {
            samples: self.sampling.initial_samples,
            parallel: self.sampling.parallel,
            threads: self.sampling.threads,
        }
    }
}

fn de_pipeline<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        List(Vec<String>),
        Csv(String),
    }

    let list = match Repr::deserialize(deserializer)? {
        Repr::List(v) => v,
        Repr::Csv(s) => s.split(',').map(str::to_string).collect(),
    };
    Ok(list
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
