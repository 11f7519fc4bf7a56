//! Spirograph composes a chain of parametric stages into one closed planar curve and writes it
//! as an SVG polyline.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `DrawingConfig -> Vec<Box<dyn Stage>>` through the static stage registry
//! 2. **Assemble**: `Pipeline::new` folds every stage period into one exact rational period
//! 3. **Sample**: evaluate one full period uniformly in time (optionally on a rayon pool)
//! 4. **Resample**: redistribute points uniformly by arc length
//! 5. **Fit and write**: scale into the canvas, flip Y, serialize one open SVG path
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail fast**: every configuration error surfaces before the first sample.
//! - **Deterministic**: stages are immutable after construction and sampling is pure.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod output;
mod period;
mod pipeline;
mod render;
mod sample;
mod stage;

pub use config::model::{DrawingConfig, OutputConfig, SamplingConfig};
pub use foundation::core::{Point, Rect, Vec2};
pub use foundation::error::{SpiroError, SpiroResult};
pub use output::canvas::{CanvasSpec, bounds, fit_scale, normalize_to_canvas};
pub use output::svg::{StrokeStyle, path_data, render_svg};
pub use period::engine::{combine_periods, normalize_period, pipeline_period};
pub use period::ratio::{MAX_PERIOD_DENOMINATOR, Ratio};
pub use pipeline::executor::Pipeline;
pub use render::drawing::{Drawing, RenderStats, ensure_parent_dir, render_drawing, write_drawing};
pub use sample::arc_length::{
    arc_length_table, path_length, resample_by_arc_length, subsample_uniform,
};
pub use sample::dense::{DEFAULT_DENSE_SAMPLES, SamplingOpts, dense_sample, sample_time};
pub use stage::builtin::{Circle, Lissajous, OscillatingRotation, Rotation, Translation};
pub use stage::contract::{SampleCtx, Stage};
pub use stage::options::StageOptions;
pub use stage::registry::{Resolved, Sections, StageKind, build_stages, resolve};
