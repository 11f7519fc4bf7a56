use std::fmt;

use crate::{foundation::core::Point, period::ratio::Ratio};

/// Per-sample inputs handed to every stage.
///
/// `period` is the pipeline period. It is fixed when the pipeline is assembled, so every stage
/// sees the same value for the whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCtx {
    /// Reference time in `[0, period)`.
    pub t: f64,
    /// Combined pipeline period.
    pub period: Ratio,
}

impl SampleCtx {
    /// Context for time `t` within a pipeline of period `period`.
    pub fn new(t: f64, period: Ratio) -> Self {
        Self { t, period }
    }

    /// `t` rescaled to `[0, 1)` over the whole pipeline period when `normalize` is set.
    #[inline]
    pub fn local_t(self, normalize: bool) -> f64 {
        let period = self.period.to_f64();
        if normalize && period > 0.0 {
            self.t / period
        } else {
            self.t
        }
    }
}

/// The contract every pipeline stage satisfies.
///
/// Generators and transformers share the same call shape: both receive the accumulated
/// position, generators simply add their own motion to it (or ignore it).
pub trait Stage: fmt::Debug + Send + Sync {
    /// Registry tag of this stage's type.
    fn type_tag(&self) -> &'static str;

    /// How many of this stage's own cycles fit into one reference time unit.
    fn natural_period(&self) -> Ratio;

    /// Informational only; does not change how the stage is called.
    fn is_generator(&self) -> bool {
        false
    }

    /// Map `pos` at `ctx.t` to a new position. Must be pure.
    fn transform(&self, pos: Point, ctx: SampleCtx) -> Point;
}
