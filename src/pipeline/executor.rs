use crate::{
    foundation::core::Point,
    foundation::error::SpiroResult,
    period::{engine::pipeline_period, ratio::Ratio},
    stage::contract::{SampleCtx, Stage},
};

/// An ordered, immutable chain of stages bound to their combined period.
///
/// Assembly is the second construction phase: stages are built from configuration first, then
/// handed over here, where the period is computed once and shared with every stage through
/// [`SampleCtx`].
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    period: Ratio,
    seed: Point,
}

impl Pipeline {
    /// Bind `stages` (in order) to their pipeline period, starting every sample at `seed`.
    pub fn new(stages: Vec<Box<dyn Stage>>, seed: Point) -> SpiroResult<Self> {
        let period = pipeline_period(stages.iter().map(|s| s.natural_period()))?;
        Ok(Self {
            stages,
            period,
            seed,
        })
    }

    /// Combined period: every stage is back in phase after this much reference time.
    pub fn period(&self) -> Ratio {
        self.period
    }

    /// Starting coordinate of every fold.
    pub fn seed(&self) -> Point {
        self.seed
    }

    /// Stages in evaluation order.
    pub fn stages(&self) -> &[Box<dyn Stage>] {
        &self.stages
    }

    /// Evaluate the composed pipeline at reference time `t`.
    ///
    /// Pure: the same pipeline, seed and `t` always give bit-identical output.
    #[inline]
    pub fn run(&self, t: f64) -> Point {
        let ctx = SampleCtx::new(t, self.period);
        self.stages
            .iter()
            .fold(self.seed, |pos, stage| stage.transform(pos, ctx))
    }

    /// `a -> b -> c` summary of the stage chain.
    pub fn describe(&self) -> String {
        if self.stages.is_empty() {
            return "(identity)".to_string();
        }
        self.stages
            .iter()
            .map(|s| s.type_tag())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/executor.rs"]
mod tests;
