use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::SpiroResult,
    period::ratio::Ratio,
    stage::{
        contract::{SampleCtx, Stage},
        options::StageOptions,
    },
};

/// Slides the input along a straight line from `start` to `end` over one traversal.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    pub start: Vec2,
    pub end: Vec2,
    pub normalize: bool,
}

impl Translation {
    pub const TAG: &'static str = "translation";
    const KEYS: &'static [&'static str] = &["start_x", "start_y", "end_x", "end_y", "normalize"];

    pub fn from_options(opts: &StageOptions<'_>) -> SpiroResult<Self> {
        opts.deny_unknown(Self::KEYS)?;
        Ok(Self {
            start: Vec2::new(opts.f64_or("start_x", 0.0)?, opts.f64_or("start_y", 0.0)?),
            end: Vec2::new(opts.f64_or("end_x", 100.0)?, opts.f64_or("end_y", 0.0)?),
            normalize: opts.bool_or("normalize", true)?,
        })
    }
}

impl Stage for Translation {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn natural_period(&self) -> Ratio {
        Ratio::ONE
    }

    fn transform(&self, pos: Point, ctx: SampleCtx) -> Point {
        let t = ctx.local_t(self.normalize);
        pos + self.start + (self.end - self.start) * t
    }
}
