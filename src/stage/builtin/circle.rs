use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, lerp, polar},
    foundation::error::SpiroResult,
    period::ratio::Ratio,
    stage::{
        contract::{SampleCtx, Stage},
        options::StageOptions,
    },
};

/// Circle traced `cycles` times, radius interpolated from `radius` to `end_radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub end_radius: f64,
    pub cycles: f64,
    pub normalize: bool,
    period: Ratio,
}

impl Circle {
    pub const TAG: &'static str = "circle";
    const KEYS: &'static [&'static str] = &["radius", "end_radius", "cycles", "normalize"];

    pub fn from_options(opts: &StageOptions<'_>) -> SpiroResult<Self> {
        opts.deny_unknown(Self::KEYS)?;
        let radius = opts.f64_or("radius", 50.0)?;
        let end_radius = opts.f64_or("end_radius", radius)?;
        let cycles = opts.positive_f64_or("cycles", 1.0)?;
        let normalize = opts.bool_or("normalize", true)?;
        let period = opts.period_from_cycles("cycles", cycles)?;
        Ok(Self {
            radius,
            end_radius,
            cycles,
            normalize,
            period,
        })
    }
}

impl Stage for Circle {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn natural_period(&self) -> Ratio {
        self.period
    }

    fn is_generator(&self) -> bool {
        true
    }

    fn transform(&self, pos: Point, ctx: SampleCtx) -> Point {
        let t = ctx.local_t(self.normalize);
        let turn = (t * self.cycles).rem_euclid(1.0);
        let r = lerp(self.radius, self.end_radius, t);
        pos + polar(r, turn * TAU)
    }
}
