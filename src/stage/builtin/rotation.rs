use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, rotate_about},
    foundation::error::SpiroResult,
    period::ratio::Ratio,
    stage::{
        contract::{SampleCtx, Stage},
        options::StageOptions,
    },
};

/// Spins the drawing surface by `total_degrees` over the run: `z' = o + (z - o) e^{iθ(t)}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotation {
    pub total_rad: f64,
    pub origin: Point,
    pub normalize: bool,
    period: Ratio,
}

impl Rotation {
    pub const TAG: &'static str = "rotation";
    const KEYS: &'static [&'static str] = &["total_degrees", "origin_x", "origin_y", "normalize"];

    pub fn from_options(opts: &StageOptions<'_>) -> SpiroResult<Self> {
        opts.deny_unknown(Self::KEYS)?;
        let total_degrees = opts.f64_or("total_degrees", 360.0)?;
        let origin = Point::new(opts.f64_or("origin_x", 0.0)?, opts.f64_or("origin_y", 0.0)?);
        let normalize = opts.bool_or("normalize", true)?;

        // Whole turns of the paper; a zero turn is normalized by the period engine.
        let period = opts.period_from_cycles("total_degrees", total_degrees.abs() / 360.0)?;
        Ok(Self {
            total_rad: total_degrees.to_radians(),
            origin,
            normalize,
            period,
        })
    }
}

impl Stage for Rotation {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn natural_period(&self) -> Ratio {
        self.period
    }

    fn transform(&self, pos: Point, ctx: SampleCtx) -> Point {
        let theta = ctx.local_t(self.normalize) * self.total_rad;
        rotate_about(pos, self.origin, theta)
    }
}

/// Rocks the surface back and forth: `θ(t) = A sin(2π · oscillations · t)`.
#[derive(Clone, Debug, PartialEq)]
pub struct OscillatingRotation {
    pub amplitude_rad: f64,
    pub oscillations: f64,
    pub center: Point,
    pub normalize: bool,
    period: Ratio,
}

impl OscillatingRotation {
    pub const TAG: &'static str = "oscillating_rotation";
    const KEYS: &'static [&'static str] = &[
        "amplitude_degrees",
        "oscillations",
        "rotate_around_origin",
        "center_x",
        "center_y",
        "normalize",
    ];

    pub fn from_options(opts: &StageOptions<'_>) -> SpiroResult<Self> {
        opts.deny_unknown(Self::KEYS)?;
        let amplitude_rad = opts.f64_or("amplitude_degrees", 45.0)?.to_radians();
        let oscillations = opts.f64_or("oscillations", 1.0)?;
        let center = if opts.bool_or("rotate_around_origin", true)? {
            Point::ORIGIN
        } else {
            Point::new(opts.f64_or("center_x", 0.0)?, opts.f64_or("center_y", 0.0)?)
        };
        let normalize = opts.bool_or("normalize", true)?;
        Ok(Self {
            amplitude_rad,
            oscillations,
            center,
            normalize,
            period: opts.period_from_cycles("oscillations", oscillations)?,
        })
    }
}

impl Stage for OscillatingRotation {
    fn type_tag(&self) -> &'static str {
        Self::TAG
    }

    fn natural_period(&self) -> Ratio {
        self.period
    }

    fn transform(&self, pos: Point, ctx: SampleCtx) -> Point {
        let t = ctx.local_t(self.normalize);
        let theta = self.amplitude_rad * (TAU * self.oscillations * t).sin();
        rotate_about(pos, self.center, theta)
    }
}
