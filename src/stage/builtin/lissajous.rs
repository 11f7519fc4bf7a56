use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Vec2, lerp},
    foundation::error::{SpiroError, SpiroResult},
    period::ratio::{Ratio, gcd},
    stage::{
        contract::{SampleCtx, Stage},
        options::StageOptions,
    },
};

/// Lissajous figure `(ax sin(fx θ + φ), ay sin(fy θ))`, traced `cycles` times.
#[derive(Clone, Debug, PartialEq)]
pub struct Lissajous {
    pub freq_x: u32,
    pub freq_y: u32,
    pub amplitude: Vec2,
    pub end_amplitude: Vec2,
    pub phase_rad: f64,
    pub cycles: f64,
    pub normalize: bool,
    closure_cycles: u32,
    period: Ratio,
}

impl Lissajous {
    pub const TAG: &'static str = "lissajous";
    const KEYS: &'static [&'static str] = &[
        "freq_x",
        "freq_y",
        "amplitude_x",
        "amplitude_y",
        "end_amplitude_x",
        "end_amplitude_y",
        "phase",
        "cycles",
        "normalize",
    ];

    pub fn from_options(opts: &StageOptions<'_>) -> SpiroResult<Self> {
        opts.deny_unknown(Self::KEYS)?;
        let freq_x = frequency(opts, "freq_x", 3)?;
        let freq_y = frequency(opts, "freq_y", 2)?;
        let amplitude = Vec2::new(
            opts.f64_or("amplitude_x", 50.0)?,
            opts.f64_or("amplitude_y", 50.0)?,
        );
        let end_amplitude = Vec2::new(
            opts.f64_or("end_amplitude_x", amplitude.x)?,
            opts.f64_or("end_amplitude_y", amplitude.y)?,
        );
        let phase_rad = opts.f64_or("phase", 90.0)?.to_radians();
        let cycles = match opts.f64_or("cycles", 0.0)? {
            c if c <= 0.0 => 1.0,
            c => c,
        };
        let normalize = opts.bool_or("normalize", true)?;

        let g = gcd(u64::from(freq_x), u64::from(freq_y)) as u32;
        Ok(Self {
            freq_x,
            freq_y,
            amplitude,
            end_amplitude,
            phase_rad,
            cycles,
            normalize,
            closure_cycles: freq_y / g,
            period: opts.period_from_cycles("cycles", cycles)?,
        })
    }
}

fn frequency(opts: &StageOptions<'_>, key: &str, default: i64) -> SpiroResult<u32> {
    let f = opts.i64_or(key, default)?;
    u32::try_from(f)
        .ok()
        .filter(|&f| f > 0)
        .ok_or_else(|| {
            SpiroError::config(format!(
                "[{}] option '{key}' must be a positive integer",
                opts.section()
            ))
        })
}

impl Stage for Lissajous {
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
        let ax = lerp(self.amplitude.x, self.end_amplitude.x, t);
        let ay = lerp(self.amplitude.y, self.end_amplitude.y, t);

        let theta = turn * f64::from(self.closure_cycles) * TAU;
        let x = ax * (f64::from(self.freq_x) * theta + self.phase_rad).sin();
        let y = ay * (f64::from(self.freq_y) * theta).sin();
        pos + Vec2::new(x, y)
    }
}
