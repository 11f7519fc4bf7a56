use std::fmt;

use crate::foundation::error::{SpiroError, SpiroResult};

/// Largest denominator used when approximating floating-point cycle counts.
///
/// Cycle counts that are not well approximated by any fraction with a denominator at or below
/// this bound produce an approximate closure: the curve stops close to, but not exactly at, its
/// start. Raising it makes LCMs (and therefore sample spans) grow quickly.
pub const MAX_PERIOD_DENOMINATOR: u64 = 1000;

// Beyond 2^53 an f64 no longer represents every integer.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Non-negative rational number kept in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Ratio {
    num: u64,
    den: u64,
}

impl Ratio {
    /// `1/1`: closes exactly once over the reference time axis.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// `0/1`.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// Build a reduced ratio. Fails when `den == 0`.
    pub fn new(num: u64, den: u64) -> SpiroResult<Self> {
        if den == 0 {
            return Err(SpiroError::validation("ratio denominator must be > 0"));
        }
        Ok(Self::reduced(num, den))
    }

    /// Whole number `n/1`.
    pub const fn integer(n: u64) -> Self {
        Self { num: n, den: 1 }
    }

    pub(crate) fn reduced(num: u64, den: u64) -> Self {
        debug_assert!(den > 0);
        let g = gcd(num, den);
        if g == 0 {
            return Self::ZERO;
        }
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Closest fraction to `|value|` whose denominator does not exceed `max_den`.
    ///
    /// Walks the continued-fraction expansion of `value` and, once the next convergent would
    /// overflow the bound, picks the closer of the last convergent and the best semiconvergent.
    pub fn from_f64_limited(value: f64, max_den: u64) -> SpiroResult<Self> {
        if !value.is_finite() {
            return Err(SpiroError::validation(format!(
                "cannot express non-finite value {value} as a ratio"
            )));
        }
        if max_den == 0 {
            return Err(SpiroError::validation("max denominator must be >= 1"));
        }
        let x = value.abs();
        if x >= MAX_EXACT_F64 {
            return Err(SpiroError::validation(format!(
                "value {value} is too large to express as a ratio"
            )));
        }

        let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
        let mut rem = x;
        loop {
            let a_f = rem.floor();
            let a = a_f as u64;
            let Some(q2) = a.checked_mul(q1).and_then(|v| v.checked_add(q0)) else {
                break;
            };
            if q2 > max_den {
                break;
            }
            let Some(p2) = a.checked_mul(p1).and_then(|v| v.checked_add(p0)) else {
                break;
            };
            (p0, q0, p1, q1) = (p1, q1, p2, q2);

            let frac = rem - a_f;
            if frac <= f64::EPSILON * rem.max(1.0) {
                return Ok(Self::reduced(p1, q1));
            }
            rem = 1.0 / frac;
        }

        // The first iteration always succeeds (q2 == 1), so q1 >= 1 here.
        let k = (max_den - q0) / q1;
        let semi = Self::reduced(p0 + k * p1, q0 + k * q1);
        let conv = Self::reduced(p1, q1);
        if (conv.to_f64() - x).abs() <= (semi.to_f64() - x).abs() {
            Ok(conv)
        } else {
            Ok(semi)
        }
    }

    /// Numerator (lowest terms).
    pub fn numer(self) -> u64 {
        self.num
    }

    /// Denominator (lowest terms, always > 0).
    pub fn denom(self) -> u64 {
        self.den
    }

    /// Whether this ratio equals zero.
    pub fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Nearest `f64` to this ratio.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `None` on overflow; `lcm(0, x) == 0`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
#[path = "../../tests/unit/period/ratio.rs"]
mod tests;
