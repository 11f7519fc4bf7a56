use crate::{
    foundation::error::{SpiroError, SpiroResult},
    period::ratio::{Ratio, gcd, lcm},
};

/// A zero period would divide by zero downstream; it closes like `1/1`.
pub fn normalize_period(period: Ratio) -> Ratio {
    if period.is_zero() { Ratio::ONE } else { period }
}

/// Rational LCM: `lcm(a/b, c/d) = lcm(a, c) / gcd(b, d)`.
///
/// Both inputs are normalized first, so the result is always positive.
pub fn combine_periods(a: Ratio, b: Ratio) -> SpiroResult<Ratio> {
    let (a, b) = (normalize_period(a), normalize_period(b));
    let num = lcm(a.numer(), b.numer()).ok_or_else(|| {
        SpiroError::evaluation(format!("pipeline period overflow combining {a} and {b}"))
    })?;
    let den = gcd(a.denom(), b.denom());
    Ratio::new(num, den)
}

/// Fold every stage period into the pipeline period. An empty list yields `1/1`.
pub fn pipeline_period<I>(periods: I) -> SpiroResult<Ratio>
where
    I: IntoIterator<Item = Ratio>,
{
    let mut iter = periods.into_iter();
    let Some(first) = iter.next() else {
        return Ok(Ratio::ONE);
    };
    iter.try_fold(normalize_period(first), combine_periods)
}

#[cfg(test)]
#[path = "../../tests/unit/period/engine.rs"]
mod tests;
