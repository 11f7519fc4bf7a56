use rayon::prelude::*;

use crate::{
    foundation::core::Point,
    foundation::error::{SpiroError, SpiroResult},
    period::ratio::Ratio,
    pipeline::executor::Pipeline,
};

/// Default dense sample count.
pub const DEFAULT_DENSE_SAMPLES: usize = 100_000;

/// Options for [`dense_sample`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplingOpts {
    /// Number of time values, `N >= 1`.
    pub samples: usize,
    /// Evaluate on a dedicated rayon pool.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for SamplingOpts {
    fn default() -> Self {
        Self {
            samples: DEFAULT_DENSE_SAMPLES,
            parallel: false,
            threads: None,
        }
    }
}

/// The `i`-th of `n` evenly spaced times over `[0, period)`; the endpoint is excluded.
#[inline]
pub fn sample_time(i: usize, n: usize, period: Ratio) -> f64 {
    if n == 0 {
        return 0.0;
    }
    (i as f64) * (period.to_f64() / n as f64)
}

/// Evaluate `pipeline` at `opts.samples` evenly spaced times covering one full period.
///
/// Every evaluation is independent, so the parallel path returns exactly the same sequence as
/// the sequential one.
#[tracing::instrument(skip(pipeline), fields(period = %pipeline.period()))]
pub fn dense_sample(pipeline: &Pipeline, opts: &SamplingOpts) -> SpiroResult<Vec<Point>> {
    let n = opts.samples;
    if n == 0 {
        return Err(SpiroError::config("dense sample count must be >= 1"));
    }
    let period = pipeline.period();

    if !opts.parallel {
        return Ok((0..n)
            .map(|i| pipeline.run(sample_time(i, n, period)))
            .collect());
    }

    let pool = build_thread_pool(opts.threads)?;
    Ok(pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|i| pipeline.run(sample_time(i, n, period)))
            .collect()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> SpiroResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpiroError::config(
            "sampling 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SpiroError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sample/dense.rs"]
mod tests;
