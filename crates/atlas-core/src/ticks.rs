// File: crates/atlas-core/src/ticks.rs
// Summary: Tick value selection: even spacing, "nice" intervals and fixed steps.

use serde::Deserialize;

use crate::error::{AtlasError, Result};
use crate::scale::extent;

/// Most ticks a single axis may carry.
pub const MAX_TICKS: usize = 10_000;

/// Rejects a `step` that would cut `[start, end]` into more than [`MAX_TICKS`] ticks.
pub fn check_tick_count(start: f64, end: f64, step: f64) -> Result<()> {
    let count = ((end - start) / step).abs();
    if !count.is_finite() || count > MAX_TICKS as f64 {
        return Err(AtlasError::InvalidTicks(format!(
            "step {step} over [{start}, {end}] gives more than {MAX_TICKS} ticks"
        )));
    }
    Ok(())
}

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// How an axis picks its tick values from the data.
///
/// Numeric codes: `-1` computes a nice interval, `0` uses every value,
/// any positive number is a fixed step.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "f64")]
pub enum TickMode {
    Auto,
    All,
    Step(f64),
}

impl TryFrom<f64> for TickMode {
    type Error = AtlasError;

    fn try_from(code: f64) -> std::result::Result<Self, Self::Error> {
        if code == -1.0 {
            Ok(TickMode::Auto)
        } else if code == 0.0 {
            Ok(TickMode::All)
        } else if code > 0.0 && code.is_finite() {
            Ok(TickMode::Step(code))
        } else {
            Err(AtlasError::InvalidTicks(format!("{code} (use -1, 0 or a positive step)")))
        }
    }
}

impl Default for TickMode {
    fn default() -> Self { TickMode::All }
}

/// Interval giving roughly `max(5, n/10)` ticks, rounded to 1, 2 or 5 times a power of ten.
/// The count is capped so the rounded interval stays within [`MAX_TICKS`].
pub fn nice_interval(values: &[f64]) -> Option<f64> {
    let (lo, hi) = extent(values.iter().copied())?;
    let range = hi - lo;
    if range <= 0.0 {
        return None;
    }
    // rounding down to 1/2/5 can multiply the count by up to 2.5
    let desired = ((values.len() as f64 / 10.0).round()).max(5.0).min((MAX_TICKS / 4) as f64);
    let raw = range / desired;
    let log = raw.log10();
    let exponent = log.floor();
    let fraction = log - exponent;
    let factor = if fraction < 0.301 {
        1.0
    } else if fraction < 0.699 {
        2.0
    } else {
        5.0
    };
    Some(factor * 10f64.powf(exponent))
}

/// Values from the minimum in `interval` steps, closed by the maximum.
pub fn values_by_interval(interval: f64, values: &[f64]) -> Result<Vec<f64>> {
    let Some((lo, hi)) = extent(values.iter().copied()) else { return Ok(Vec::new()) };
    if !(interval > 0.0) {
        return Ok(vec![round2(lo), round2(hi)]);
    }
    check_tick_count(lo, hi, interval)?;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        // multiply rather than accumulate to keep float drift out of the labels
        let v = lo + interval * k as f64;
        if v < hi {
            out.push(round2(v));
            k += 1;
        } else {
            out.push(round2(hi));
            break;
        }
    }
    Ok(out)
}

/// Tick values for `mode`. `Auto` falls back to every value when no interval exists.
pub fn tick_values(mode: TickMode, values: &[f64]) -> Result<Vec<f64>> {
    match mode {
        TickMode::All => Ok(values.iter().copied().filter(|v| v.is_finite()).collect()),
        TickMode::Step(step) => values_by_interval(step, values),
        TickMode::Auto => match nice_interval(values) {
            Some(interval) => values_by_interval(interval, values),
            None => Ok(values.iter().copied().filter(|v| v.is_finite()).collect()),
        },
    }
}

/// Shortest label for a tick value: integers without decimals, others as rounded.
pub fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", round2(v))
    }
}
