use serde_json::{Map, Value};

use crate::{
    foundation::error::{SpiroError, SpiroResult},
    period::ratio::{MAX_PERIOD_DENOMINATOR, Ratio},
};

/// Key that selects the stage implementation; never passed to a stage as an option.
pub const TYPE_KEY: &str = "type";

/// Read-only view of one configuration section.
///
/// Getters fall back to a default when the key is absent and fail with a configuration error
/// naming the section and key when the value has the wrong type or is out of range.
#[derive(Clone, Copy, Debug)]
pub struct StageOptions<'a> {
    section: &'a str,
    values: &'a Map<String, Value>,
}

impl<'a> StageOptions<'a> {
    /// Wrap the option object of section `section`.
    pub fn new(section: &'a str, values: &'a Map<String, Value>) -> Self {
        Self { section, values }
    }

    /// Section name, used in error messages.
    pub fn section(&self) -> &'a str {
        self.section
    }

    /// Explicit type tag, if the section carries one.
    pub fn type_tag(&self) -> SpiroResult<Option<&'a str>> {
        match self.values.get(TYPE_KEY) {
            None => Ok(None),
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.trim())),
            Some(_) => Err(self.err(TYPE_KEY, "must be a non-empty string")),
        }
    }

    /// Reject keys the stage does not understand (typos fail fast instead of silently defaulting).
    pub fn deny_unknown(&self, known: &[&str]) -> SpiroResult<()> {
        for key in self.values.keys() {
            if key != TYPE_KEY && !known.contains(&key.as_str()) {
                return Err(SpiroError::config(format!(
                    "[{}] unknown option '{key}' (expected one of: {})",
                    self.section,
                    known.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Finite float option.
    pub fn f64_or(&self, key: &str, default: f64) -> SpiroResult<f64> {
        let Some(v) = self.values.get(key) else {
            return Ok(default);
        };
        let Some(n) = v.as_f64() else {
            return Err(self.err(key, "must be a number"));
        };
        if !n.is_finite() {
            return Err(self.err(key, "must be finite"));
        }
        Ok(n)
    }

    /// Float option that must be strictly positive.
    pub fn positive_f64_or(&self, key: &str, default: f64) -> SpiroResult<f64> {
        let n = self.f64_or(key, default)?;
        if n <= 0.0 {
            return Err(self.err(key, "must be > 0"));
        }
        Ok(n)
    }

    /// Integer option. Floats with no fractional part are accepted.
    pub fn i64_or(&self, key: &str, default: i64) -> SpiroResult<i64> {
        let Some(v) = self.values.get(key) else {
            return Ok(default);
        };
        if let Some(n) = v.as_i64() {
            return Ok(n);
        }
        match v.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(f as i64),
            _ => Err(self.err(key, "must be an integer")),
        }
    }

    /// Boolean option. Also accepts the INI-style strings `yes/no`, `on/off`, `true/false`, `1/0`.
    pub fn bool_or(&self, key: &str, default: bool) -> SpiroResult<bool> {
        let Some(v) = self.values.get(key) else {
            return Ok(default);
        };
        match v {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "yes" | "true" | "on" => Ok(true),
                "0" | "no" | "false" | "off" => Ok(false),
                _ => Err(self.err(key, "must be a boolean")),
            },
            _ => Err(self.err(key, "must be a boolean")),
        }
    }

    /// String option.
    pub fn str_or(&self, key: &str, default: &'a str) -> SpiroResult<&'a str> {
        match self.values.get(key) {
            None => Ok(default),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(self.err(key, "must be a string")),
        }
    }

    /// Period for a floating-point cycle count, bounded by [`MAX_PERIOD_DENOMINATOR`].
    pub fn period_from_cycles(&self, key: &str, cycles: f64) -> SpiroResult<Ratio> {
        Ratio::from_f64_limited(cycles, MAX_PERIOD_DENOMINATOR)
            .map_err(|e| self.err(key, &e.to_string()))
    }

    fn err(&self, key: &str, what: &str) -> SpiroError {
        SpiroError::config(format!("[{}] option '{key}' {what}", self.section))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/options.rs"]
mod tests;
