use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    foundation::error::{SpiroError, SpiroResult},
    stage::{
        builtin::{Circle, Lissajous, OscillatingRotation, Rotation, Translation},
        contract::Stage,
        options::StageOptions,
    },
};

/// Option sections keyed by section name.
pub type Sections = BTreeMap<String, Map<String, Value>>;

/// Every stage type known to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// [`Circle`]
    Circle,
    /// [`Lissajous`]
    Lissajous,
    /// [`Rotation`]
    Rotation,
    /// [`OscillatingRotation`]
    OscillatingRotation,
    /// [`Translation`]
    Translation,
}

impl StageKind {
    /// All kinds, in registry order.
    pub const ALL: [StageKind; 5] = [
        StageKind::Circle,
        StageKind::Lissajous,
        StageKind::Rotation,
        StageKind::OscillatingRotation,
        StageKind::Translation,
    ];

    /// Canonical type tag.
    pub fn tag(self) -> &'static str {
        match self {
            StageKind::Circle => Circle::TAG,
            StageKind::Lissajous => Lissajous::TAG,
            StageKind::Rotation => Rotation::TAG,
            StageKind::OscillatingRotation => OscillatingRotation::TAG,
            StageKind::Translation => Translation::TAG,
        }
    }

    /// Look up a type tag. Case-insensitive; `-` and `_` are interchangeable.
    pub fn parse(tag: &str) -> SpiroResult<Self> {
        let norm = tag.trim().to_ascii_lowercase().replace('-', "_");
        if norm.is_empty() {
            return Err(SpiroError::config("stage type must be non-empty"));
        }
        match norm.as_str() {
            "circle" => Ok(StageKind::Circle),
            "lissajous" => Ok(StageKind::Lissajous),
            "rotation" => Ok(StageKind::Rotation),
            "oscillating_rotation" | "oscillatingrotation" => Ok(StageKind::OscillatingRotation),
            "translation" => Ok(StageKind::Translation),
            _ => {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.tag()).collect();
                Err(SpiroError::config(format!(
                    "unknown stage type '{tag}' (known: {})",
                    known.join(", ")
                )))
            }
        }
    }

    /// Construct the stage from its options section.
    pub fn build(self, opts: &StageOptions<'_>) -> SpiroResult<Box<dyn Stage>> {
        Ok(match self {
            StageKind::Circle => Box::new(Circle::from_options(opts)?),
            StageKind::Lissajous => Box::new(Lissajous::from_options(opts)?),
            StageKind::Rotation => Box::new(Rotation::from_options(opts)?),
            StageKind::OscillatingRotation => Box::new(OscillatingRotation::from_options(opts)?),
            StageKind::Translation => Box::new(Translation::from_options(opts)?),
        })
    }
}

/// Where a pipeline identifier resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Section whose options configure the stage.
    pub section: &'a str,
    /// Selected stage type.
    pub kind: StageKind,
}

/// Resolve a pipeline identifier to its section and stage type.
///
/// `rotation.slow` uses section `rotation.slow` if present, else section `rotation`. Without an
/// explicit `type` option the identifier itself (minus any `.suffix`) names the type.
pub fn resolve<'a>(ident: &str, sections: &'a Sections) -> SpiroResult<Resolved<'a>> {
    let ident = ident.trim();
    if ident.is_empty() {
        return Err(SpiroError::config("pipeline entry must be non-empty"));
    }
    let base = ident.rsplit_once('.').map(|(base, _)| base);

    let (section, values) = match sections.get_key_value(ident) {
        Some((name, values)) => (name.as_str(), values),
        None => match base.and_then(|b| sections.get_key_value(b)) {
            Some((name, values)) => (name.as_str(), values),
            None => {
                return Err(SpiroError::config(match base {
                    Some(b) => format!("no config section found for '{ident}' or '{b}'"),
                    None => format!("no config section found for '{ident}'"),
                }));
            }
        },
    };

    let opts = StageOptions::new(section, values);
    let kind = match opts.type_tag()? {
        Some(tag) => StageKind::parse(tag)?,
        None => StageKind::parse(base.unwrap_or(ident))?,
    };
    Ok(Resolved { section, kind })
}

/// Build every stage named in `pipeline`, in order. Fails on the first bad entry.
pub fn build_stages(pipeline: &[String], sections: &Sections) -> SpiroResult<Vec<Box<dyn Stage>>> {
    let mut stages = Vec::with_capacity(pipeline.len());
    for ident in pipeline {
        let resolved = resolve(ident, sections)?;
        let opts = StageOptions::new(resolved.section, &sections[resolved.section]);
        let stage = resolved.kind.build(&opts)?;
        tracing::debug!(
            ident = ident.as_str(),
            section = resolved.section,
            kind = resolved.kind.tag(),
            period = %stage.natural_period(),
            generator = stage.is_generator(),
            "built stage"
        );
        stages.push(stage);
    }
    Ok(stages)
}

#[cfg(test)]
#[path = "../../tests/unit/stage/registry.rs"]
mod tests;
