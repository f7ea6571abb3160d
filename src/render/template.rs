//! A static document with named fill-in regions.
//!
//! Slots are written as HTML comments around their default content:
//!
//! ```text
//! <h1><!-- slot:main_title -->Memories of Hope<!-- /slot:main_title --></h1>
//! ```
//!
//! Rendering drops the markers and emits either the bound value or the
//! default content. A slot name may occur more than once; every occurrence
//! receives the same value.

use super::RenderError;
use std::collections::{BTreeMap, BTreeSet};

const OPEN_PREFIX: &str = "<!-- slot:";
const CLOSE_PREFIX: &str = "<!-- /slot:";
const MARKER_SUFFIX: &str = "-->";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot { name: String, default: String },
}

#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

/// Values to bind, keyed by slot name.
#[derive(Debug, Clone, Default)]
pub struct SlotValues {
    values: BTreeMap<String, String>,
}

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        let mut segments = Vec::new();
        let mut offset = 0;

        while let Some(found) = source[offset..].find(OPEN_PREFIX) {
            let marker_at = offset + found;
            push_text(&mut segments, &source[offset..marker_at])?;

            let name_start = marker_at + OPEN_PREFIX.len();
            let name_len = source[name_start..]
                .find(MARKER_SUFFIX)
                .ok_or(RenderError::MalformedMarker(marker_at))?;
            let name = source[name_start..name_start + name_len].trim();
            validate_name(name)?;

            let body_start = name_start + name_len + MARKER_SUFFIX.len();
            let (body_len, close_len) = find_close(&source[body_start..], name)
                .ok_or_else(|| RenderError::UnclosedSlot(name.to_string()))?;
            let default = &source[body_start..body_start + body_len];
            if let Some(inner) = first_slot_name(default) {
                return Err(RenderError::NestedSlot {
                    outer: name.to_string(),
                    inner,
                });
            }

            segments.push(Segment::Slot {
                name: name.to_string(),
                default: default.to_string(),
            });
            offset = body_start + body_len + close_len;
        }
        push_text(&mut segments, &source[offset..])?;

        Ok(Self { segments })
    }

    pub fn slot_names(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Slot { name, .. } => Some(name.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Slot { name: n, .. } if n == name))
    }

    /// Fails on the first of `names` the template does not define.
    pub fn require<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), RenderError> {
        match names.into_iter().find(|name| !self.has_slot(name)) {
            Some(missing) => Err(RenderError::MissingSlot(missing.to_string())),
            None => Ok(()),
        }
    }

    pub fn render(&self, values: &SlotValues) -> Result<String, RenderError> {
        if let Some(unknown) = values.names().find(|name| !self.has_slot(name)) {
            return Err(RenderError::UnknownSlot(unknown.to_string()));
        }

        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Slot { name, default } => {
                    output.push_str(values.get(name).unwrap_or(default.as_str()));
                }
            }
        }
        Ok(output)
    }
}

fn push_text(segments: &mut Vec<Segment>, text: &str) -> Result<(), RenderError> {
    if let Some(at) = text.find(CLOSE_PREFIX) {
        let rest = &text[at + CLOSE_PREFIX.len()..];
        let name = rest
            .find(MARKER_SUFFIX)
            .map(|end| rest[..end].trim())
            .unwrap_or_else(|| rest.trim());
        return Err(RenderError::StrayClose(name.to_string()));
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
    Ok(())
}

fn first_slot_name(text: &str) -> Option<String> {
    let rest = &text[text.find(OPEN_PREFIX)? + OPEN_PREFIX.len()..];
    let end = rest.find(MARKER_SUFFIX).unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// Offset and length of the first close marker for `name`, spacing ignored.
fn find_close(text: &str, name: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find(CLOSE_PREFIX) {
        let at = offset + found;
        let name_start = at + CLOSE_PREFIX.len();
        let name_len = text[name_start..].find(MARKER_SUFFIX)?;
        let end = name_start + name_len + MARKER_SUFFIX.len();
        if text[name_start..name_start + name_len].trim() == name {
            return Some((at, end - at));
        }
        offset = end;
    }
    None
}

fn validate_name(name: &str) -> Result<(), RenderError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RenderError::InvalidSlotName(name.to_string()))
    }
}
