use crate::error::Result;
use crate::models::BoundingBox;
use crate::utils::constants::BOUNDED_FLAG;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of the bounds file consumed by the geocoder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsRecord {
    pub viewbox: String,
    pub bounded: u8,
    pub region: String,
    pub generated: String,
}

impl BoundsRecord {
    /// Build a record from a header box. Fails if the box is invalid.
    pub fn new(bbox: &BoundingBox, region: &str, generated: DateTime<Utc>) -> Result<Self> {
        bbox.ensure_valid()?;

        Ok(Self {
            viewbox: bbox.viewbox(),
            bounded: BOUNDED_FLAG,
            region: region.to_string(),
            generated: format_timestamp(&generated),
        })
    }

    pub fn generated_now(bbox: &BoundingBox, region: &str) -> Result<Self> {
        Self::new(bbox, region, Utc::now())
    }

    pub fn bounding_box(&self) -> Result<BoundingBox> {
        BoundingBox::parse_viewbox(&self.viewbox)
    }

    /// Two-space indented JSON, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// ISO-8601 UTC with microseconds and a trailing `Z`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
