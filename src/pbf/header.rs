use crate::models::BoundingBox;
use crate::utils::coordinates::degrees_to_nanodegrees;
use osmpbf::HeaderBlock;
use serde::Serialize;

/// Header metadata of an OSM PBF extract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OsmHeader {
    /// Declared box snapped to the 1e-7 degree node grid, valid or not
    pub bbox: Option<BoundingBox>,
    pub required_features: Vec<String>,
    pub optional_features: Vec<String>,
}

impl OsmHeader {
    pub fn from_block(block: &HeaderBlock) -> Self {
        let bbox = block.bbox().map(|b| {
            BoundingBox::from_nanodegrees(
                degrees_to_nanodegrees(b.left),
                degrees_to_nanodegrees(b.bottom),
                degrees_to_nanodegrees(b.right),
                degrees_to_nanodegrees(b.top),
            )
        });

        Self {
            bbox,
            required_features: block.required_features().to_vec(),
            optional_features: block.optional_features().to_vec(),
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    pub fn summary(&self) -> String {
        let mut summary = String::from("PBF Header:\n");

        match &self.bbox {
            Some(bbox) => {
                let validity = if bbox.is_valid() { "valid" } else { "invalid" };
                summary.push_str(&format!("  Bounding box ({}): {}\n", validity, bbox.viewbox()));
            }
            None => summary.push_str("  Bounding box: none\n"),
        }

        summary.push_str(&format!(
            "  Required features: {}\n",
            join_or_none(&self.required_features)
        ));
        summary.push_str(&format!(
            "  Optional features: {}\n",
            join_or_none(&self.optional_features)
        ));

        summary
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}
