use crate::error::{BoundsError, Result};
use crate::utils::coordinates::{format_coordinate, nanodegrees_to_degrees, parse_coordinate};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rectangular extent in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct BoundingBox {
    #[validate(range(min = -180.0, max = 180.0))]
    pub min_lon: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub min_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub max_lon: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Build from the `left`, `bottom`, `right`, `top` nanodegree values of a
    /// PBF header bbox.
    pub fn from_nanodegrees(left: i64, bottom: i64, right: i64, top: i64) -> Self {
        Self::new(
            nanodegrees_to_degrees(left),
            nanodegrees_to_degrees(bottom),
            nanodegrees_to_degrees(right),
            nanodegrees_to_degrees(top),
        )
    }

    pub fn is_valid(&self) -> bool {
        self.ensure_valid().is_ok()
    }

    /// Checks coordinate ranges and that min does not exceed max on either axis.
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate()?;

        if self.min_lon > self.max_lon {
            return Err(BoundsError::InvalidBounds(format!(
                "min_lon {} is greater than max_lon {}",
                self.min_lon, self.max_lon
            )));
        }

        if self.min_lat > self.max_lat {
            return Err(BoundsError::InvalidBounds(format!(
                "min_lat {} is greater than max_lat {}",
                self.min_lat, self.max_lat
            )));
        }

        Ok(())
    }

    /// `min_lon,min_lat,max_lon,max_lat`
    pub fn viewbox(&self) -> String {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
            .iter()
            .map(|v| format_coordinate(*v))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn parse_viewbox(viewbox: &str) -> Result<Self> {
        let values: Vec<f64> = viewbox
            .split(',')
            .map(|part| {
                parse_coordinate(part).ok_or_else(|| {
                    BoundsError::InvalidBounds(format!("invalid viewbox value '{}'", part))
                })
            })
            .collect::<Result<_>>()?;

        match values[..] {
            [min_lon, min_lat, max_lon, max_lat] => {
                let bbox = Self::new(min_lon, min_lat, max_lon, max_lat);
                bbox.ensure_valid()?;
                Ok(bbox)
            }
            _ => Err(BoundsError::InvalidBounds(format!(
                "viewbox '{}' must have 4 values, found {}",
                viewbox,
                values.len()
            ))),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "  MIN_LON: {}\n  MIN_LAT: {}\n  MAX_LON: {}\n  MAX_LAT: {}",
            format_coordinate(self.min_lon),
            format_coordinate(self.min_lat),
            format_coordinate(self.max_lon),
            format_coordinate(self.max_lat)
        )
    }
}
