/// Configuration defaults
pub const DEFAULT_PBF_DIR: &str = "/data/pbf";
pub const DEFAULT_BOUNDS_FILE: &str = "/app/config/bounds.json";

/// Recognized extract suffixes
pub const PBF_EXTENSION: &str = "pbf";
pub const OSM_SUFFIX: &str = ".osm";
pub const LATEST_SUFFIX: &str = "-latest";

/// PBF fileblock type following the header
pub const BLOCK_TYPE_DATA: &str = "OSMData";

/// Header bbox resolution (nanodegrees) and node location precision (1e-7 degrees)
pub const LONLAT_RESOLUTION: i64 = 1_000_000_000;
pub const COORDINATE_PRECISION: i64 = 10_000_000;

/// Value of the `bounded` flag in every bounds record
pub const BOUNDED_FLAG: u8 = 1;
