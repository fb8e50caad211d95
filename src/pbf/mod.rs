//! Header-only reader for OpenStreetMap PBF extracts.

pub mod header;
pub mod reader;

pub use header::OsmHeader;
pub use reader::PbfReader;
