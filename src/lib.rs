pub mod cli;
pub mod error;
pub mod extractor;
pub mod models;
pub mod pbf;
pub mod settings;
pub mod utils;

pub use error::{BoundsError, Result};
pub use extractor::{BoundsExtractor, ExtractionOutcome};
pub use settings::ExtractorConfig;
