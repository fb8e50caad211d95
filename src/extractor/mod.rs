pub mod discovery;
pub mod output;
pub mod region;

pub use discovery::{discover_extracts, is_pbf_file, select_extract, SelectionPolicy};
pub use output::write_bounds;
pub use region::region_name;

use crate::error::Result;
use crate::models::{BoundingBox, BoundsRecord};
use crate::pbf::PbfReader;
use crate::settings::ExtractorConfig;
use crate::utils::Console;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of one extraction run. Every variant is a successful run from the
/// caller's point of view; only `Written` produced a bounds file.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Written {
        extract: PathBuf,
        output: PathBuf,
        record: BoundsRecord,
    },
    /// The input directory holds no PBF extract.
    NoInput { dir: PathBuf },
    /// The extract header declares no box, or an invalid one.
    NoValidBox { extract: PathBuf },
}

impl ExtractionOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ExtractionOutcome::Written { .. })
    }
}

/// Reads the header bounding box of the first PBF extract found in the
/// configured directory and writes it to the configured bounds file.
pub struct BoundsExtractor {
    config: ExtractorConfig,
    console: Console,
}

impl BoundsExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            console: Console::default(),
        }
    }

    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn extract(&self) -> Result<ExtractionOutcome> {
        let dir = &self.config.pbf_dir;
        let bounds_file = &self.config.bounds_file;

        self.console.step("=== Extracting bounds from PBF files ===");
        self.console.step(format_args!("PBF_DIR: {}", dir.display()));
        self.console
            .step(format_args!("BOUNDS_FILE: {}", bounds_file.display()));

        let candidates = discover_extracts(dir)?;
        let Some(extract) = select_extract(dir, candidates, self.config.selection)? else {
            self.console
                .failure(format_args!("No PBF files found in {}", dir.display()));
            info!(dir = %dir.display(), "no PBF extract available, bounds file left untouched");
            return Ok(ExtractionOutcome::NoInput { dir: dir.clone() });
        };
        self.console
            .success(format_args!("Found PBF file: {}", extract.display()));

        let Some(bbox) = read_valid_box(&extract)? else {
            self.console.failure("PBF file has no valid bounding box");
            warn!(extract = %extract.display(), "header declares no valid bounding box");
            return Ok(ExtractionOutcome::NoValidBox { extract });
        };

        self.console
            .step(format_args!("Extracted bounds:\n{}", bbox.summary()));

        let region = region_name(&extract);
        let record = BoundsRecord::generated_now(&bbox, &region)?;
        write_bounds(bounds_file, &record)?;

        info!(
            extract = %extract.display(),
            output = %bounds_file.display(),
            viewbox = %record.viewbox,
            region = %record.region,
            "bounds file written"
        );
        self.console
            .success(format_args!("Bounds saved to {}", bounds_file.display()));
        self.console.step("Contents:");
        self.console.step(record.to_pretty_json()?);
        self.console.step("===========================");

        Ok(ExtractionOutcome::Written {
            extract,
            output: bounds_file.clone(),
            record,
        })
    }
}

/// Open `extract`, read only its header and return the declared box if it
/// is valid. The reader is dropped before returning on every path.
pub fn read_valid_box(extract: &Path) -> Result<Option<BoundingBox>> {
    let mut reader = PbfReader::open(extract)?;
    let bbox = reader.header_box()?;
    reader.close();

    Ok(bbox.filter(BoundingBox::is_valid))
}
