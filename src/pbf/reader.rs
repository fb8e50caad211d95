use crate::error::{BoundsError, Result};
use crate::models::BoundingBox;
use crate::pbf::header::OsmHeader;
use crate::utils::constants::BLOCK_TYPE_DATA;
use osmpbf::{BlobDecode, BlobReader};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Header-only reader for an OSM PBF extract.
///
/// Only the leading `OSMHeader` blob is ever decoded; the data blobs that
/// follow are never read. The file handle is owned by the reader and is
/// released when it is dropped, on success and error paths alike.
pub struct PbfReader {
    path: PathBuf,
    blobs: BlobReader<BufReader<File>>,
    header: Option<OsmHeader>,
}

impl PbfReader {
    pub fn open(path: &Path) -> Result<Self> {
        let blobs = BlobReader::from_path(path)?;
        debug!(path = %path.display(), "opened PBF extract");

        Ok(Self {
            path: path.to_path_buf(),
            blobs,
            header: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and cache the header block.
    pub fn header(&mut self) -> Result<&OsmHeader> {
        let header = match self.header.take() {
            Some(header) => header,
            None => self.read_header_block()?,
        };
        Ok(self.header.insert(header))
    }

    /// The bounding box declared in the header, if any. Validity is left to
    /// the caller.
    pub fn header_box(&mut self) -> Result<Option<BoundingBox>> {
        Ok(self.header()?.bounding_box())
    }

    pub fn close(self) {}

    fn read_header_block(&mut self) -> Result<OsmHeader> {
        let blob = self.blobs.next().ok_or_else(|| {
            BoundsError::InvalidPbf(format!("{} is empty", self.path.display()))
        })??;

        let header = match blob.decode()? {
            BlobDecode::OsmHeader(block) => OsmHeader::from_block(&block),
            BlobDecode::OsmData(_) => {
                return Err(BoundsError::MissingHeader(BLOCK_TYPE_DATA.to_string()))
            }
            BlobDecode::Unknown(block_type) => {
                return Err(BoundsError::MissingHeader(block_type.to_string()))
            }
        };

        debug!(
            path = %self.path.display(),
            has_bbox = header.bbox.is_some(),
            "decoded PBF header"
        );
        Ok(header)
    }
}

impl Drop for PbfReader {
    fn drop(&mut self) {
        trace!(path = %self.path.display(), "closing PBF extract");
    }
}
