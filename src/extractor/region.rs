use crate::utils::constants::{LATEST_SUFFIX, OSM_SUFFIX, PBF_EXTENSION};
use std::path::Path;

/// Derive a region name from an extract filename.
///
/// Drops the `.pbf` extension, then any trailing `.osm` and `-latest`
/// markers in either order.
///
/// # Examples
/// ```
/// use pbf_bounds::extractor::region_name;
/// use std::path::Path;
///
/// assert_eq!(region_name(Path::new("/data/pbf/example-region-latest.osm.pbf")), "example-region");
/// assert_eq!(region_name(Path::new("example-region.osm.pbf")), "example-region");
/// ```
pub fn region_name(path: &Path) -> String {
    let has_pbf_extension = path
        .extension()
        .map(|ext| ext == PBF_EXTENSION)
        .unwrap_or(false);

    let base = if has_pbf_extension {
        path.file_stem()
    } else {
        path.file_name()
    };
    let base = base.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();

    let mut name = base.as_str();
    loop {
        let stripped = name
            .strip_suffix(OSM_SUFFIX)
            .or_else(|| name.strip_suffix(LATEST_SUFFIX));
        match stripped {
            Some(rest) if !rest.is_empty() => name = rest,
            _ => break,
        }
    }

    name.to_string()
}
