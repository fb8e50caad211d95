use crate::error::{BoundsError, Result};
use crate::utils::constants::PBF_EXTENSION;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// How to choose an extract when the input directory holds several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Take the lexicographically first candidate.
    #[default]
    First,
    /// Fail unless exactly one candidate exists.
    RequireSingle,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::First => "first",
            SelectionPolicy::RequireSingle => "single",
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(SelectionPolicy::First),
            "single" | "require-single" | "require_single" => Ok(SelectionPolicy::RequireSingle),
            other => Err(format!(
                "unknown selection policy '{}', expected 'first' or 'single'",
                other
            )),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `*.pbf`, which covers `*.osm.pbf` as well. Matching is case-sensitive,
/// like a shell glob.
pub fn is_pbf_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == PBF_EXTENSION)
        .unwrap_or(false)
        && path.is_file()
}

/// List PBF extracts directly inside `dir`, sorted by path.
///
/// A missing directory yields no candidates rather than an error.
pub fn discover_extracts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "PBF directory does not exist");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(BoundsError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| BoundsError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?
            .path();

        if is_pbf_file(&path) {
            candidates.push(path);
        }
    }

    candidates.sort();
    candidates.dedup();
    debug!(dir = %dir.display(), count = candidates.len(), "discovered PBF extracts");
    Ok(candidates)
}

pub fn select_extract(
    dir: &Path,
    candidates: Vec<PathBuf>,
    policy: SelectionPolicy,
) -> Result<Option<PathBuf>> {
    if candidates.len() > 1 {
        match policy {
            SelectionPolicy::First => warn!(
                dir = %dir.display(),
                count = candidates.len(),
                selected = %candidates[0].display(),
                "multiple PBF extracts found, using the first in sorted order"
            ),
            SelectionPolicy::RequireSingle => {
                return Err(BoundsError::AmbiguousInput {
                    dir: dir.to_path_buf(),
                    count: candidates.len(),
                })
            }
        }
    }

    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_discover_sorted_pbf_only() -> Result<()> {
        let dir = TempDir::new()?;
        let b = touch(&dir, "b-latest.osm.pbf");
        let a = touch(&dir, "a.pbf");
        touch(&dir, "notes.txt");
        touch(&dir, "c.osm.pbf.md5");
        std::fs::create_dir(dir.path().join("nested.pbf"))?;

        let found = discover_extracts(dir.path())?;
        assert_eq!(found, vec![a, b]);
        Ok(())
    }

    #[test]
    fn test_discover_extension_is_case_sensitive() -> Result<()> {
        let dir = TempDir::new()?;
        touch(&dir, "UPPER.OSM.PBF");
        touch(&dir, "mixed.Pbf");
        let lower = touch(&dir, "lower.osm.pbf");

        assert_eq!(discover_extracts(dir.path())?, vec![lower]);
        assert!(!is_pbf_file(&dir.path().join("UPPER.OSM.PBF")));
        Ok(())
    }

    #[test]
    fn test_discover_is_not_recursive() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::create_dir(dir.path().join("sub"))?;
        std::fs::write(dir.path().join("sub").join("x.osm.pbf"), b"")?;

        assert!(discover_extracts(dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_discover_missing_directory() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("absent");
        assert!(discover_extracts(&missing)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_select_first() -> Result<()> {
        let dir = Path::new("/data/pbf");
        let candidates = vec![PathBuf::from("/data/pbf/a.pbf"), PathBuf::from("/data/pbf/b.pbf")];
        let selected = select_extract(dir, candidates, SelectionPolicy::First)?;
        assert_eq!(selected, Some(PathBuf::from("/data/pbf/a.pbf")));

        assert_eq!(select_extract(dir, Vec::new(), SelectionPolicy::First)?, None);
        Ok(())
    }

    #[test]
    fn test_select_require_single() {
        let dir = Path::new("/data/pbf");
        let one = vec![PathBuf::from("/data/pbf/a.pbf")];
        assert_eq!(
            select_extract(dir, one, SelectionPolicy::RequireSingle).unwrap(),
            Some(PathBuf::from("/data/pbf/a.pbf"))
        );

        let two = vec![PathBuf::from("/data/pbf/a.pbf"), PathBuf::from("/data/pbf/b.pbf")];
        assert!(matches!(
            select_extract(dir, two, SelectionPolicy::RequireSingle),
            Err(BoundsError::AmbiguousInput { count: 2, .. })
        ));
    }

    #[test]
    fn test_selection_policy_parse() {
        assert_eq!("first".parse::<SelectionPolicy>(), Ok(SelectionPolicy::First));
        assert_eq!(" Single ".parse::<SelectionPolicy>(), Ok(SelectionPolicy::RequireSingle));
        assert_eq!(
            "require-single".parse::<SelectionPolicy>(),
            Ok(SelectionPolicy::RequireSingle)
        );
        assert!("newest".parse::<SelectionPolicy>().is_err());
        assert_eq!(SelectionPolicy::RequireSingle.to_string(), "single");
    }
}
