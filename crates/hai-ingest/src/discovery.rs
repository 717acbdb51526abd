//! Sector floor-plan discovery.
//!
//! The browsing feature shows one static floor-plan image per hospital
//! sector. The selector derives its choices from the image files on disk:
//! every `*.png` in the plan directory is a sector, named by file stem.

use std::path::{Path, PathBuf};

use hai_model::{HaiError, Result};

/// A discovered floor-plan image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorPlan {
    /// Sector name (the image file stem).
    pub name: String,
    /// Path to the image file.
    pub path: PathBuf,
}

/// Lists the sector plans in a directory, sorted by file name.
pub fn list_sector_plans(dir: &Path) -> Result<Vec<SectorPlan>> {
    if !dir.is_dir() {
        return Err(HaiError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|error| HaiError::Io {
        path: dir.to_path_buf(),
        source: error,
    })?;

    let mut plans = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|error| HaiError::Io {
            path: dir.to_path_buf(),
            source: error,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            continue;
        }
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("")
            .to_string();
        if name.is_empty() {
            continue;
        }
        plans.push(SectorPlan { name, path });
    }

    plans.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_png_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        for name in &["west-wing.png", "east-wing.png", "notes.txt", "icu.PNG"] {
            std::fs::write(dir.path().join(name), b"img").unwrap();
        }

        let plans = list_sector_plans(dir.path()).unwrap();
        let names: Vec<&str> = plans.iter().map(|plan| plan.name.as_str()).collect();
        assert_eq!(names, vec!["east-wing", "icu", "west-wing"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("planos");
        let result = list_sector_plans(&missing);
        assert!(matches!(result, Err(HaiError::DirectoryNotFound { .. })));
    }
}
