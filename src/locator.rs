use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, trace};
use walkdir::WalkDir;

pub const PROJECT_FILE_SUFFIX: &str = "csproj";

/// File name a project is expected to live in, e.g. `App` -> `App.csproj`.
pub fn descriptor_file_name(project_name: &str) -> String {
    format!("{}.{}", project_name, PROJECT_FILE_SUFFIX)
}

/// Walks `root` and returns the absolute path of the first file named
/// `<project_name>.csproj`, or `None` if the tree has no such file.
///
/// Entries are visited in whatever order the filesystem yields them, so when
/// several directories hold a matching file the one returned is unspecified.
/// Any error while reading the tree aborts the search.
pub fn find_project(root: &Path, project_name: &str) -> Result<Option<PathBuf>> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve search root {}", root.display()))?;
    let wanted = descriptor_file_name(project_name);

    println!("🔍 Searching in {}", root.display());

    for entry in WalkDir::new(&root).min_depth(1) {
        let entry = entry.with_context(|| {
            format!("Failed to read directory tree under {}", root.display())
        })?;

        // Links are not followed, but a link to a directory is still a directory
        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            trace!("visiting {}", entry.path().display());
            continue;
        }

        if is_descriptor_match(entry.file_name(), &wanted) {
            debug!("matched {}", entry.path().display());
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}

fn is_descriptor_match(file_name: &OsStr, wanted: &str) -> bool {
    let Some(name) = file_name.to_str() else {
        return false;
    };

    name.ends_with(PROJECT_FILE_SUFFIX) && name == wanted
}
