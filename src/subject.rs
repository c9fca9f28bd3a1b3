//! Subject identifiers derived from NIfTI file names
//!
//! A subject file such as `sub-01_task-rest_bold.nii.gz` is reduced to its
//! bare name, and the label after the first hyphen of the first
//! underscore-delimited token becomes the identifier (`01`).

use std::path::{Path, PathBuf};

const NIFTI_MARKER: &str = ".nii";

/// One subject's statistical image and the label 3dMEMA shows for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectEntry {
    pub id: String,
    pub path: PathBuf,
}

impl SubjectEntry {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = subject_id(&path);
        Self { id, path }
    }

    /// Path text as handed to the external tool
    #[must_use]
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Final path component with every `.nii`-bearing extension removed
///
/// `sub.nii.gz` becomes `sub`, `sub.nii` becomes `sub`. Names without a
/// `.nii` marker are returned as-is, extension included.
#[must_use]
pub fn strip_nifti_suffix(path: &Path) -> String {
    let mut name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    };

    while name.contains(NIFTI_MARKER) {
        let keep = strip_extension(&name).len();
        if keep == name.len() {
            break;
        }
        name.truncate(keep);
    }

    name
}

/// Drop the last `.ext`, ignoring leading dots of hidden names
fn strip_extension(name: &str) -> &str {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(pos) => &name[..leading_dots + pos],
        None => name,
    }
}

/// Identifier for a subject file, never fails
///
/// Falls back to the first underscore token when it carries no hyphen.
#[must_use]
pub fn subject_id(path: &Path) -> String {
    let name = strip_nifti_suffix(path);
    let token = name.split('_').next().unwrap_or(&name);

    match token.split_once('-') {
        Some((_, label)) => label.to_string(),
        None => token.to_string(),
    }
}
