//! Per-subject `-set` fragment assembly

use crate::subject::SubjectEntry;
use crate::types::SubBricks;
use std::path::PathBuf;

/// Subject entries in input order, no sorting and no deduplication
#[must_use]
pub fn subject_entries<I, P>(inputs: I) -> Vec<SubjectEntry>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    inputs.into_iter().map(SubjectEntry::from_path).collect()
}

/// Shell-form fragment for one subject: `<id> <path>'[b]' <path>'[t]'`
#[must_use]
pub fn subject_fragment(entry: &SubjectEntry, bricks: SubBricks) -> String {
    let path = entry.path_str();
    format!(
        "{id} {path}'[{beta}]' {path}'[{tstat}]'",
        id = entry.id,
        beta = bricks.beta,
        tstat = bricks.tstat
    )
}

/// All subject fragments joined by single spaces
#[must_use]
pub fn assemble_fragment(entries: &[SubjectEntry], bricks: SubBricks) -> String {
    entries
        .iter()
        .map(|entry| subject_fragment(entry, bricks))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Discrete argument tokens for the `-set` block, three per subject
///
/// The sub-brick selector is attached directly to the path since no shell
/// sits between us and the program.
#[must_use]
pub fn set_arguments(entries: &[SubjectEntry], bricks: SubBricks) -> Vec<String> {
    let mut args = Vec::with_capacity(entries.len() * 3);
    for entry in entries {
        let path = entry.path_str();
        args.push(entry.id.clone());
        args.push(format!("{path}[{}]", bricks.beta));
        args.push(format!("{path}[{}]", bricks.tstat));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_subject_fragment() {
        let entries = subject_entries(["a.nii", "b.nii"]);
        let fragment = assemble_fragment(&entries, SubBricks::new(1, 2));

        assert_eq!(fragment, "a a.nii'[1]' a.nii'[2]' b b.nii'[1]' b.nii'[2]'");
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let entries = subject_entries(["sub-02_x.nii.gz", "sub-01_x.nii.gz", "sub-02_x.nii.gz"]);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, ["02", "01", "02"]);
    }

    #[test]
    fn test_empty_inputs_give_empty_fragment() {
        let entries = subject_entries(Vec::<PathBuf>::new());

        assert_eq!(assemble_fragment(&entries, SubBricks::new(1, 2)), "");
        assert!(set_arguments(&entries, SubBricks::new(1, 2)).is_empty());
    }

    #[test]
    fn test_set_arguments_are_unquoted() {
        let entries = subject_entries(["/d/sub-01_s.nii.gz"]);
        let args = set_arguments(&entries, SubBricks::new(3, 4));

        assert_eq!(args, ["01", "/d/sub-01_s.nii.gz[3]", "/d/sub-01_s.nii.gz[4]"]);
    }
}
