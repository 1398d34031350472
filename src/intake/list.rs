//! Accumulated upload list and the duplicate filter

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;

use super::file::{FileIdentity, UploadedFile};

/// Result of filtering one dropped batch against the current list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredBatch {
    /// Files from the batch that are new, in batch order
    pub fresh: Vec<UploadedFile>,
    /// Number of batch entries dropped as duplicates
    pub duplicates: usize,
}

/// Remove from `batch` every file already in `existing`, and every repeat of
/// an earlier file in the same batch.
pub fn filter_batch(existing: &[UploadedFile], batch: Vec<UploadedFile>) -> FilteredBatch {
    let total = batch.len();
    let mut seen: HashSet<FileIdentity<'_>> = existing.iter().map(UploadedFile::identity).collect();
    let keep: Vec<bool> = batch.iter().map(|file| seen.insert(file.identity())).collect();
    drop(seen);

    let fresh: Vec<UploadedFile> = batch
        .into_iter()
        .zip(keep)
        .filter_map(|(file, keep)| keep.then_some(file))
        .collect();

    let duplicates = total - fresh.len();
    FilteredBatch { fresh, duplicates }
}

/// Ordered list of accepted uploads. Never holds two files with the same
/// identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileList {
    files: Vec<UploadedFile>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the new files of `batch`, returning how many were skipped as
    /// duplicates.
    pub fn accumulate(&mut self, batch: Vec<UploadedFile>) -> usize {
        let FilteredBatch { fresh, duplicates } = filter_batch(&self.files, batch);
        tracing::debug!(
            "Accumulating {} new file(s), skipped {} duplicate(s)",
            fresh.len(),
            duplicates
        );
        self.files.extend(fresh);
        duplicates
    }

    /// Remove the entry at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Result<UploadedFile> {
        if index >= self.files.len() {
            anyhow::bail!(
                "No uploaded file at index {} (list has {} file(s))",
                index,
                self.files.len()
            );
        }
        Ok(self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_slice(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UploadedFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a UploadedFile;
    type IntoIter = std::slice::Iter<'a, UploadedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl From<Vec<UploadedFile>> for FileList {
    /// Builds a list from arbitrary files, dropping repeats so the list
    /// invariant holds.
    fn from(files: Vec<UploadedFile>) -> Self {
        let mut list = FileList::new();
        list.accumulate(files);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64, modified: i64) -> UploadedFile {
        UploadedFile::new(name, size, modified, "image/jpeg")
    }

    #[test]
    fn test_batch_with_internal_duplicate() {
        let mut list = FileList::new();
        let duplicates = list.accumulate(vec![file("a.jpg", 100, 1), file("a.jpg", 100, 1)]);

        assert_eq!(duplicates, 1);
        assert_eq!(list.as_slice(), &[file("a.jpg", 100, 1)]);
    }

    #[test]
    fn test_batch_overlapping_existing_list() {
        let existing = file("existing.jpg", 1024, 1234567890);
        let new_file = file("new.jpg", 7, 1700000000000);
        let mut list = FileList::from(vec![existing.clone()]);

        let duplicates = list.accumulate(vec![new_file.clone(), existing.clone()]);

        assert_eq!(duplicates, 1);
        assert_eq!(list.as_slice(), &[existing, new_file]);
    }

    #[test]
    fn test_disjoint_batch_appends_in_order() {
        let mut list = FileList::from(vec![file("1.jpg", 1, 1), file("2.jpg", 2, 2)]);
        let batch = vec![file("4.jpg", 4, 4), file("3.jpg", 3, 3)];

        let duplicates = list.accumulate(batch.clone());

        assert_eq!(duplicates, 0);
        let names: Vec<_> = list.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1.jpg", "2.jpg", "4.jpg", "3.jpg"]);
    }

    #[test]
    fn test_redropping_same_batch_is_idempotent() {
        let batch = vec![file("a.jpg", 1, 1), file("b.jpg", 2, 2), file("c.jpg", 3, 3)];
        let mut list = FileList::new();
        list.accumulate(batch.clone());
        let before = list.clone();

        let duplicates = list.accumulate(batch.clone());

        assert_eq!(duplicates, batch.len());
        assert_eq!(list, before);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut list = FileList::from(vec![file("a.jpg", 1, 1)]);
        assert_eq!(list.accumulate(Vec::new()), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_same_name_different_mtime_is_not_duplicate() {
        let mut list = FileList::from(vec![file("a.jpg", 100, 1)]);
        assert_eq!(list.accumulate(vec![file("a.jpg", 100, 2)]), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_first_of_two() {
        let first = file("test1.jpg", 1024 * 1024, 1);
        let second = file("test2.png", 2 * 1024 * 1024, 2);
        let mut list = FileList::from(vec![first.clone(), second.clone()]);

        let removed = list.remove(0).unwrap();

        assert_eq!(removed, first);
        assert_eq!(list.as_slice(), &[second]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = FileList::from(vec![file("a.jpg", 1, 1)]);
        let err = list.remove(3).unwrap_err();
        assert!(err.to_string().contains("No uploaded file at index 3"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_filter_batch_reports_counts() {
        let existing = vec![file("a.jpg", 1, 1)];
        let result = filter_batch(&existing, vec![file("a.jpg", 1, 1), file("b.jpg", 2, 2), file("b.jpg", 2, 2)]);
        assert_eq!(result.duplicates, 2);
        assert_eq!(result.fresh, vec![file("b.jpg", 2, 2)]);
    }
}
