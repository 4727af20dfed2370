use super::{page_file_name, NotebookSource, PageSource, INDEX_FILE_NAME};
use crate::error::{QuillError, Result};
use crate::model::FixedId;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// An extracted container on disk.
#[derive(Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Accepts either the notebook directory itself or its parent, as left by
    /// extracting a container in place.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.join(INDEX_FILE_NAME).is_file() {
            return Ok(Self {
                root: path.to_path_buf(),
            });
        }

        let mut candidates = Vec::new();
        for entry in fs::read_dir(path).map_err(QuillError::Io)? {
            let entry = entry.map_err(QuillError::Io)?;
            let sub = entry.path();
            if sub.is_dir() && sub.join(INDEX_FILE_NAME).is_file() {
                candidates.push(sub);
            }
        }

        match candidates.len() {
            1 => Ok(Self {
                root: candidates.remove(0),
            }),
            0 => Err(QuillError::Archive(format!(
                "no {} found in {}",
                INDEX_FILE_NAME,
                path.display()
            ))),
            n => Err(QuillError::Archive(format!(
                "{} notebooks found in {}; pick one",
                n,
                path.display()
            ))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PageSource for DirectorySource {
    fn page_bytes(&self, id: &FixedId) -> Result<Option<Cow<'_, [u8]>>> {
        let path = self.root.join(page_file_name(id));
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(QuillError::Io)?;
        Ok(Some(Cow::Owned(bytes)))
    }
}

impl NotebookSource for DirectorySource {
    fn index_bytes(&self) -> Result<Cow<'_, [u8]>> {
        let bytes = fs::read(self.root.join(INDEX_FILE_NAME)).map_err(QuillError::Io)?;
        Ok(Cow::Owned(bytes))
    }
}
