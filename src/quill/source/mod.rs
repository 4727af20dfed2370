//! # Notebook Sources
//!
//! Decoding works on bytes; where those bytes come from is abstracted behind
//! the [`PageSource`] and [`NotebookSource`] traits so the assembler and the
//! commands never care whether a notebook lives in a container file, an
//! extracted directory, or a test fixture.
//!
//! ## Implementations
//!
//! - [`archive::ContainerArchive`]: a `.quill` container (tar, optionally
//!   gzip-compressed), read fully into memory.
//! - [`dir::DirectorySource`]: a container that has already been extracted.
//! - [`memory::InMemorySource`]: plain maps, for tests.
//!
//! ## Container Layout
//!
//! ```text
//! notebook_<name>/
//! ├── index.quill_data          # the index record
//! └── page_<id>.quill_data      # one page record per index entry
//! ```

use crate::error::{QuillError, Result};
use crate::model::{FixedId, FIXED_ID_LEN};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;

pub mod archive;
pub mod dir;
pub mod memory;

pub const INDEX_FILE_NAME: &str = "index.quill_data";
pub const PAGE_FILE_PREFIX: &str = "page_";
pub const PAGE_FILE_SUFFIX: &str = ".quill_data";

/// Supplies the raw bytes of a page record by id.
pub trait PageSource {
    /// Returns `Ok(None)` when the source has no record for `id`.
    fn page_bytes(&self, id: &FixedId) -> Result<Option<Cow<'_, [u8]>>>;
}

/// A page source that also holds the notebook's single index record.
pub trait NotebookSource: PageSource {
    fn index_bytes(&self) -> Result<Cow<'_, [u8]>>;
}

/// Raw file name of the page record for `id`, padding stripped.
pub fn page_file_name_bytes(id: &FixedId) -> Vec<u8> {
    let key = id.trimmed_bytes();
    let mut name = Vec::with_capacity(PAGE_FILE_PREFIX.len() + key.len() + PAGE_FILE_SUFFIX.len());
    name.extend_from_slice(PAGE_FILE_PREFIX.as_bytes());
    name.extend_from_slice(key);
    name.extend_from_slice(PAGE_FILE_SUFFIX.as_bytes());
    name
}

/// File name of the page record for `id`.
pub fn page_file_name(id: &FixedId) -> OsString {
    os_string_from_bytes(page_file_name_bytes(id))
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

/// Extracts the page id from a raw page record file name, if it is one.
///
/// Keys longer than an id cannot name a page and are rejected rather than
/// truncated.
pub fn page_id_from_file_name(name: &[u8]) -> Option<FixedId> {
    let key = name
        .strip_prefix(PAGE_FILE_PREFIX.as_bytes())?
        .strip_suffix(PAGE_FILE_SUFFIX.as_bytes())?;
    if key.is_empty() || key.len() > FIXED_ID_LEN {
        return None;
    }
    Some(FixedId::from_raw(key))
}

/// Opens a container file or an extracted notebook directory.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn NotebookSource>> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(Box::new(dir::DirectorySource::open(path)?))
    } else if path.is_file() {
        Ok(Box::new(archive::ContainerArchive::open(path)?))
    } else {
        Err(QuillError::Archive(format!(
            "{} is neither a container file nor a directory",
            path.display()
        )))
    }
}
