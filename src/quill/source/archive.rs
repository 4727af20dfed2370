use super::{page_id_from_file_name, NotebookSource, PageSource, INDEX_FILE_NAME};
use crate::error::{QuillError, Result};
use crate::model::FixedId;
use flate2::read::GzDecoder;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A notebook container held in memory.
///
/// The notebook is the directory holding the first `index.quill_data` entry
/// (usually `notebook_<name>/`, possibly the archive root). Page records are
/// taken from that directory only.
#[derive(Debug)]
pub struct ContainerArchive {
    index: Vec<u8>,
    pages: HashMap<FixedId, Vec<u8>>,
}

/// Splits a raw entry path into its parent directory and file name.
fn split_entry_path(path: &[u8]) -> (&[u8], &[u8]) {
    let path = path.strip_suffix(b"/").unwrap_or(path);
    match path.iter().rposition(|b| *b == b'/') {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => (&path[..0], path),
    }
}

impl ContainerArchive {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(QuillError::Io)?;
        log::debug!("reading container {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(&bytes)
    }

    /// Reads a tar container, transparently un-gzipping it first if needed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.starts_with(&GZIP_MAGIC) {
            Self::from_tar(GzDecoder::new(bytes))
        } else {
            Self::from_tar(bytes)
        }
    }

    fn from_tar<R: Read>(reader: R) -> Result<Self> {
        let mut archive = tar::Archive::new(reader);
        let mut index: Option<(Vec<u8>, Vec<u8>)> = None;
        // Page entries can precede their index, so they are filtered afterwards
        let mut candidates: Vec<(Vec<u8>, FixedId, Vec<u8>)> = Vec::new();

        let entries = archive
            .entries()
            .map_err(|e| QuillError::Archive(format!("cannot list entries: {}", e)))?;
        for entry in entries {
            let mut entry =
                entry.map_err(|e| QuillError::Archive(format!("bad entry: {}", e)))?;
            if !entry.header().entry_type().is_file() {
                continue;
            }

            let path = entry.path_bytes().into_owned();
            let (dir, name) = split_entry_path(&path);

            if name == INDEX_FILE_NAME.as_bytes() {
                if index.is_some() {
                    log::warn!("container holds more than one index; keeping the first");
                    continue;
                }
                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes).map_err(QuillError::Io)?;
                index = Some((dir.to_vec(), bytes));
            } else if let Some(id) = page_id_from_file_name(name) {
                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes).map_err(QuillError::Io)?;
                candidates.push((dir.to_vec(), id, bytes));
            } else {
                log::trace!("skipping container entry {}", String::from_utf8_lossy(&path));
            }
        }

        let (notebook_dir, index) = index.ok_or_else(|| {
            QuillError::Archive(format!("container has no {} entry", INDEX_FILE_NAME))
        })?;

        let mut pages = HashMap::new();
        for (dir, id, bytes) in candidates {
            if dir != notebook_dir {
                log::debug!(
                    "skipping page {} outside notebook directory {}",
                    id,
                    String::from_utf8_lossy(&notebook_dir)
                );
                continue;
            }
            if pages.contains_key(&id) {
                log::warn!("container holds page {} more than once; keeping the first", id);
                continue;
            }
            pages.insert(id, bytes);
        }
        log::debug!("container holds {} page record(s)", pages.len());

        Ok(Self { index, pages })
    }

    pub fn page_record_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageSource for ContainerArchive {
    fn page_bytes(&self, id: &FixedId) -> Result<Option<Cow<'_, [u8]>>> {
        Ok(self
            .pages
            .get(id)
            .map(|bytes| Cow::Borrowed(bytes.as_slice())))
    }
}

impl NotebookSource for ContainerArchive {
    fn index_bytes(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.index.as_slice()))
    }
}
