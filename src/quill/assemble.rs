//! # Notebook Assembly
//!
//! Joins an index to its page records. Pages come out in index order and are
//! numbered 1..N by position, not by id. A single bad page fails the whole
//! notebook; there is no partial result, since numbering depends on a complete
//! walk of the index.

use crate::codec::{decode_index, decode_page};
use crate::error::{QuillError, Result};
use crate::model::{Notebook, NotebookIndex, NumberedPage};
use crate::source::{NotebookSource, PageSource};

/// Decodes every page listed in `index`, fetching bytes from `source`.
///
/// Errors from the page decoder are wrapped in [`QuillError::Page`] with the
/// page's 1-based number; use [`QuillError::root`] to get at the cause.
pub fn assemble<S: PageSource + ?Sized>(index: NotebookIndex, source: &S) -> Result<Notebook> {
    let mut pages = Vec::with_capacity(index.page_ids.len());

    for (position, id) in index.page_ids.iter().enumerate() {
        let number = position + 1;
        let bytes = source
            .page_bytes(id)
            .map_err(|e| QuillError::Page {
                number,
                source: Box::new(e),
            })?
            .ok_or(QuillError::MissingPage { number, id: *id })?;

        let page = decode_page(&bytes).map_err(|e| QuillError::Page {
            number,
            source: Box::new(e),
        })?;
        log::debug!(
            "page {} ({}): {} stroke(s), {} point(s)",
            number,
            id,
            page.stroke_count(),
            page.point_count()
        );

        pages.push(NumberedPage {
            number,
            id: *id,
            page,
        });
    }

    Ok(Notebook { index, pages })
}

/// Decodes the source's index and then all of its pages.
pub fn load_notebook<S: NotebookSource + ?Sized>(source: &S) -> Result<Notebook> {
    let index = decode_index(&source.index_bytes()?)?;
    log::info!("notebook \"{}\": {} page(s)", index.title, index.page_count());
    assemble(index, source)
}
