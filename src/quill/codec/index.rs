use super::cursor::ByteCursor;
use crate::error::{QuillError, Result};
use crate::model::NotebookIndex;

/// Decodes an `index.quill_data` stream.
///
/// Layout: `i32 version | i32 page_count | page_count × id | i32 current_page |
/// string title | i64 created_at | i64 modified_at | id`, where each id is an
/// `i16` length (ignored) followed by 36 raw bytes.
///
/// Any version number is accepted and parsed with the same layout.
pub fn decode_index(bytes: &[u8]) -> Result<NotebookIndex> {
    let mut cursor = ByteCursor::new(bytes);

    let format_version = cursor.read_i32_be()?;
    let declared_page_count = cursor.read_i32_be()?;
    if declared_page_count < 0 {
        return Err(QuillError::MalformedIndex(format!(
            "negative page count {}",
            declared_page_count
        )));
    }
    log::debug!(
        "index version {} declares {} page(s)",
        format_version,
        declared_page_count
    );

    // Capacity is bounded by what the stream could actually hold
    let max_ids = cursor.remaining() / 38;
    let mut page_ids = Vec::with_capacity((declared_page_count as usize).min(max_ids));
    for _ in 0..declared_page_count {
        page_ids.push(cursor.read_framed_id()?);
    }

    let current_page = cursor.read_i32_be()?;
    let title = cursor.read_length_prefixed_string()?;
    let created_at = cursor.read_i64_be()?;
    let modified_at = cursor.read_i64_be()?;
    let trailing_id = cursor.read_framed_id()?;

    if !cursor.is_exhausted() {
        log::debug!("index has {} unread trailing byte(s)", cursor.remaining());
    }

    Ok(NotebookIndex {
        format_version,
        page_ids,
        current_page,
        title,
        created_at,
        modified_at,
        trailing_id,
    })
}
