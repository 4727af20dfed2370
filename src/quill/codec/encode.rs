//! Writers for the index and page layouts.
//!
//! The output is exactly what [`super::decode_index`] and [`super::decode_page`]
//! consume. Identifier length prefixes are always written as 36, and counts are
//! taken from the collections themselves.

use crate::error::{QuillError, Result};
use crate::model::{FixedId, NotebookIndex, Page, Stroke, FIXED_ID_LEN};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

pub fn encode_index(index: &NotebookIndex) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.write_i32::<BigEndian>(index.format_version)?;
    out.write_i32::<BigEndian>(count_i32(index.page_ids.len(), "page ids")?)?;
    for id in &index.page_ids {
        write_framed_id(&mut out, id)?;
    }
    out.write_i32::<BigEndian>(index.current_page)?;
    write_string(&mut out, &index.title)?;
    out.write_i64::<BigEndian>(index.created_at)?;
    out.write_i64::<BigEndian>(index.modified_at)?;
    write_framed_id(&mut out, &index.trailing_id)?;
    Ok(out)
}

pub fn encode_page(page: &Page) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.write_i32::<BigEndian>(page.format_version)?;
    write_framed_id(&mut out, &page.trailing_id)?;
    out.write_i32::<BigEndian>(page.tool_format_version)?;

    out.write_i32::<BigEndian>(page.tag_count)?;
    out.write_i32::<BigEndian>(page.reserved_a)?;
    out.write_i32::<BigEndian>(page.reserved_b)?;

    out.write_i32::<BigEndian>(page.paper_type)?;
    out.write_i32::<BigEndian>(page.image_count)?;
    out.write_i32::<BigEndian>(page.reserved_c)?;
    out.write_u8(u8::from(page.read_only))?;
    out.write_f32::<BigEndian>(page.aspect_ratio)?;

    out.write_i32::<BigEndian>(count_i32(page.strokes.len(), "strokes")?)?;
    for stroke in &page.strokes {
        write_stroke(&mut out, stroke)?;
    }

    out.write_i32::<BigEndian>(page.line_count)?;
    out.write_i32::<BigEndian>(page.reserved_d)?;
    out.write_i32::<BigEndian>(page.text_count)?;
    Ok(out)
}

fn write_stroke<W: Write>(out: &mut W, stroke: &Stroke) -> Result<()> {
    out.write_i32::<BigEndian>(stroke.format_version)?;
    out.write_i32::<BigEndian>(stroke.color)?;
    out.write_i32::<BigEndian>(stroke.thickness)?;
    out.write_i32::<BigEndian>(stroke.tool)?;
    out.write_i32::<BigEndian>(count_i32(stroke.points.len(), "points")?)?;
    for point in &stroke.points {
        out.write_f32::<BigEndian>(point.x)?;
        out.write_f32::<BigEndian>(point.y)?;
        out.write_f32::<BigEndian>(point.pressure)?;
    }
    Ok(())
}

fn write_framed_id<W: Write>(out: &mut W, id: &FixedId) -> Result<()> {
    out.write_i16::<BigEndian>(FIXED_ID_LEN as i16)?;
    out.write_all(id.as_bytes())?;
    Ok(())
}

fn write_string<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let len = i16::try_from(text.len()).map_err(|_| {
        QuillError::Encode(format!("string of {} bytes exceeds i16 prefix", text.len()))
    })?;
    out.write_i16::<BigEndian>(len)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn count_i32(len: usize, what: &str) -> Result<i32> {
    i32::try_from(len).map_err(|_| QuillError::Encode(format!("too many {}: {}", what, len)))
}
