use super::cursor::ByteCursor;
use crate::error::{QuillError, Result};
use crate::model::{Page, Point, Stroke};

/// Bytes taken by one serialized point.
const POINT_WIDTH: usize = 12;
/// Smallest possible serialized stroke (header, no points).
const STROKE_HEADER_WIDTH: usize = 20;

/// Decodes one `page_<id>.quill_data` stream.
///
/// The record has no tags or markers: fields are identified purely by their
/// position, so every field is consumed in order, reserved ones included.
pub fn decode_page(bytes: &[u8]) -> Result<Page> {
    let mut cursor = ByteCursor::new(bytes);

    let format_version = cursor.read_i32_be()?;
    let trailing_id = cursor.read_framed_id()?;
    let tool_format_version = cursor.read_i32_be()?;

    let tag_count = cursor.read_i32_be()?;
    let reserved_a = cursor.read_i32_be()?;
    let reserved_b = cursor.read_i32_be()?;

    let paper_type = cursor.read_i32_be()?;
    let image_count = cursor.read_i32_be()?;
    let reserved_c = cursor.read_i32_be()?;
    let read_only = cursor.read_bool()?;
    let aspect_ratio = cursor.read_f32_be()?;

    let stroke_count = cursor.read_i32_be()?;
    if stroke_count < 0 {
        return Err(QuillError::MalformedPage(format!(
            "negative stroke count {}",
            stroke_count
        )));
    }
    log::debug!(
        "page {} version {} declares {} stroke(s)",
        trailing_id,
        format_version,
        stroke_count
    );

    let capacity = (stroke_count as usize).min(cursor.remaining() / STROKE_HEADER_WIDTH);
    let mut strokes = Vec::with_capacity(capacity);
    for n in 0..stroke_count {
        strokes.push(decode_stroke(&mut cursor, n)?);
    }

    let line_count = cursor.read_i32_be()?;
    let reserved_d = cursor.read_i32_be()?;
    let text_count = cursor.read_i32_be()?;

    if line_count != 0 || text_count != 0 {
        log::debug!(
            "page {} carries {} line(s) and {} text record(s), not decoded",
            trailing_id,
            line_count,
            text_count
        );
    }

    Ok(Page {
        format_version,
        trailing_id,
        tool_format_version,
        tag_count,
        reserved_a,
        reserved_b,
        paper_type,
        image_count,
        reserved_c,
        read_only,
        aspect_ratio,
        strokes,
        line_count,
        reserved_d,
        text_count,
    })
}

fn decode_stroke(cursor: &mut ByteCursor<'_>, ordinal: i32) -> Result<Stroke> {
    let format_version = cursor.read_i32_be()?;
    let color = cursor.read_i32_be()?;
    let thickness = cursor.read_i32_be()?;
    let tool = cursor.read_i32_be()?;
    let point_count = cursor.read_i32_be()?;
    if point_count < 0 {
        return Err(QuillError::MalformedPage(format!(
            "stroke {} has negative point count {}",
            ordinal, point_count
        )));
    }

    let capacity = (point_count as usize).min(cursor.remaining() / POINT_WIDTH);
    let mut points = Vec::with_capacity(capacity);
    for _ in 0..point_count {
        let x = cursor.read_f32_be()?;
        let y = cursor.read_f32_be()?;
        let pressure = cursor.read_f32_be()?;
        points.push(Point { x, y, pressure });
    }

    log::trace!("stroke {}: {} point(s)", ordinal, points.len());

    Ok(Stroke {
        format_version,
        color,
        thickness,
        tool,
        points,
    })
}
