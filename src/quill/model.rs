//! # Notebook Model
//!
//! The canonical in-memory notebook representation produced by the decoders in
//! [`crate::codec`]. All types are plain values: once decoded nothing mutates
//! them, and they hold no references back into the byte streams they came from.
//!
//! Fields that carry no known meaning (`reserved_*`) are kept rather than
//! dropped so a later format revision can give them one without touching the
//! framing rules.

use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Width in bytes of every identifier token in the format.
pub const FIXED_ID_LEN: usize = 36;

/// Page canvas size in output units. Not taken from the file.
pub const CANVAS_WIDTH: u32 = 850;
pub const CANVAS_HEIGHT: u32 = 1100;

/// Opaque 36-byte identifier joining index entries to page streams.
///
/// Usually the ASCII form of a UUID, but never interpreted numerically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedId([u8; FIXED_ID_LEN]);

impl FixedId {
    pub fn new(bytes: [u8; FIXED_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an id from raw bytes, truncating or NUL-padding them to 36 bytes.
    pub fn from_raw(src: &[u8]) -> Self {
        let mut bytes = [0u8; FIXED_ID_LEN];
        let len = src.len().min(FIXED_ID_LEN);
        bytes[..len].copy_from_slice(&src[..len]);
        Self(bytes)
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_raw(text.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; FIXED_ID_LEN] {
        &self.0
    }

    /// The id bytes without NUL padding, as they appear in file names.
    pub fn trimmed_bytes(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .rposition(|b| *b != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.0[..end]
    }

    /// Parses the token as a UUID, if it is one.
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::try_parse_ascii(&self.0).ok()
    }
}

impl From<Uuid> for FixedId {
    fn from(uuid: Uuid) -> Self {
        // Hyphenated form is exactly 36 ASCII bytes
        Self::from_text(&uuid.hyphenated().to_string())
    }
}

impl fmt::Display for FixedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.trimmed_bytes()))
    }
}

impl fmt::Debug for FixedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedId({:?})", self.to_string())
    }
}

impl Serialize for FixedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The per-notebook manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookIndex {
    pub format_version: i32,
    pub page_ids: Vec<FixedId>,
    pub current_page: i32,
    pub title: String,
    /// Source timestamps, epoch milliseconds in every notebook seen so far.
    pub created_at: i64,
    pub modified_at: i64,
    pub trailing_id: FixedId,
}

impl NotebookIndex {
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }
}

/// One sample along a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self { x, y, pressure }
    }
}

/// A drawable piece of a stroke between two consecutive points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Mean pressure of both endpoints.
    pub pressure: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub format_version: i32,
    /// Packed color, not interpreted here.
    pub color: i32,
    /// Raw device units.
    pub thickness: i32,
    pub tool: i32,
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Consecutive point pairs. A stroke with fewer than two points has none.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|pair| Segment {
            from: pair[0],
            to: pair[1],
            pressure: (pair[0].pressure + pair[1].pressure) / 2.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub format_version: i32,
    pub trailing_id: FixedId,
    pub tool_format_version: i32,
    pub tag_count: i32,
    pub reserved_a: i32,
    pub reserved_b: i32,
    pub paper_type: i32,
    pub image_count: i32,
    pub reserved_c: i32,
    pub read_only: bool,
    /// Decoded but never used to size the canvas.
    pub aspect_ratio: f32,
    pub strokes: Vec<Stroke>,
    pub line_count: i32,
    pub reserved_d: i32,
    pub text_count: i32,
}

impl Page {
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::point_count).sum()
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// A decoded page with its 1-based position in the notebook.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedPage {
    pub number: usize,
    pub id: FixedId,
    pub page: Page,
}

/// A fully decoded notebook: the index plus every page in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub index: NotebookIndex,
    pub pages: Vec<NumberedPage>,
}

impl Notebook {
    pub fn title(&self) -> &str {
        &self.index.title
    }
}
