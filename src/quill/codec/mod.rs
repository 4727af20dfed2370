//! # Record Codec
//!
//! Decoders for the two record types found in a notebook container:
//!
//! - the **index** (`index.quill_data`), one per container, listing page ids,
//!   title and timestamps;
//! - the **page** (`page_<id>.quill_data`), one per page, carrying header
//!   metadata followed by pen strokes and their sampled points.
//!
//! ## Framing
//!
//! All integers are big-endian and nothing is aligned or tagged. A field is
//! located only by the widths of every field before it, so decoders never
//! skip or reorder reads. Reserved fields are read like any other and kept in
//! the model.
//!
//! [`cursor::ByteCursor`] is the only code that touches raw bytes; the record
//! decoders are written purely in terms of its typed reads.
//!
//! ## Failure
//!
//! A record decodes completely or not at all. Short input is always
//! [`crate::error::QuillError::TruncatedInput`], never a default value, and a
//! negative count is reported as a malformed record before anything is
//! allocated for it.

pub mod cursor;
pub mod encode;
pub mod index;
pub mod page;

pub use cursor::ByteCursor;
pub use encode::{encode_index, encode_page};
pub use index::decode_index;
pub use page::decode_page;
