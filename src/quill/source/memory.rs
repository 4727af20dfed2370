use super::{NotebookSource, PageSource};
use crate::error::{QuillError, Result};
use crate::model::FixedId;
use std::borrow::Cow;
use std::collections::HashMap;

/// Map-backed source for tests and for callers that already hold the bytes.
#[derive(Debug, Default)]
pub struct InMemorySource {
    index: Option<Vec<u8>>,
    pages: HashMap<FixedId, Vec<u8>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, bytes: Vec<u8>) -> Self {
        self.index = Some(bytes);
        self
    }

    pub fn insert_page(&mut self, id: FixedId, bytes: Vec<u8>) {
        self.pages.insert(id, bytes);
    }

    pub fn remove_page(&mut self, id: &FixedId) -> Option<Vec<u8>> {
        self.pages.remove(id)
    }
}

impl PageSource for InMemorySource {
    fn page_bytes(&self, id: &FixedId) -> Result<Option<Cow<'_, [u8]>>> {
        Ok(self.pages.get(id).map(|bytes| Cow::Borrowed(bytes.as_slice())))
    }
}

impl NotebookSource for InMemorySource {
    fn index_bytes(&self) -> Result<Cow<'_, [u8]>> {
        self.index
            .as_deref()
            .map(Cow::Borrowed)
            .ok_or_else(|| QuillError::Archive("no index record".to_string()))
    }
}

impl PageSource for HashMap<FixedId, Vec<u8>> {
    fn page_bytes(&self, id: &FixedId) -> Result<Option<Cow<'_, [u8]>>> {
        Ok(self.get(id).map(|bytes| Cow::Borrowed(bytes.as_slice())))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec::{encode_index, encode_page};
    use crate::model::{NotebookIndex, Page, Point, Stroke};

    pub fn stroke(points: &[(f32, f32, f32)]) -> Stroke {
        Stroke {
            format_version: 1,
            color: 0,
            thickness: 3,
            tool: 0,
            points: points
                .iter()
                .map(|&(x, y, pressure)| Point::new(x, y, pressure))
                .collect(),
        }
    }

    pub fn page(id: FixedId, strokes: Vec<Stroke>) -> Page {
        Page {
            format_version: 1,
            trailing_id: id,
            tool_format_version: 1,
            tag_count: 0,
            reserved_a: 0,
            reserved_b: 0,
            paper_type: 0,
            image_count: 0,
            reserved_c: 0,
            read_only: false,
            aspect_ratio: 1.0,
            strokes,
            line_count: 0,
            reserved_d: 0,
            text_count: 0,
        }
    }

    pub fn index(title: &str, page_ids: Vec<FixedId>) -> NotebookIndex {
        NotebookIndex {
            format_version: 1,
            page_ids,
            current_page: 0,
            title: title.to_string(),
            created_at: 1_000,
            modified_at: 2_000,
            trailing_id: FixedId::from_text("notebook-0000-0000-0000-000000000000"),
        }
    }

    /// A titled notebook whose pages each hold `strokes_per_page` strokes.
    pub struct NotebookFixture {
        pub index: NotebookIndex,
        pub pages: Vec<Page>,
        pub source: InMemorySource,
    }

    impl NotebookFixture {
        pub fn new(title: &str, page_total: usize, strokes_per_page: usize) -> Self {
            let ids: Vec<FixedId> = (0..page_total)
                .map(|n| FixedId::from_text(&format!("PAGE{}{}", n, "0".repeat(31))))
                .collect();
            let pages: Vec<Page> = ids
                .iter()
                .enumerate()
                .map(|(n, id)| {
                    let strokes = (0..strokes_per_page)
                        .map(|s| {
                            let offset = (n + s) as f32 / 100.0;
                            stroke(&[(offset, offset, 1.0), (offset + 0.1, offset, 0.5)])
                        })
                        .collect();
                    page(*id, strokes)
                })
                .collect();
            let index = index(title, ids);

            let mut source = InMemorySource::new().with_index(encode_index(&index).unwrap());
            for page in &pages {
                source.insert_page(page.trailing_id, encode_page(page).unwrap());
            }

            Self {
                index,
                pages,
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_is_none() {
        let source = InMemorySource::new();
        let id = FixedId::from_text("nope");
        assert!(source.page_bytes(&id).unwrap().is_none());
    }

    #[test]
    fn test_missing_index_is_error() {
        let source = InMemorySource::new();
        assert!(matches!(
            source.index_bytes().unwrap_err(),
            QuillError::Archive(_)
        ));
    }

    #[test]
    fn test_hash_map_is_a_page_source() {
        let id = FixedId::from_text("a");
        let mut map = HashMap::new();
        map.insert(id, vec![1, 2, 3]);
        assert_eq!(map.page_bytes(&id).unwrap().unwrap().as_ref(), &[1, 2, 3]);
    }
}
