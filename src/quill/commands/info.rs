use crate::assemble::load_notebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FixedId, Notebook, NumberedPage};
use crate::source::NotebookSource;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A source timestamp with its calendar reading, when it has one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timestamp {
    pub raw: i64,
    /// `raw` read as epoch milliseconds; `None` if out of range.
    pub utc: Option<DateTime<Utc>>,
}

impl Timestamp {
    pub fn from_millis(raw: i64) -> Self {
        Self {
            raw,
            utc: DateTime::from_timestamp_millis(raw),
        }
    }

    pub fn display(&self) -> String {
        match self.utc {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => format!("{} (raw)", self.raw),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub number: usize,
    pub id: FixedId,
    pub strokes: usize,
    pub points: usize,
    pub lines: i32,
    pub texts: i32,
    pub images: i32,
    pub paper_type: i32,
    pub read_only: bool,
}

impl From<&NumberedPage> for PageSummary {
    fn from(numbered: &NumberedPage) -> Self {
        let page = &numbered.page;
        Self {
            number: numbered.number,
            id: numbered.id,
            strokes: page.stroke_count(),
            points: page.point_count(),
            lines: page.line_count,
            texts: page.text_count,
            images: page.image_count,
            paper_type: page.paper_type,
            read_only: page.read_only,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotebookSummary {
    pub title: String,
    pub format_version: i32,
    pub current_page: i32,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub page_count: usize,
    pub pages: Vec<PageSummary>,
}

impl From<&Notebook> for NotebookSummary {
    fn from(notebook: &Notebook) -> Self {
        let index = &notebook.index;
        Self {
            title: index.title.clone(),
            format_version: index.format_version,
            current_page: index.current_page,
            created_at: Timestamp::from_millis(index.created_at),
            modified_at: Timestamp::from_millis(index.modified_at),
            page_count: index.page_count(),
            pages: notebook.pages.iter().map(PageSummary::from).collect(),
        }
    }
}

pub fn run<S: NotebookSource + ?Sized>(source: &S) -> Result<CmdResult> {
    let notebook = load_notebook(source)?;
    let summary = NotebookSummary::from(&notebook);

    let mut result = CmdResult::default();
    let skipped: i64 = summary
        .pages
        .iter()
        .map(|p| i64::from(p.lines.max(0)) + i64::from(p.texts.max(0)))
        .sum();
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} line/text record(s) are counted but not exported.",
            skipped
        )));
    }
    Ok(result.with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::NotebookFixture;

    #[test]
    fn test_summary_counts() {
        let fixture = NotebookFixture::new("Counted", 2, 3);
        let result = run(&fixture.source).unwrap();
        let summary = result.summary.unwrap();

        assert_eq!(summary.title, "Counted");
        assert_eq!(summary.page_count, 2);
        assert_eq!(summary.pages[1].number, 2);
        assert_eq!(summary.pages[1].strokes, 3);
        assert_eq!(summary.pages[1].points, 6);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_timestamps_as_millis() {
        let ts = Timestamp::from_millis(1_330_000_000_000);
        assert_eq!(ts.display(), "2012-02-23 12:26:40 UTC");

        let bad = Timestamp::from_millis(i64::MAX);
        assert!(bad.utc.is_none());
        assert_eq!(bad.display(), format!("{} (raw)", i64::MAX));
    }

    #[test]
    fn test_summary_serializes() {
        let fixture = NotebookFixture::new("Json", 1, 0);
        let summary = run(&fixture.source).unwrap().summary.unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["title"], "Json");
        assert_eq!(json["created_at"]["raw"], 1000);
        assert!(json["pages"][0]["id"].as_str().unwrap().starts_with("PAGE0"));
    }
}
