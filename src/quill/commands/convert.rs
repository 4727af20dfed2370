use crate::assemble::load_notebook;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuillConfig;
use crate::error::{QuillError, Result};
use crate::render::write_page_svg;
use crate::source::NotebookSource;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const UNTITLED_DIR: &str = "notebook";

/// Decodes the whole notebook, then writes one SVG per page.
///
/// Nothing is written unless every page decodes.
pub fn run<S: NotebookSource + ?Sized>(
    source: &S,
    config: &QuillConfig,
    output_dir: Option<&Path>,
) -> Result<CmdResult> {
    let notebook = load_notebook(source)?;

    let out_dir = resolve_output_dir(output_dir, config, notebook.title());
    fs::create_dir_all(&out_dir).map_err(QuillError::Io)?;

    let opts = config.render_options();
    let mut written = Vec::with_capacity(notebook.pages.len());
    for numbered in &notebook.pages {
        let path = out_dir.join(config.page_file_name(numbered.number));
        let file = File::create(&path).map_err(QuillError::Io)?;
        let mut writer = BufWriter::new(file);
        write_page_svg(&mut writer, &numbered.page, &opts)?;
        writer.flush().map_err(QuillError::Io)?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    let mut result = CmdResult::default();
    if written.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "\"{}\" has no pages; nothing written.",
            notebook.title()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Converted {} page(s) of \"{}\" to {}",
            written.len(),
            notebook.title(),
            out_dir.display()
        )));
    }
    Ok(result.with_written_files(written))
}

fn resolve_output_dir(explicit: Option<&Path>, config: &QuillConfig, title: &str) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.output_dir {
        return dir.clone();
    }
    let safe = sanitize_filename(title);
    if safe.is_empty() {
        PathBuf::from(UNTITLED_DIR)
    } else {
        PathBuf::from(safe)
    }
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
