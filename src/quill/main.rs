use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quill::api::QuillApi;
use quill::commands::config::ConfigAction;
use quill::commands::{CmdMessage, MessageLevel, NotebookSummary};
use quill::config::{QuillConfig, CONFIG_KEYS};
use quill::error::{QuillError, Result};
use quill::logging::init_logging;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    let config_dir = resolve_config_dir(cli.config_dir)?;
    log::debug!("config dir {}", config_dir.display());
    let mut api = QuillApi::new(config_dir)?;

    match cli.command {
        Commands::Convert { path, output } => handle_convert(&api, &path, output.as_deref()),
        Commands::Info { path, json } => handle_info(&api, &path, json),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
    }
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "quill", "quill")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| QuillError::Config("could not determine config directory".to_string()))
}

fn handle_convert(api: &QuillApi, path: &Path, output: Option<&Path>) -> Result<()> {
    let result = api.convert(path, output)?;
    for file in &result.written_files {
        println!("{}", file.display().to_string().dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_info(api: &QuillApi, path: &Path, json: bool) -> Result<()> {
    let result = api.info(path)?;
    if let Some(summary) = &result.summary {
        if json {
            println!("{}", serde_json::to_string_pretty(summary)?);
            return Ok(());
        }
        print_summary(summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &mut QuillApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config)?;
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_config(config: &QuillConfig) -> Result<()> {
    for key in CONFIG_KEYS {
        println!("{} = {}", key, config.get(key)?);
    }
    Ok(())
}

fn print_summary(summary: &NotebookSummary) {
    println!("{}", summary.title.bold());
    println!("  format version  {}", summary.format_version);
    println!("  created         {}", summary.created_at.display());
    println!("  modified        {}", summary.modified_at.display());
    println!("  current page    {}", summary.current_page);
    println!("  pages           {}", summary.page_count);

    if summary.pages.is_empty() {
        return;
    }
    println!();
    for page in &summary.pages {
        let lock = if page.read_only { " (read-only)" } else { "" };
        println!(
            "{} {}  {} stroke(s), {} point(s){}",
            format!("{:>4}.", page.number).yellow(),
            page.id.to_string().dimmed(),
            page.strokes,
            page.points,
            lock
        );
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
