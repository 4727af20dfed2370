//! # Quill Architecture
//!
//! Quill turns handwritten-notebook containers into vector page images. The
//! container is a tar archive holding one binary **index** record and one
//! binary **page** record per page; each page is a list of pen strokes made of
//! pressure-sensitive points.
//!
//! It is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and commands (commands/*.rs)                  │
//! │  - Open sources, load config, return CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: codec/ (record decoding), assemble.rs (page order),  │
//! │  model.rs (decoded values)                                  │
//! │  Collaborators: source/ (where bytes live), render.rs (SVG) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decoding Rules
//!
//! Records are big-endian and position-framed: there are no tags, so every
//! field is read in order through [`codec::ByteCursor`], reserved fields
//! included. Decoding is all-or-nothing per record, and a notebook converts
//! only if every page decodes.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the CLI
//! - [`commands`]: `convert`, `info`, `config`
//! - [`codec`]: cursor, index and page decoders, matching encoders
//! - [`assemble`]: index + page source → ordered, numbered pages
//! - [`model`]: `NotebookIndex`, `Page`, `Stroke`, `Point`, `FixedId`
//! - [`source`]: container archives, extracted directories, in-memory maps
//! - [`render`]: SVG output
//! - [`config`]: persisted settings
//! - [`logging`]: stderr logger setup for the binary
//! - [`error`]: error types

pub mod api;
pub mod assemble;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod source;
