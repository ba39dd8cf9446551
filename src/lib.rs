//! # Paperboy
//!
//! 📰 Helpers for the tutorial notebooks built around a digitized newspaper archive.
//!
//! - [metadata] reads dates, titles, descriptions and issue identifiers from CMDI records,
//! - [resolver] maps issue identifiers to local files,
//! - [download] retrieves and unpacks the metadata bundle of a set,
//! - [archive] zips/unzips files and directories,
//! - [exercises] holds the ready-made answers to the notebook exercises.
//!
//! Locations are derived from a [config::Config].
pub mod archive;
pub mod config;
pub mod download;
pub mod error;
pub mod exercises;
pub mod metadata;
pub mod resolver;
