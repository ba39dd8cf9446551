//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use chrono::NaiveDate;
use structopt::StructOpt;

use paperboy::config::{Config, DEFAULT_SET_ID};
use paperboy::error::Error;
use paperboy::metadata::parse_date;

#[derive(Debug, StructOpt)]
#[structopt(name = "paperboy", about = "newspaper corpus tutorial helpers.")]
/// Holds every command that is callable by the `paperboy` command.
pub enum Paperboy {
    #[structopt(about = "Download and unpack the metadata of a set")]
    Fetch(Fetch),
    #[structopt(about = "Zip a file or a directory")]
    Zip(Zip),
    #[structopt(about = "Unzip an archive")]
    Unzip(Unzip),
    #[structopt(about = "Resolve issue identifiers to local files")]
    Resolve(Resolve),
    #[structopt(about = "Show the fields of a metadata record")]
    Show(Show),
    #[structopt(about = "Find issues in a date range that contain a phrase")]
    Filter(Filter),
    #[structopt(about = "Pair raw resources with their spell-checked versions")]
    Align(Align),
    #[structopt(about = "Check that resources fit in a single task")]
    CheckSize(CheckSize),
}

#[derive(Debug, StructOpt)]
/// Dataset location, shared by commands that need one.
pub struct Dataset {
    #[structopt(
        long = "home",
        parse(from_os_str),
        help = "base directory of data/, temp/ and output/. Default is the user's home."
    )]
    pub home: Option<PathBuf>,
    #[structopt(long = "set-id", default_value = DEFAULT_SET_ID, help = "dataset identifier")]
    pub set_id: String,
}

impl Dataset {
    pub fn config(&self) -> Result<Config, Error> {
        match &self.home {
            Some(home) => Ok(Config::new(home, &self.set_id)),
            None => Config::from_home(&self.set_id),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Fetch command and parameters.
/// ```sh
/// paperboy-fetch 0.1.0
/// Download and unpack the metadata of a set
///
/// USAGE:
///     paperboy fetch [OPTIONS] [dst]
///
/// ARGS:
///     <dst>    extraction destination. Default is the configured metadata directory.
/// ```
pub struct Fetch {
    #[structopt(flatten)]
    pub dataset: Dataset,
    #[structopt(
        parse(from_os_str),
        help = "extraction destination. Default is the configured metadata directory."
    )]
    pub dst: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Zip {
    #[structopt(parse(from_os_str), help = "file or directory to zip")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "archive location. Default is next to the source."
    )]
    pub dst: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Unzip {
    #[structopt(parse(from_os_str), help = "archive to unzip")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "extraction destination. Default is next to the archive."
    )]
    pub dst: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Resolve {
    #[structopt(flatten)]
    pub dataset: Dataset,
    #[structopt(required = true, help = "issue identifiers")]
    pub ids: Vec<String>,
}

#[derive(Debug, StructOpt)]
pub struct Show {
    #[structopt(parse(from_os_str), help = "metadata record")]
    pub src: PathBuf,
    #[structopt(short = "r", long = "raw", help = "print the record as is")]
    pub raw: bool,
}

#[derive(Debug, StructOpt)]
/// Filter command and parameters.
/// ```sh
/// paperboy-filter 0.1.0
/// Find issues in a date range that contain a phrase
///
/// USAGE:
///     paperboy filter [OPTIONS] <from> <to> <phrase>
///
/// ARGS:
///     <from>      first day of the range (YYYY-M-D)
///     <to>        last day of the range (YYYY-M-D)
///     <phrase>    phrase to look for, case insensitive
/// ```
pub struct Filter {
    #[structopt(flatten)]
    pub dataset: Dataset,
    #[structopt(
        long = "metadata-dir",
        parse(from_os_str),
        help = "metadata records location. Default is the configured metadata directory."
    )]
    pub metadata_dir: Option<PathBuf>,
    #[structopt(parse(try_from_str = parse_date), help = "first day of the range (YYYY-M-D)")]
    pub from: NaiveDate,
    #[structopt(parse(try_from_str = parse_date), help = "last day of the range (YYYY-M-D)")]
    pub to: NaiveDate,
    #[structopt(help = "phrase to look for, case insensitive")]
    pub phrase: String,
}

#[derive(Debug, StructOpt)]
pub struct Align {
    #[structopt(flatten)]
    pub dataset: Dataset,
    #[structopt(
        parse(from_os_str),
        help = "raw resources. Default is the exercise 3 resources."
    )]
    pub raw: Vec<PathBuf>,
    #[structopt(
        long = "spelled",
        parse(from_os_str),
        help = "spell-checked resources. Default is the chapter 3 speller outputs."
    )]
    pub spelled: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct CheckSize {
    #[structopt(parse(from_os_str), required = true, help = "resources of the task")]
    pub resources: Vec<PathBuf>,
}
