//! # Paperboy
//!
//! Command line access to the tutorial helpers.
//!
//! ```sh
//! paperboy 0.1.0
//! newspaper corpus tutorial helpers.
//!
//! USAGE:
//!     paperboy <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     align         Pair raw resources with their spell-checked versions
//!     check-size    Check that resources fit in a single task
//!     fetch         Download and unpack the metadata of a set
//!     filter        Find issues in a date range that contain a phrase
//!     help          Prints this message or the help of the given subcommand(s)
//!     resolve       Resolve issue identifiers to local files
//!     show          Show the fields of a metadata record
//!     unzip         Unzip an archive
//!     zip           Zip a file or a directory
//! ```
//!
//! Set `RUST_LOG=info` to follow progress.
use structopt::StructOpt;

use paperboy::archive;
use paperboy::download::Fetcher;
use paperboy::error::Error;
use paperboy::exercises;
use paperboy::metadata::with_record;
use paperboy::resolver::Resolver;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Paperboy::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Paperboy::Fetch(f) => {
            let config = f.dataset.config()?;
            let dst = f.dst.unwrap_or_else(|| config.metadata_dir().to_path_buf());
            let fetcher = Fetcher::from_config(&config)?;
            let dst = fetcher.fetch_and_unpack(config.set_id(), &dst)?;
            println!("{}", dst.display());
        }

        cli::Paperboy::Zip(z) => {
            let dst = archive::zip_path(&z.src, z.dst.as_deref())?;
            println!("{}", dst.display());
        }

        cli::Paperboy::Unzip(u) => {
            for path in archive::unzip_path(&u.src, u.dst.as_deref())? {
                println!("{}", path.display());
            }
        }

        cli::Paperboy::Resolve(r) => {
            let config = r.dataset.config()?;
            let resolver = Resolver::from_config(&config)?;
            for id in &r.ids {
                match resolver.resolve(id) {
                    Some(path) => println!("{}\t{}", id, path.display()),
                    None => warn!("[{}] unknown identifier", id),
                }
            }
        }

        cli::Paperboy::Show(s) => {
            let out = with_record(&s.src, |record| {
                if s.raw {
                    Ok(record.source().to_string())
                } else {
                    Ok(serde_json::to_string_pretty(&record.fields()?)?)
                }
            })?;
            println!("{}", out);
        }

        cli::Paperboy::Filter(f) => {
            let config = f.dataset.config()?;
            let resolver = Resolver::from_config(&config)?;
            let metadata_dir = f
                .metadata_dir
                .unwrap_or_else(|| config.metadata_dir().to_path_buf());
            let files = exercises::filter_by_date_and_content(
                &metadata_dir,
                &resolver,
                f.from,
                f.to,
                &f.phrase,
            )?;
            for file in files {
                println!("{}", file.display());
            }
        }

        cli::Paperboy::Align(a) => {
            let config = a.dataset.config()?;
            let raw = if a.raw.is_empty() {
                exercises::spellchecked_resources_ex3(&config)?
            } else {
                a.raw
            };
            let spelled = if a.spelled.is_empty() {
                exercises::spellchecked_resources_ch3(&config)?
            } else {
                a.spelled
            };
            for (r, s) in exercises::align_resources(&raw, &spelled) {
                println!("{}\t{}", r.display(), s.display());
            }
        }

        cli::Paperboy::CheckSize(c) => {
            let size = archive::check_task_size(&c.resources)?;
            println!("{}", size);
        }
    };
    Ok(())
}
