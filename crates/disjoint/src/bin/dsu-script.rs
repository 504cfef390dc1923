//! Run a script of union-find commands over named elements
//!
//! Each line holds one command:
//!
//! - `add <label>...` inserts elements
//! - `union <a> <b>` merges the sets containing `a` and `b`
//! - `same <a> <b>` prints whether `a` and `b` share a set
//! - `find <a>` prints the representative of the set containing `a`
//! - `sets` prints every set, one per line
//!
//! Labels are inserted on first mention.  Blank lines and lines starting with
//! `#` are ignored.

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]

use std::{
    fs,
    io::{self, prelude::*},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use disjoint::{DisjointSet, Handle};
use hashbrown::HashMap;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Print more verbose logs
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Script to run, or standard input if omitted
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Add(Vec<&'a str>),
    Union(&'a str, &'a str),
    Same(&'a str, &'a str),
    Find(&'a str),
    Sets,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum ParseError {
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Expected {expected} argument(s) to {command:?}, found {found}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
    },
}

fn exactly<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::Arity {
        command,
        expected: N,
        found: args.len(),
    })
}

fn parse(line: &str) -> Result<Option<Command<'_>>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<_> = words.collect();

    Ok(Some(match cmd {
        "add" => Command::Add(args),
        "union" => {
            let [a, b] = exactly::<2>("union", &args)?;
            Command::Union(a, b)
        },
        "same" => {
            let [a, b] = exactly::<2>("same", &args)?;
            Command::Same(a, b)
        },
        "find" => {
            let [a] = exactly::<1>("find", &args)?;
            Command::Find(a)
        },
        "sets" => {
            let [] = exactly::<0>("sets", &args)?;
            Command::Sets
        },
        s => return Err(ParseError::Unknown(s.into())),
    }))
}

#[derive(Debug, Default)]
struct Session {
    set: DisjointSet<String>,
    labels: HashMap<String, Handle<String>>,
}

impl Session {
    fn element(&mut self, label: &str) -> Handle<String> {
        if let Some(&handle) = self.labels.get(label) {
            return handle;
        }

        let handle = self.set.insert(label.to_owned());
        self.labels.insert(label.to_owned(), handle);
        tracing::debug!(label, "Added element");
        handle
    }

    fn run(&mut self, cmd: Command<'_>, out: &mut impl Write) -> Result<()> {
        match cmd {
            Command::Add(labels) => {
                for label in labels {
                    self.element(label);
                }
            },
            Command::Union(a, b) => {
                let (a, b) = (self.element(a), self.element(b));
                let unioned = self.set.union(a, b)?;
                let root = self.set.get(unioned.root)?;

                if unioned.did_merge() {
                    writeln!(out, "merged into {root}")?;
                } else {
                    writeln!(out, "already joined under {root}")?;
                }
            },
            Command::Same(a, b) => {
                let (a, b) = (self.element(a), self.element(b));
                writeln!(out, "{}", self.set.are_same_set(a, b)?)?;
            },
            Command::Find(a) => {
                let a = self.element(a);
                let root = self.set.find(a)?;
                writeln!(out, "{}", self.set.get(root)?)?;
            },
            Command::Sets => {
                for members in self.set.sets() {
                    let labels = members
                        .into_iter()
                        .map(|h| self.set.get(h).map(String::as_str))
                        .collect::<Result<Vec<_>, _>>()?;
                    writeln!(out, "{}", labels.join(" "))?;
                }
            },
        }

        Ok(())
    }
}

fn main() {
    let opts = Opts::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .with_writer(io::stderr),
        )
        .with(match (cfg!(debug_assertions), opts.verbose) {
            (false, 0) => LevelFilter::INFO,
            (false, 1) | (true, 0) => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        })
        .init();

    tracing::debug!("{opts:#?}");

    std::process::exit(run(opts).map_or_else(
        |e| {
            tracing::error!("{e:?}");
            1
        },
        |()| 0,
    ));
}

fn run(Opts { verbose: _, file }: Opts) -> Result<()> {
    let script = if let Some(file) = file {
        fs::read_to_string(&file)
            .with_context(|| format!("Error reading script {}", file.display()))?
    } else {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .context("Error reading script from stdin")?;
        s
    };

    let mut session = Session::default();
    let mut out = io::stdout().lock();

    for (i, line) in script.lines().enumerate() {
        let _s = tracing::debug_span!("line", number = i + 1).entered();

        let Some(cmd) = parse(line).with_context(|| format!("Syntax error on line {}", i + 1))?
        else {
            continue;
        };

        session
            .run(cmd, &mut out)
            .with_context(|| format!("Error running line {}", i + 1))?;
    }

    out.flush().context("Error flushing output")
}
