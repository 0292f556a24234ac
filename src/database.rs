//! Reading a `;`-delimited transaction file into a [`Database`].

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    types::{Database, Item, Transaction},
};

/// How transaction lines are split into items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub delimiter: char,
    /// Leading fields that are labels rather than items.
    pub skip_fields: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            skip_fields: 1,
        }
    }
}

/// Reads one transaction per non-blank line. Transaction ids follow line order
/// starting at 1, so the `n`-th transaction of the result has tid `n + 1`.
///
/// Items of a transaction are returned sorted and deduplicated.
pub fn read_database<R: BufRead>(reader: R, config: &ReaderConfig) -> Result<Database> {
    let mut database = Database::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::Read)?;
        if line.trim().is_empty() {
            continue;
        }
        database.push(parse_transaction(&line, line_no + 1, config)?);
    }

    debug!(transactions = database.len(), "database read");
    Ok(database)
}

pub fn read_database_file<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<Database> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_database(BufReader::new(file), config)
}

fn parse_transaction(line: &str, line_no: usize, config: &ReaderConfig) -> Result<Transaction> {
    line.split(config.delimiter)
        .skip(config.skip_fields)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field.parse::<Item>().map_err(|_| Error::Parse {
                line: line_no,
                token: field.to_owned(),
            })
        })
        .collect::<Result<Vec<Item>>>()
        .map(normalize)
}

/// Sorts and deduplicates the items of a transaction.
pub fn normalize(mut items: Vec<Item>) -> Transaction {
    items.sort_unstable();
    items.dedup();
    items
}
