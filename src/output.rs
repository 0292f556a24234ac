use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::{
    error::{Error, Result},
    index::{EquivalenceIndex, Generator},
};

/// `(i1 i2 ... ik) support`
impl Display for Generator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.itemset.is_empty() {
            write!(f, "({})", self.itemset.iter().join(" "))?;
        }
        write!(f, " {}", self.support)
    }
}

/// Writes one line per generator, in index order.
pub fn write_generators<W: Write>(mut writer: W, index: &EquivalenceIndex) -> Result<()> {
    for generator in index {
        writeln!(writer, "{}", generator).map_err(Error::Write)?;
    }
    writer.flush().map_err(Error::Write)
}

pub fn save_generators<P: AsRef<Path>>(path: P, index: &EquivalenceIndex) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_generators(BufWriter::new(file), index)
}
