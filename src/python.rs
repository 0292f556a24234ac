use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::{
    database::normalize,
    generators::talky_g as mine_generators,
    index::EquivalenceIndex,
    types::{Database, Item, Itemset, Support},
};

pub fn convert_generators(index: &EquivalenceIndex) -> Vec<(Itemset, Support)> {
    index
        .iter()
        .map(|generator| (generator.itemset.clone(), generator.support))
        .collect()
}

/// Frequent generators of `transactions` as `(itemset, support)` pairs.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_sup, /)")]
fn mine(transactions: Vec<Vec<Item>>, min_sup: Support) -> Vec<(Itemset, Support)> {
    let database: Database = transactions.into_iter().map(normalize).collect();
    convert_generators(&mine_generators(&database, min_sup))
}

#[pymodule]
fn talky_g(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine, m)?)?;
    Ok(())
}
