#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Pdbsketch Library
//!
//! This library provides descriptive statistics and simple static plots for
//! macromolecular structure models in PDB and mmCIF files. It can summarize
//! the chain/residue/atom hierarchy, list non-standard residues, count
//! waters, and render a multi-panel 3D/2D scatter figure of atomic
//! positions.
//!
//! Tabular results are returned as Polars DataFrames, which can be printed
//! directly or written to CSV, Parquet and JSON files.

mod chains;
mod plot;
mod residues;
mod summary;
mod utils;

// Re-export key public types
pub use chains::ChainExt;
pub use plot::render_projections;
pub use residues::ResidueExt;
pub use summary::{chain_summary, first_residue, hetero_residues, water_count};
pub use utils::{load_model, write_df_to_file, DataFrameFileType};

use pdbtbx::*;
use std::collections::HashMap;

/// Get sequences of all chains in a PDB structure.
///
/// # Arguments
///
/// * `pdb` - Reference to a PDB structure
///
/// # Returns
///
/// A `HashMap` mapping chain IDs to their sequences as strings.
///
/// # Example
///
/// ```no_run
/// use pdbsketch::{load_model, get_sequences};
///
/// let (pdb, _errors) = load_model("path/to/structure.pdb").unwrap();
/// let sequences = get_sequences(&pdb);
/// for (chain_id, seq) in sequences {
///     println!("Chain {}: {}", chain_id, seq);
/// }
/// ```
pub fn get_sequences(pdb: &PDB) -> HashMap<String, String> {
    pdb.chains()
        .map(|chain| (chain.id().to_string(), chain.pdb_seq().join("")))
        .collect()
}
