use pdbtbx::*;
use polars::prelude::*;
use std::path::Path;

/// Open an atomic data file with [`pdbtbx::ReadOptions`].
///
/// Both PDB and mmCIF files are accepted; the format is guessed from the
/// file extension. Parsing is done at [`StrictnessLevel::Loose`] so that
/// slightly malformed records produce warnings instead of hard failures,
/// and only atomic coordinates are kept. Solvent and other hetero residues
/// are retained because the statistics and plotting routines report on them.
///
/// # Arguments
///
/// * `input_file` - Path to the structure file
///
/// # Returns
///
/// The parsed structure together with any non-fatal parse warnings, or the
/// list of errors if the file could not be read at all.
pub fn load_model(input_file: &str) -> Result<(PDB, Vec<PDBError>), Vec<PDBError>> {
    pdbtbx::ReadOptions::default()
        .set_only_atomic_coords(true)
        .set_level(pdbtbx::StrictnessLevel::Loose)
        .read(input_file)
}

/// Write a DataFrame to a file, with the extension set from the file type
pub fn write_df_to_file(df: &mut DataFrame, file_path: &Path, file_type: DataFrameFileType) {
    let file_suffix = file_type.to_string();
    let mut file = std::fs::File::create(file_path.with_extension(file_suffix)).unwrap();
    match file_type {
        DataFrameFileType::Csv => {
            CsvWriter::new(&mut file).finish(df).unwrap();
        }
        DataFrameFileType::Parquet => {
            ParquetWriter::new(&mut file).finish(df).unwrap();
        }
        DataFrameFileType::Json => {
            JsonWriter::new(&mut file)
                .with_json_format(JsonFormat::Json)
                .finish(df)
                .unwrap();
        }
        DataFrameFileType::NDJson => {
            JsonWriter::new(&mut file)
                .with_json_format(JsonFormat::JsonLines)
                .finish(df)
                .unwrap();
        }
    }
}

/// File format for writing DataFrames.
#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum DataFrameFileType {
    /// Comma-separated values
    Csv,
    /// Parquet columnar storage
    Parquet,
    /// Standard JSON
    Json,
    /// Newline-delimited JSON
    NDJson,
}

impl std::fmt::Display for DataFrameFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DataFrameFileType::Csv => write!(f, "csv"),
            DataFrameFileType::Parquet => write!(f, "parquet"),
            DataFrameFileType::Json => write!(f, "json"),
            DataFrameFileType::NDJson => write!(f, "ndjson"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Load the two-protein-chain fixture with a zinc ion and waters.
    pub(crate) fn load_test_model() -> PDB {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/two_chain.pdb");
        let (pdb, _) = load_model(&path).unwrap();
        pdb
    }

    #[test]
    fn loads_all_chains_and_atoms() {
        let pdb = load_test_model();

        assert_eq!(pdb.chain_count(), 3);
        assert_eq!(pdb.residue_count(), 9);
        // 9 backbone atoms in A, 4 in B plus the zinc, 3 waters in W
        assert_eq!(pdb.atom_count(), 17);
    }

    #[test]
    fn keeps_hetero_residues_on_load() {
        let pdb = load_test_model();

        let names: Vec<_> = pdb
            .residues()
            .filter_map(|res| res.name())
            .map(|n| n.to_string())
            .collect();
        assert!(names.iter().any(|n| n == "ZN"));
        assert!(names.iter().any(|n| n == "HOH"));
    }

    #[test]
    fn mmcif_input_matches_pdb_counts() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/two_chain.cif");
        let (pdb, _) = load_model(&path).unwrap();

        assert_eq!(pdb.chain_count(), 3);
        assert_eq!(pdb.residue_count(), 9);
        assert_eq!(pdb.atom_count(), 17);

        let names: Vec<_> = pdb
            .residues()
            .filter_map(|res| res.name())
            .map(|n| n.to_string())
            .collect();
        assert!(names.iter().any(|n| n == "ZN"));
        assert!(names.iter().any(|n| n == "HOH"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_model("test-data/no_such_file.pdb");
        assert!(result.is_err());
    }

    #[test]
    fn df_file_type_extensions() {
        assert_eq!(DataFrameFileType::Csv.to_string(), "csv");
        assert_eq!(DataFrameFileType::Parquet.to_string(), "parquet");
        assert_eq!(DataFrameFileType::Json.to_string(), "json");
        assert_eq!(DataFrameFileType::NDJson.to_string(), "ndjson");
    }

    #[test]
    fn writes_csv_output() {
        let mut df = df!(
            "chain" => ["A", "B"],
            "atoms" => [9u32, 5u32],
        )
        .unwrap();

        let out = std::env::temp_dir().join("pdbsketch_utils_test");
        write_df_to_file(&mut df, &out, DataFrameFileType::Csv);

        let written = out.with_extension("csv");
        let contents = std::fs::read_to_string(&written).unwrap();
        assert!(contents.starts_with("chain,atoms"));
        let _ = std::fs::remove_file(written);
    }
}
