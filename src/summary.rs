//! Descriptive statistics over the model → chain → residue → atom tree.

use crate::chains::ChainExt;
use crate::residues::ResidueExt;
use pdbtbx::*;
use polars::prelude::*;
use rayon::prelude::*;

/// Per-chain counts and geometry used to build the summary DataFrame.
struct ChainStats {
    model: u32,
    chain: String,
    residues: u32,
    atoms: u32,
    waters: u32,
    hetero: u32,
    centroid: nalgebra::Vector3<f64>,
}

impl ChainStats {
    fn new(model: &Model, chain: &Chain) -> Self {
        Self {
            model: model.serial_number() as u32,
            chain: chain.id().to_string(),
            residues: chain.residue_count() as u32,
            atoms: chain.atom_count() as u32,
            waters: chain.residues().filter(|res| res.is_water()).count() as u32,
            hetero: chain.residues().filter(|res| res.is_hetero()).count() as u32,
            centroid: chain.centroid(),
        }
    }
}

/// Summarize every chain in the structure.
///
/// Walks the full model → chain → residue → atom hierarchy and produces one
/// row per chain with its residue, atom, water and hetero residue counts plus
/// the chain centroid. Chains appear in file order.
///
/// # Example
///
/// ```no_run
/// use pdbsketch::{load_model, chain_summary};
///
/// let (pdb, _warnings) = load_model("path/to/structure.cif").unwrap();
/// let df = chain_summary(&pdb);
/// println!("{df}");
/// ```
pub fn chain_summary(pdb: &PDB) -> DataFrame {
    let stats: Vec<ChainStats> = pdb
        .models()
        .flat_map(|model| model.chains().map(move |chain| ChainStats::new(model, chain)))
        .collect();

    df!(
        "model" => stats.iter().map(|x| x.model).collect::<Vec<u32>>(),
        "chain" => stats.iter().map(|x| x.chain.to_owned()).collect::<Vec<String>>(),
        "residues" => stats.iter().map(|x| x.residues).collect::<Vec<u32>>(),
        "atoms" => stats.iter().map(|x| x.atoms).collect::<Vec<u32>>(),
        "waters" => stats.iter().map(|x| x.waters).collect::<Vec<u32>>(),
        "hetero" => stats.iter().map(|x| x.hetero).collect::<Vec<u32>>(),
        "cx" => stats.iter().map(|x| x.centroid.x).collect::<Vec<f64>>(),
        "cy" => stats.iter().map(|x| x.centroid.y).collect::<Vec<f64>>(),
        "cz" => stats.iter().map(|x| x.centroid.z).collect::<Vec<f64>>(),
    )
    .unwrap()
}

/// List all non-standard residues in the structure, waters excluded.
///
/// One row per hetero residue with its chain, name, sequence number,
/// insertion code and atom count.
pub fn hetero_residues(pdb: &PDB) -> DataFrame {
    let mut rows: Vec<(u32, String, String, i32, String, u32)> = Vec::new();
    for model in pdb.models() {
        for chain in model.chains() {
            for res in chain.residues().filter(|res| res.is_hetero()) {
                rows.push((
                    model.serial_number() as u32,
                    chain.id().to_string(),
                    res.name().unwrap_or("").to_string(),
                    res.serial_number() as i32,
                    res.insertion_code().unwrap_or("").to_string(),
                    res.atom_count() as u32,
                ));
            }
        }
    }

    df!(
        "model" => rows.iter().map(|x| x.0).collect::<Vec<u32>>(),
        "chain" => rows.iter().map(|x| x.1.to_owned()).collect::<Vec<String>>(),
        "resn" => rows.iter().map(|x| x.2.to_owned()).collect::<Vec<String>>(),
        "resi" => rows.iter().map(|x| x.3).collect::<Vec<i32>>(),
        "insertion" => rows.iter().map(|x| x.4.to_owned()).collect::<Vec<String>>(),
        "atoms" => rows.iter().map(|x| x.5).collect::<Vec<u32>>(),
    )
    .unwrap()
}

/// Count the water residues in the structure.
pub fn water_count(pdb: &PDB) -> usize {
    pdb.par_residues().filter(|res| res.is_water()).count()
}

/// First residue of the chain with the given id, if any.
pub fn first_residue<'a>(pdb: &'a PDB, chain_id: &str) -> Option<&'a Residue> {
    pdb.chains()
        .find(|chain| chain.id() == chain_id)
        .and_then(|chain| chain.residues().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tests::load_test_model;

    #[test]
    fn summary_has_one_row_per_chain() {
        let pdb = load_test_model();
        let df = chain_summary(&pdb);

        assert_eq!(df.height(), 3);
        let chains = df.column("chain").unwrap().str().unwrap();
        assert_eq!(chains.get(0), Some("A"));
        assert_eq!(chains.get(1), Some("B"));
        assert_eq!(chains.get(2), Some("W"));
    }

    #[test]
    fn summary_counts_match_fixture() {
        let pdb = load_test_model();
        let df = chain_summary(&pdb);

        let residues = df.column("residues").unwrap().u32().unwrap();
        let atoms = df.column("atoms").unwrap().u32().unwrap();
        let waters = df.column("waters").unwrap().u32().unwrap();
        let hetero = df.column("hetero").unwrap().u32().unwrap();

        // Chain A: three alanines, three backbone atoms each
        assert_eq!(residues.get(0), Some(3));
        assert_eq!(atoms.get(0), Some(9));
        assert_eq!(waters.get(0), Some(0));
        assert_eq!(hetero.get(0), Some(0));

        // Chain B: two glycines plus the zinc ion
        assert_eq!(residues.get(1), Some(3));
        assert_eq!(atoms.get(1), Some(5));
        assert_eq!(hetero.get(1), Some(1));

        // Chain W: waters only
        assert_eq!(residues.get(2), Some(3));
        assert_eq!(waters.get(2), Some(3));
    }

    #[test]
    fn hetero_table_lists_the_zinc() {
        let pdb = load_test_model();
        let df = hetero_residues(&pdb);

        assert_eq!(df.height(), 1);
        let resn = df.column("resn").unwrap().str().unwrap();
        assert_eq!(resn.get(0), Some("ZN"));
        let resi = df.column("resi").unwrap().i32().unwrap();
        assert_eq!(resi.get(0), Some(90));
    }

    #[test]
    fn counts_waters_across_the_model() {
        let pdb = load_test_model();
        assert_eq!(water_count(&pdb), 3);
    }

    #[test]
    fn first_residue_lookup() {
        let pdb = load_test_model();

        let res = first_residue(&pdb, "A").unwrap();
        assert_eq!(res.serial_number(), 1);
        assert_eq!(res.name(), Some("ALA"));

        assert!(first_residue(&pdb, "Z").is_none());
    }
}
