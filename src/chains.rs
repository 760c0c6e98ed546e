use crate::residues::ResidueExt;
use nalgebra as na;
use pdbtbx::*;

/// Extensions to the chains from `pdbtbx`
pub trait ChainExt {
    /// One-letter sequence of the chain's polymer residues.
    /// Waters and other hetero residues are skipped.
    fn pdb_seq(&self) -> Vec<&str>;

    /// Mean position of all atoms in the chain.
    fn centroid(&self) -> na::Vector3<f64>;
}

impl ChainExt for Chain {
    fn pdb_seq(&self) -> Vec<&str> {
        self.residues().filter_map(|res| res.resn()).collect()
    }

    fn centroid(&self) -> na::Vector3<f64> {
        let mut sum = na::Vector3::zeros();
        let mut n_atoms = 0usize;
        for atom in self.atoms() {
            let (x, y, z) = atom.pos();
            sum += na::Vector3::new(x, y, z);
            n_atoms += 1;
        }
        if n_atoms == 0 {
            sum
        } else {
            sum / n_atoms as f64
        }
    }
}
