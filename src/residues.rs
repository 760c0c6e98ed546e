use pdbtbx::*;

/// Residue names treated as solvent water (including heavy water).
const WATER_NAMES: [&str; 3] = ["HOH", "WAT", "DOD"];

/// Extensions to the residues from `pdbtbx`
pub trait ResidueExt {
    /// One-letter code for the residue. Amino acids map to their uppercase
    /// code, nucleotides to a lowercase base letter. Waters and other
    /// hetero residues return `None`.
    fn resn(&self) -> Option<&str>;

    /// Whether the residue is a solvent water molecule.
    fn is_water(&self) -> bool;

    /// Whether the residue is non-standard (from HETATM records),
    /// waters excluded.
    fn is_hetero(&self) -> bool;
}

impl ResidueExt for Residue {
    fn resn(&self) -> Option<&str> {
        let code = match self.name().unwrap_or("").to_uppercase().as_str() {
            "ALA" => "A",
            "ARG" => "R",
            "ASN" => "N",
            "ASP" => "D",
            "CYS" => "C",
            "GLN" => "Q",
            "GLU" => "E",
            "GLY" => "G",
            "HIS" => "H",
            "ILE" => "I",
            "LEU" => "L",
            "LYS" => "K",
            "MET" => "M",
            "PHE" => "F",
            "PRO" => "P",
            "SER" => "S",
            "THR" => "T",
            "TRP" => "W",
            "TYR" => "Y",
            "VAL" => "V",
            // DNA and RNA bases show up in protein-nucleic acid complexes
            "DA" | "A" => "a",
            "DC" | "C" => "c",
            "DG" | "G" => "g",
            "DT" => "t",
            "U" => "u",
            _ => "X",
        };

        match code {
            "X" => None,
            _ => Some(code),
        }
    }

    fn is_water(&self) -> bool {
        self.name()
            .is_some_and(|name| WATER_NAMES.contains(&name.to_uppercase().as_str()))
    }

    fn is_hetero(&self) -> bool {
        !self.is_water() && self.atoms().all(|atom| atom.hetero())
    }
}
