//! Codon-to-amino-acid translation tables.
//!
//! Codons are indexed in NCBI order (`TCAG` for each position), so a table is
//! the 64-letter `ncbieaa` string of the corresponding NCBI genetic code.

use crate::libs::error::AlignError;

/// NCBI genetic code 1, standard.
const NCBI_1: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
/// NCBI genetic code 2, vertebrate mitochondrial.
const NCBI_2: &[u8; 64] = b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG";
/// NCBI genetic code 4, mold/protozoan mitochondrial and Mycoplasma.
const NCBI_4: &[u8; 64] = b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
/// NCBI genetic code 5, invertebrate mitochondrial.
const NCBI_5: &[u8; 64] = b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG";
/// NCBI genetic code 6, ciliate nuclear.
const NCBI_6: &[u8; 64] = b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const INVALID: u8 = 0xff;

/// ASCII nucleotide -> position in `TCAG`. `U` reads as `T`.
static BASE_INDEX: [u8; 256] = {
    let mut table = [INVALID; 256];
    table[b'T' as usize] = 0;
    table[b't' as usize] = 0;
    table[b'U' as usize] = 0;
    table[b'u' as usize] = 0;
    table[b'C' as usize] = 1;
    table[b'c' as usize] = 1;
    table[b'A' as usize] = 2;
    table[b'a' as usize] = 2;
    table[b'G' as usize] = 3;
    table[b'g' as usize] = 3;
    table
};

fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let mut idx = 0usize;
    for &b in codon {
        let v = BASE_INDEX[b as usize];
        if v == INVALID {
            return None;
        }
        idx = idx * 4 + v as usize;
    }
    Some(idx)
}

/// A fixed mapping from the 64 codons to amino acids (`*` for stop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    aa: [u8; 64],
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable {
    /// The standard genetic code (NCBI table 1).
    pub fn standard() -> Self {
        CodonTable { aa: *NCBI_1 }
    }

    /// Built-in NCBI genetic codes: 1, 2, 4, 5, 6 and 11.
    pub fn from_ncbi_id(id: u8) -> Result<Self, AlignError> {
        let aa = match id {
            1 | 11 => NCBI_1,
            2 => NCBI_2,
            4 => NCBI_4,
            5 => NCBI_5,
            6 => NCBI_6,
            _ => return Err(AlignError::UnknownGeneticCode(id)),
        };
        Ok(CodonTable { aa: *aa })
    }

    /// Builds a table from `(codon, amino acid)` pairs. All 64 codons must be
    /// covered; later pairs overwrite earlier ones.
    ///
    /// ```
    /// use tfa::libs::CodonTable;
    ///
    /// let std = CodonTable::standard();
    /// let pairs: Vec<(String, u8)> = std
    ///     .iter()
    ///     .map(|(c, aa)| (c.iter().map(|&b| b as char).collect(), aa))
    ///     .collect();
    /// let table = CodonTable::from_pairs(pairs).unwrap();
    /// assert_eq!(table, std);
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, AlignError>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<[u8]>,
    {
        let mut aa = [INVALID; 64];
        for (codon, residue) in pairs {
            let codon = codon.as_ref();
            let idx = codon_index(codon).ok_or_else(|| {
                AlignError::InvalidCodon(format!("{:?}", String::from_utf8_lossy(codon)))
            })?;
            if !(residue.is_ascii_alphabetic() || residue == b'*') {
                return Err(AlignError::InvalidCodon(format!(
                    "{} -> {:?}",
                    String::from_utf8_lossy(codon),
                    residue as char
                )));
            }
            aa[idx] = residue.to_ascii_uppercase();
        }

        let covered = aa.iter().filter(|&&r| r != INVALID).count();
        if covered != 64 {
            return Err(AlignError::IncompleteCodonTable(covered));
        }
        Ok(CodonTable { aa })
    }

    /// Translates one codon. `None` when the window is not three valid nucleotides.
    #[inline]
    pub fn translate(&self, codon: &[u8]) -> Option<u8> {
        codon_index(codon).map(|idx| self.aa[idx])
    }

    /// Translates in frame 0, ignoring a trailing partial codon.
    /// Untranslatable codons become `X`.
    pub fn translate_seq(&self, dna: &[u8]) -> Vec<u8> {
        dna.chunks_exact(3)
            .map(|codon| self.translate(codon).unwrap_or(b'X'))
            .collect()
    }

    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.translate(codon) == Some(b'*')
    }

    /// Iterates `(codon, amino acid)` in NCBI order.
    pub fn iter(&self) -> impl Iterator<Item = ([u8; 3], u8)> + '_ {
        const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];
        self.aa.iter().enumerate().map(|(idx, &aa)| {
            (
                [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]],
                aa,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_translation() {
        let table = CodonTable::standard();
        assert_eq!(table.translate(b"ATG"), Some(b'M'));
        assert_eq!(table.translate(b"CTG"), Some(b'L'));
        assert_eq!(table.translate(b"GTG"), Some(b'V'));
        assert_eq!(table.translate(b"TGG"), Some(b'W'));
        assert_eq!(table.translate(b"TAA"), Some(b'*'));
        assert_eq!(table.translate(b"TAG"), Some(b'*'));
        assert_eq!(table.translate(b"TGA"), Some(b'*'));
        assert_eq!(table.iter().filter(|(_, aa)| *aa == b'*').count(), 3);
    }

    #[test]
    fn test_case_and_rna() {
        let table = CodonTable::standard();
        assert_eq!(table.translate(b"atg"), Some(b'M'));
        assert_eq!(table.translate(b"AuG"), Some(b'M'));
        assert_eq!(table.translate(b"UUU"), Some(b'F'));
    }

    #[test]
    fn test_translation_failure() {
        let table = CodonTable::standard();
        assert_eq!(table.translate(b"ANG"), None);
        assert_eq!(table.translate(b"AT"), None);
        assert_eq!(table.translate(b"ATGA"), None);
        assert_eq!(table.translate(b""), None);
        assert_eq!(table.translate(b"A-G"), None);
    }

    #[test]
    fn test_translate_seq() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_seq(b"CTGGTGATG"), b"LVM".to_vec());
        assert_eq!(table.translate_seq(b"ATGNNNTAAG"), b"MX*".to_vec());
        assert!(table.is_stop(b"TGA"));
        assert!(!table.is_stop(b"TGG"));
    }

    #[test]
    fn test_ncbi_ids() {
        let mito = CodonTable::from_ncbi_id(2).unwrap();
        assert_eq!(mito.translate(b"TGA"), Some(b'W'));
        assert_eq!(mito.translate(b"AGA"), Some(b'*'));
        assert_eq!(mito.translate(b"ATA"), Some(b'M'));

        let ciliate = CodonTable::from_ncbi_id(6).unwrap();
        assert_eq!(ciliate.translate(b"TAA"), Some(b'Q'));

        assert_eq!(CodonTable::from_ncbi_id(11).unwrap(), CodonTable::standard());
        assert_eq!(
            CodonTable::from_ncbi_id(42),
            Err(AlignError::UnknownGeneticCode(42))
        );
    }

    #[test]
    fn test_from_pairs() {
        let mut pairs: Vec<(Vec<u8>, u8)> = CodonTable::standard()
            .iter()
            .map(|(c, aa)| (c.to_vec(), aa))
            .collect();
        pairs.push((b"TGA".to_vec(), b'w'));
        let table = CodonTable::from_pairs(pairs.clone()).unwrap();
        assert_eq!(table.translate(b"TGA"), Some(b'W'));

        pairs.retain(|(c, _)| c.as_slice() != b"GGG");
        assert_eq!(
            CodonTable::from_pairs(pairs.clone()),
            Err(AlignError::IncompleteCodonTable(63))
        );

        pairs.push((b"GG".to_vec(), b'G'));
        assert!(matches!(
            CodonTable::from_pairs(pairs),
            Err(AlignError::InvalidCodon(_))
        ));
    }
}
