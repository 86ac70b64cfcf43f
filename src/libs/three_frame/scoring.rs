use crate::libs::codon::CodonTable;
use crate::libs::sub_matrix::SubMatrix;

/// Stands in for minus infinity. Far below any reachable score, and twice it
/// still fits in an `i32`.
pub const NEG_INF: i32 = -1_000_000_000;

/// Anything below this has passed through `NEG_INF` and is reset to it.
#[inline]
pub(crate) fn clamp(v: i32) -> i32 {
    if v < NEG_INF / 2 {
        NEG_INF
    } else {
        v
    }
}

/// Scores the codon that ends at a DP row against one protein residue.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    codons: &'a CodonTable,
    matrix: &'a SubMatrix,
}

impl<'a> Scorer<'a> {
    pub fn new(codons: &'a CodonTable, matrix: &'a SubMatrix) -> Self {
        Self { codons, matrix }
    }

    /// Amino acid of `dna[i-3..i]`, `None` for `i < 3` or an untranslatable window.
    #[inline]
    pub fn translate_at(&self, dna: &[u8], i: usize) -> Option<u8> {
        if i < 3 || i > dna.len() {
            return None;
        }
        self.codons.translate(&dna[i - 3..i])
    }

    /// `substitution[codon(i)][protein[j-1]]`, or [`NEG_INF`] when the codon
    /// cannot be translated.
    #[inline]
    pub fn score(&self, dna: &[u8], protein: &[u8], i: usize, j: usize) -> i32 {
        match self.translate_at(dna, i) {
            Some(aa) if j >= 1 => self.matrix.score(aa, protein[j - 1]),
            _ => NEG_INF,
        }
    }
}
