use std::fmt;

/// One edit operation of a three-frame alignment.
///
/// The DP matrices only ever record `Match`, `Frameshift1`, `Frameshift3`,
/// `Insert` and `Delete`. `Mismatch` is a relabelling applied during traceback
/// when the codon under a `Match` step does not translate to the residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    Match,
    Mismatch,
    /// 4 nucleotides for one residue, the first is skipped
    Frameshift1,
    /// 2 nucleotides for one residue, the codon re-reads the previous nucleotide
    Frameshift3,
    /// Residues with no DNA (gap in DNA)
    Insert,
    /// Codons with no residue (gap in protein)
    Delete,
    #[default]
    None,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Match => "MATCH",
            Action::Mismatch => "MISMATCH",
            Action::Frameshift1 => "FRAMESHIFT_1",
            Action::Frameshift3 => "FRAMESHIFT_3",
            Action::Insert => "INSERT",
            Action::Delete => "DELETE",
            Action::None => "NONE",
        }
    }

    pub fn is_frameshift(&self) -> bool {
        matches!(self, Action::Frameshift1 | Action::Frameshift3)
    }

    pub fn is_indel(&self) -> bool {
        matches!(self, Action::Insert | Action::Delete)
    }

    /// Single character for the middle line of a rendered alignment.
    pub(crate) fn symbol(&self) -> char {
        match self {
            Action::Match => '|',
            Action::Mismatch => '.',
            Action::Frameshift1 | Action::Frameshift3 => '!',
            _ => ' ',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
