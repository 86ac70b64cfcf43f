use super::action::Action;
use super::fill::fill;
use super::matrix::DpMatrices;
use super::params::{AlignParams, Traceback};
use super::scoring::{Scorer, NEG_INF};
use super::traceback::{start_row, traceback};
use crate::libs::codon::CodonTable;
use crate::libs::error::AlignError;
use crate::libs::sub_matrix::SubMatrix;
use itertools::Itertools;
use log::{debug, log_enabled, trace, Level};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;

/// Result of aligning one DNA sequence against one protein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// [`NEG_INF`] when no alignment exists
    pub score: i32,
    pub actions: Vec<Action>,
    /// `(dna fragment, protein fragment)` per action
    pub pairs: Vec<(String, String)>,
    /// DNA row where traceback began, `N` for global alignments
    pub dna_end: usize,
}

impl Alignment {
    /// Whether any path reached the traceback start.
    pub fn is_aligned(&self) -> bool {
        self.score > NEG_INF
    }

    /// Number of records per action.
    pub fn counts(&self) -> HashMap<Action, usize> {
        self.actions.iter().copied().counts()
    }

    /// The DNA, marker and protein lines of the printed trace.
    pub fn trace_lines(&self) -> [String; 3] {
        let mut lines: [Vec<String>; 3] = Default::default();
        for (action, (dna, protein)) in self.actions.iter().zip(&self.pairs) {
            let width = dna.len().max(protein.len());
            lines[0].push(format!("{:<width$}", dna, width = width));
            lines[1].push(action.symbol().to_string().repeat(width));
            lines[2].push(format!("{:<width$}", protein, width = width));
        }
        lines.map(|l| l.iter().join(" ").trim_end().to_string())
    }
}

impl fmt::Display for Alignment {
    /// Three-line trace: DNA fragments, markers, protein fragments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [dna, marks, protein] = self.trace_lines();
        write!(f, "{}\n{}\n{}", dna, marks, protein)
    }
}

/// Three-frame aligner of nucleotide sequences against protein sequences.
///
/// Holds the penalties, the traceback policy, the genetic code and the
/// substitution matrix. Alignment itself is read-only, so one aligner can be
/// shared across threads.
///
/// # Example
///
/// ```
/// use tfa::libs::three_frame::{Action, AlignParams, ThreeFrameAligner, Traceback};
///
/// let aligner = ThreeFrameAligner::new(AlignParams::default(), Traceback::Global).unwrap();
/// // One extra A after ATGAAA
/// let aln = aligner.align(b"ATGAAAATGGGTAACCTTT", b"MKWVTF");
/// assert_eq!(aln.score, 32);
/// assert_eq!(aln.actions[2], Action::Frameshift1);
/// assert_eq!(aln.pairs[2], ("ATGG".to_string(), "W".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct ThreeFrameAligner {
    params: AlignParams,
    mode: Traceback,
    codons: CodonTable,
    matrix: SubMatrix,
}

impl ThreeFrameAligner {
    /// Standard genetic code and BLOSUM62.
    pub fn new(params: AlignParams, mode: Traceback) -> Result<Self, AlignError> {
        params.validate()?;
        Ok(Self {
            params,
            mode,
            codons: CodonTable::standard(),
            matrix: SubMatrix::blosum62(),
        })
    }

    pub fn with_codon_table(mut self, codons: CodonTable) -> Self {
        self.codons = codons;
        self
    }

    pub fn with_sub_matrix(mut self, matrix: SubMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn params(&self) -> &AlignParams {
        &self.params
    }

    pub fn mode(&self) -> Traceback {
        self.mode
    }

    pub fn codon_table(&self) -> &CodonTable {
        &self.codons
    }

    pub fn sub_matrix(&self) -> &SubMatrix {
        &self.matrix
    }

    fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.codons, &self.matrix)
    }

    /// Fill the DP matrices without tracing back.
    pub fn fill(&self, dna: &[u8], protein: &[u8]) -> DpMatrices {
        let mut mx = DpMatrices::new();
        fill(&mut mx, &self.scorer(), &self.params, dna, protein);
        mx
    }

    pub fn align(&self, dna: &[u8], protein: &[u8]) -> Alignment {
        let mut mx = DpMatrices::new();
        self.align_with(&mut mx, dna, protein)
    }

    /// Align reusing the buffers of `mx`. Afterwards `mx` holds this alignment's
    /// matrices.
    pub fn align_with(&self, mx: &mut DpMatrices, dna: &[u8], protein: &[u8]) -> Alignment {
        debug!(
            "Aligning {} nt against {} aa ({:?}, {:?})",
            dna.len(),
            protein.len(),
            self.mode,
            self.params
        );

        let scorer = self.scorer();
        fill(mx, &scorer, &self.params, dna, protein);
        if log_enabled!(Level::Trace) {
            trace!("DP matrices:\n{}", mx);
        }

        let start = start_row(mx, self.mode);
        let score = mx.combined(start, protein.len());
        if score <= NEG_INF {
            debug!("No alignment reaches row {}", start);
            return Alignment {
                score: NEG_INF,
                actions: vec![],
                pairs: vec![],
                dna_end: start,
            };
        }

        let walk = traceback(mx, &scorer, dna, protein, start);
        debug!(
            "Score {} ending at row {} with {} records",
            score,
            start,
            walk.actions.len()
        );

        Alignment {
            score,
            actions: walk.actions,
            pairs: walk.pairs,
            dna_end: start,
        }
    }

    /// Align many pairs in parallel. Output order follows input order.
    pub fn align_batch<D, P>(&self, pairs: &[(D, P)]) -> Vec<Alignment>
    where
        D: AsRef<[u8]> + Sync,
        P: AsRef<[u8]> + Sync,
    {
        pairs
            .par_iter()
            .map_init(DpMatrices::new, |mx, (dna, protein)| {
                self.align_with(mx, dna.as_ref(), protein.as_ref())
            })
            .collect()
    }
}
