//! Three-frame DNA-to-protein alignment.
//!
//! This module aligns a nucleotide sequence against a protein sequence with a
//! dynamic program that scores translated codons against residues, and that
//! lets the reading frame slip by one nucleotide in either direction at a cost.
//!
//! # Core Components
//!
//! * [`params`] - Penalty constants and traceback policy.
//! * [`action`] - The edit operations reported by an alignment.
//! * [`scoring`] - Codon translation and substitution lookup for one DP cell.
//! * [`matrix`] - Flat insertion/deletion/combined/action matrices.
//! * [`fill`] - Boundary rows, the general recurrence and the terminal cell.
//! * [`traceback`] - Reconstructs actions and aligned fragments.
//! * [`aligner`] - [`ThreeFrameAligner`], the entry point.
//!
//! # Algorithm Overview
//!
//! Rows count consumed nucleotides (`0..=N`), columns count consumed residues
//! (`0..=M`). For every cell:
//!
//! ```text
//! I[i][j] = max(I[i][j-1] - GEP, C[i][j-1] - GOP - GEP)
//! D[i][j] = max(D[i-3][j] - GEP, C[i-3][j] - GOP - GEP)
//! C[i][j] = max(I[i][j],
//!               D[i][j],
//!               C[i-4][j-1] + s(i, j) - FS,   // FRAMESHIFT_1, 4 nt
//!               C[i-3][j-1] + s(i, j),        // MATCH, 3 nt
//!               C[i-2][j-1] + s(i, j) - FS)   // FRAMESHIFT_3, 2 nt
//! ```
//!
//! where `s(i, j)` scores the codon `dna[i-3..i]` against `protein[j-1]`.
//! The first maximum in the order above wins.
//!
//! ```
//! use tfa::libs::three_frame::{Action, AlignParams, ThreeFrameAligner, Traceback};
//!
//! let aligner = ThreeFrameAligner::new(AlignParams::default(), Traceback::Global).unwrap();
//! let aln = aligner.align(b"CTGGTGATG", b"LVM");
//! assert_eq!(aln.score, 4 + 4 + 5);
//! assert_eq!(aln.actions, vec![Action::Match; 3]);
//! ```

pub mod action;
pub mod aligner;
pub mod fill;
pub mod matrix;
pub mod params;
pub mod scoring;
pub mod traceback;

pub use action::Action;
pub use aligner::{Alignment, ThreeFrameAligner};
pub use matrix::{DpMatrices, Tail};
pub use params::{AlignParams, Traceback};
pub use scoring::{Scorer, NEG_INF};
