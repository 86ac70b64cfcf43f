//! Filling the three-frame DP matrices.
//!
//! Rows `0..=3` and column 0 are seeded by [`init_boundary`], rows `4..=N` by
//! the general recurrence, and the terminal cell `(N, M)` is revisited last so
//! that one or two trailing nucleotides can be dropped out of frame.

use super::action::Action;
use super::matrix::{DpMatrices, Tail};
use super::params::AlignParams;
use super::scoring::{clamp, Scorer, NEG_INF};

/// Run every phase of the fill. `mx` is resized for the inputs first.
pub fn fill(
    mx: &mut DpMatrices,
    scorer: &Scorer,
    params: &AlignParams,
    dna: &[u8],
    protein: &[u8],
) {
    mx.reset(dna.len(), protein.len());
    init_boundary(mx, scorer, params, dna, protein);
    fill_general(mx, scorer, params, dna, protein);
    close_terminal(mx, params, dna.len(), protein.len());
}

/// First maximum wins, so candidate order is the tie-break order.
fn pick<T: Copy + Default>(cands: &[(i32, T)]) -> (i32, T) {
    let mut best = (NEG_INF, T::default());
    for &(v, t) in cands {
        let v = clamp(v);
        if v > best.0 {
            best = (v, t);
        }
    }
    best
}

/// `I[i][j]` from the cell to its left. Extension wins ties.
fn update_insertion(mx: &mut DpMatrices, params: &AlignParams, i: usize, j: usize) {
    let ext = clamp(mx.insertion(i, j - 1).saturating_sub(params.gap_extend));
    let open = clamp(
        mx.combined(i, j - 1)
            .saturating_sub(params.gap_open)
            .saturating_sub(params.gap_extend),
    );
    mx.set_insertion(i, j, ext.max(open), ext >= open);
}

/// `D[i][j]` from one codon up. Extension wins ties.
fn update_deletion(mx: &mut DpMatrices, params: &AlignParams, i: usize, j: usize) {
    let ext = clamp(mx.deletion(i - 3, j).saturating_sub(params.gap_extend));
    let open = clamp(
        mx.combined(i - 3, j)
            .saturating_sub(params.gap_open)
            .saturating_sub(params.gap_extend),
    );
    mx.set_deletion(i, j, ext.max(open), ext >= open);
}

/// Column 0 (codon deletions only) and rows `0..=3`.
///
/// Rows 1 and 2 cannot hold a codon, so they only offer insertions. Row 3 is
/// the first row where a codon, and so a deletion or a match, is possible.
pub fn init_boundary(
    mx: &mut DpMatrices,
    scorer: &Scorer,
    params: &AlignParams,
    dna: &[u8],
    protein: &[u8],
) {
    let n = dna.len();
    let m = protein.len();

    mx.set_combined(0, 0, 0, Action::None);
    for i in 1..=n {
        if i >= 3 {
            update_deletion(mx, params, i, 0);
        }
        mx.set_combined(i, 0, mx.deletion(i, 0), Action::Delete);
    }

    for i in 0..=n.min(3) {
        for j in 1..=m {
            update_insertion(mx, params, i, j);
            let (score, action) = if i < 3 {
                pick(&[(mx.insertion(i, j), Action::Insert)])
            } else {
                update_deletion(mx, params, i, j);
                let s = scorer.score(dna, protein, i, j);
                pick(&[
                    (mx.insertion(i, j), Action::Insert),
                    (mx.deletion(i, j), Action::Delete),
                    (mx.combined(0, j - 1).saturating_add(s), Action::Match),
                ])
            };
            mx.set_combined(i, j, score, action);
        }
    }
}

/// Rows `4..=N`.
pub fn fill_general(
    mx: &mut DpMatrices,
    scorer: &Scorer,
    params: &AlignParams,
    dna: &[u8],
    protein: &[u8],
) {
    let fs = params.frameshift;

    for i in 4..=dna.len() {
        for j in 1..=protein.len() {
            update_insertion(mx, params, i, j);
            update_deletion(mx, params, i, j);

            let s = scorer.score(dna, protein, i, j);
            let (score, action) = pick(&[
                (mx.insertion(i, j), Action::Insert),
                (mx.deletion(i, j), Action::Delete),
                (
                    mx.combined(i - 4, j - 1).saturating_add(s).saturating_sub(fs),
                    Action::Frameshift1,
                ),
                (mx.combined(i - 3, j - 1).saturating_add(s), Action::Match),
                (
                    mx.combined(i - 2, j - 1).saturating_add(s).saturating_sub(fs),
                    Action::Frameshift3,
                ),
            ]);
            mx.set_combined(i, j, score, action);
        }
    }
}

/// Let `(N, M)` drop one or two trailing nucleotides at a frameshift cost.
///
/// The ordinary value is kept on ties. A winning tail marks the cell as a
/// deletion and is remembered in [`DpMatrices::tail`] for traceback.
pub fn close_terminal(mx: &mut DpMatrices, params: &AlignParams, n: usize, m: usize) {
    if n == 0 {
        return;
    }
    let fs = params.frameshift;
    let gap = params.gap_open.saturating_add(params.gap_extend);

    let tail = |len, from_deletion| Tail { len, from_deletion };
    let (two_open, two_extend) = if n >= 2 {
        (
            mx.combined(n - 2, m).saturating_sub(gap).saturating_sub(fs),
            mx.deletion(n - 2, m)
                .saturating_sub(fs)
                .saturating_sub(params.gap_extend),
        )
    } else {
        (NEG_INF, NEG_INF)
    };
    let cands = [
        (mx.combined(n, m), Tail::default()),
        (mx.combined(n - 1, m).saturating_sub(fs), tail(1, false)),
        (two_open, tail(2, false)),
        (two_extend, tail(2, true)),
    ];

    let (score, tail) = pick(&cands);
    if tail.len > 0 {
        mx.set_combined(n, m, score, Action::Delete);
        mx.set_tail(tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::codon::CodonTable;
    use crate::libs::sub_matrix::SubMatrix;

    fn filled(dna: &[u8], protein: &[u8], params: AlignParams) -> DpMatrices {
        let codons = CodonTable::standard();
        let matrix = SubMatrix::blosum62();
        let scorer = Scorer::new(&codons, &matrix);
        let mut mx = DpMatrices::new();
        fill(&mut mx, &scorer, &params, dna, protein);
        mx
    }

    #[test]
    fn test_boundary() {
        let mx = filled(b"ATGAAA", b"MK", AlignParams::default());

        assert_eq!(mx.combined(0, 0), 0);
        assert_eq!(mx.action(0, 0), Action::None);
        // Column 0: whole codons only
        assert_eq!(mx.combined(1, 0), NEG_INF);
        assert_eq!(mx.combined(2, 0), NEG_INF);
        assert_eq!(mx.combined(3, 0), -5);
        assert_eq!(mx.action(3, 0), Action::Delete);
        assert_eq!(mx.combined(6, 0), -7);
        assert!(mx.deletion_extended(6, 0));
        // Row 0: insertions only
        assert_eq!(mx.combined(0, 1), -5);
        assert_eq!(mx.combined(0, 2), -7);
        assert_eq!(mx.action(0, 2), Action::Insert);
        assert!(mx.insertion_extended(0, 2));
        assert!(!mx.insertion_extended(0, 1));
        // Rows 1 and 2 are unreachable
        assert_eq!(mx.combined(1, 1), NEG_INF);
        assert_eq!(mx.action(2, 2), Action::None);
        // Row 3: ATG against M
        assert_eq!(mx.combined(3, 1), 5);
        assert_eq!(mx.action(3, 1), Action::Match);
    }

    #[test]
    fn test_general() {
        let mx = filled(b"ATGAAA", b"MK", AlignParams::default());
        assert_eq!(mx.combined(6, 2), 10);
        assert_eq!(mx.action(6, 2), Action::Match);
        assert_eq!(mx.tail(), Tail::default());
    }

    #[test]
    fn test_tie_insert_over_delete() {
        let mx = filled(b"ATG", b"W", AlignParams::new(0, 0, 0));
        assert_eq!(mx.insertion(3, 1), 0);
        assert_eq!(mx.deletion(3, 1), 0);
        assert_eq!(mx.combined(3, 1), 0);
        assert_eq!(mx.action(3, 1), Action::Insert);
    }

    #[test]
    fn test_tie_order() {
        let mx = filled(b"ATGCATGAAA", b"MHK", AlignParams::new(3, 2, 0));
        assert_eq!(mx.action(10, 2), Action::Frameshift1); // over MATCH
        assert_eq!(mx.action(8, 1), Action::Delete); // over FRAMESHIFT_3

        let mx = filled(b"CCCCACACA", b"PPT", AlignParams::new(3, 2, 0));
        assert_eq!(mx.action(6, 2), Action::Match); // over FRAMESHIFT_3
        assert_eq!(mx.action(6, 3), Action::Insert); // over MATCH and FRAMESHIFT_3
        assert_eq!(mx.action(7, 2), Action::Frameshift1); // over MATCH
        assert_eq!(mx.action(3, 2), Action::Insert); // over MATCH

        let mx = filled(b"ATGAAATGG", b"MKW", AlignParams::new(0, 0, 0));
        assert_eq!(mx.action(4, 2), Action::Insert); // over FRAMESHIFT_1
    }

    #[test]
    fn test_terminal_tail() {
        let mx = filled(b"ATGAAATGGGTAACCTTTG", b"MKWVTF", AlignParams::default());
        assert_eq!(
            mx.tail(),
            Tail {
                len: 1,
                from_deletion: false
            }
        );
        assert_eq!(mx.combined(19, 6), 32);
        assert_eq!(mx.action(19, 6), Action::Delete);

        let mx = filled(b"ATGAAATGGGTAACCTTTGGGCCCAA", b"MKWVTF", AlignParams::default());
        assert_eq!(
            mx.tail(),
            Tail {
                len: 2,
                from_deletion: true
            }
        );
        assert_eq!(mx.combined(26, 6), 23);
    }

    #[test]
    fn test_terminal_ties() {
        // Keep beats a one-nucleotide tail of equal score
        let mx = filled(b"CGAA", b"W", AlignParams::new(3, 2, 2));
        assert_eq!(mx.combined(3, 1) - 2, -5);
        assert_eq!(mx.combined(4, 1), -5);
        assert_eq!(mx.action(4, 1), Action::Frameshift1);
        assert_eq!(mx.tail(), Tail::default());

        // With no gap opening, opening and extending a two-nucleotide tail tie
        let mx = filled(b"ATGAAATGGGTAACCTTTGGGCCCAA", b"MKWVTF", AlignParams::new(0, 2, 4));
        assert_eq!(mx.combined(24, 6), mx.deletion(24, 6));
        assert_eq!(
            mx.tail(),
            Tail {
                len: 2,
                from_deletion: false
            }
        );
        assert_eq!(mx.combined(26, 6), 26);
    }

    #[test]
    fn test_terminal_kept() {
        let mx = filled(b"ATGAAA", b"MK", AlignParams::default());
        assert_eq!(mx.combined(6, 2), 10);
        assert_eq!(mx.tail().len, 0);

        // Empty DNA leaves the terminal cell alone
        let mx = filled(b"", b"MK", AlignParams::default());
        assert_eq!(mx.combined(0, 2), -7);
        assert_eq!(mx.tail().len, 0);
    }
}
