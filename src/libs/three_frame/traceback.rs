use super::action::Action;
use super::matrix::DpMatrices;
use super::params::Traceback;
use super::scoring::Scorer;

/// Which matrix the walk is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Combined,
    Insertion,
    Deletion,
}

/// Actions and aligned `(dna, protein)` fragments, in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    pub actions: Vec<Action>,
    pub pairs: Vec<(String, String)>,
}

impl Walk {
    fn push(&mut self, action: Action, dna: &[u8], protein: &[u8]) {
        self.actions.push(action);
        self.pairs.push((
            String::from_utf8_lossy(dna).into_owned(),
            String::from_utf8_lossy(protein).into_owned(),
        ));
    }
}

/// Row in column `M` where traceback begins.
///
/// Global alignments end at `N`. Semi-global ones take the best row, and the
/// largest row among equals.
pub fn start_row(mx: &DpMatrices, mode: Traceback) -> usize {
    let n = mx.rows().saturating_sub(1);
    let m = mx.cols().saturating_sub(1);
    match mode {
        Traceback::Global => n,
        Traceback::SemiGlobal => (0..=n)
            .max_by_key(|&i| (mx.combined(i, m), i))
            .unwrap_or(n),
    }
}

/// Walk back from `(start, M)` to `(0, 0)`.
///
/// Gap runs are followed through the extension flags and emitted as one record
/// each. A `Match` step whose codon does not translate to its residue is
/// reported as `Mismatch`. The walk stops early at a cell with no action.
pub fn traceback(
    mx: &DpMatrices,
    scorer: &Scorer,
    dna: &[u8],
    protein: &[u8],
    start: usize,
) -> Walk {
    let mut walk = Walk::default();
    let mut i = start;
    let mut j = protein.len();
    let mut state = State::Combined;
    // Trailing nucleotides that join the next deletion run
    let mut pending: &[u8] = &[];

    let tail = mx.tail();
    if i == dna.len() && tail.len > 0 {
        let frag = &dna[i - tail.len..i];
        i -= tail.len;
        // A deletion run ending where the tail starts absorbs it
        if tail.from_deletion || mx.action(i, j) == Action::Delete {
            pending = frag;
            state = State::Deletion;
        } else {
            walk.push(Action::Delete, frag, b"-");
        }
    }

    while i > 0 || j > 0 {
        match state {
            State::Combined => match mx.action(i, j) {
                Action::Match | Action::Mismatch => {
                    let codon = &dna[i - 3..i];
                    let residue = protein[j - 1];
                    let action = match scorer.translate_at(dna, i) {
                        Some(aa) if aa.eq_ignore_ascii_case(&residue) => Action::Match,
                        _ => Action::Mismatch,
                    };
                    walk.push(action, codon, &[residue]);
                    i -= 3;
                    j -= 1;
                }
                Action::Frameshift1 => {
                    walk.push(Action::Frameshift1, &dna[i - 4..i], &protein[j - 1..j]);
                    i -= 4;
                    j -= 1;
                }
                Action::Frameshift3 => {
                    walk.push(Action::Frameshift3, &dna[i - 2..i], &protein[j - 1..j]);
                    i -= 2;
                    j -= 1;
                }
                Action::Insert => state = State::Insertion,
                Action::Delete => state = State::Deletion,
                Action::None => break,
            },
            State::Insertion => {
                let end = j;
                loop {
                    let extended = mx.insertion_extended(i, j);
                    j -= 1;
                    if !extended || j == 0 {
                        break;
                    }
                }
                let residues = &protein[j..end];
                walk.push(Action::Insert, "---".repeat(residues.len()).as_bytes(), residues);
                state = State::Combined;
            }
            State::Deletion => {
                if i < 3 {
                    break;
                }
                let end = i;
                loop {
                    let extended = mx.deletion_extended(i, j);
                    i -= 3;
                    if !extended || i < 3 {
                        break;
                    }
                }
                let mut frag = dna[i..end].to_vec();
                frag.extend_from_slice(pending);
                pending = &[];
                let marks = "-".repeat(frag.len().div_ceil(3));
                walk.push(Action::Delete, &frag, marks.as_bytes());
                state = State::Combined;
            }
        }
    }

    walk.actions.reverse();
    walk.pairs.reverse();
    walk
}
