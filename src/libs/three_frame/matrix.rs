use super::action::Action;
use super::scoring::NEG_INF;
use itertools::Itertools;
use std::fmt;

/// Trailing nucleotides (1 or 2) that the terminal cell deletes out of frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tail {
    /// 0 when the terminal cell kept its ordinary value
    pub len: usize,
    /// Whether the fragment continues a codon deletion run ending at row `N - len`
    pub from_deletion: bool,
}

/// Dynamic programming state of one three-frame alignment.
///
/// Four `(N + 1) x (M + 1)` matrices stored row-major in flat vectors:
/// insertion (`I`), deletion (`D`), combined (`C`) and the action that produced
/// each `C` cell (`T`). The extension flags record whether an `I`/`D` cell
/// continued a run rather than opened one, which is what traceback needs to
/// recover whole gap runs.
///
/// A `DpMatrices` can be reused across alignments; buffers only grow.
#[derive(Debug, Clone, Default)]
pub struct DpMatrices {
    rows: usize,
    cols: usize,
    ins: Vec<i32>,
    del: Vec<i32>,
    comb: Vec<i32>,
    action: Vec<Action>,
    ins_ext: Vec<bool>,
    del_ext: Vec<bool>,
    tail: Tail,
}

impl DpMatrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size for `n` nucleotides and `m` residues and reset every cell.
    pub(crate) fn reset(&mut self, n: usize, m: usize) {
        self.rows = n + 1;
        self.cols = m + 1;
        let size = self.rows * self.cols;

        for v in [&mut self.ins, &mut self.del, &mut self.comb] {
            v.clear();
            v.resize(size, NEG_INF);
        }
        self.action.clear();
        self.action.resize(size, Action::None);
        for v in [&mut self.ins_ext, &mut self.del_ext] {
            v.clear();
            v.resize(size, false);
        }
        self.tail = Tail::default();
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Number of rows, `N + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `M + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn insertion(&self, i: usize, j: usize) -> i32 {
        self.ins[self.idx(i, j)]
    }

    pub fn deletion(&self, i: usize, j: usize) -> i32 {
        self.del[self.idx(i, j)]
    }

    pub fn combined(&self, i: usize, j: usize) -> i32 {
        self.comb[self.idx(i, j)]
    }

    pub fn action(&self, i: usize, j: usize) -> Action {
        self.action[self.idx(i, j)]
    }

    pub fn insertion_extended(&self, i: usize, j: usize) -> bool {
        self.ins_ext[self.idx(i, j)]
    }

    pub fn deletion_extended(&self, i: usize, j: usize) -> bool {
        self.del_ext[self.idx(i, j)]
    }

    pub fn tail(&self) -> Tail {
        self.tail
    }

    pub(crate) fn set_insertion(&mut self, i: usize, j: usize, score: i32, extended: bool) {
        let k = self.idx(i, j);
        self.ins[k] = score;
        self.ins_ext[k] = extended;
    }

    pub(crate) fn set_deletion(&mut self, i: usize, j: usize, score: i32, extended: bool) {
        let k = self.idx(i, j);
        self.del[k] = score;
        self.del_ext[k] = extended;
    }

    /// `T` is forced to `None` when the score is unreachable.
    pub(crate) fn set_combined(&mut self, i: usize, j: usize, score: i32, action: Action) {
        let k = self.idx(i, j);
        self.comb[k] = score;
        self.action[k] = if score > NEG_INF {
            action
        } else {
            Action::None
        };
    }

    pub(crate) fn set_tail(&mut self, tail: Tail) {
        self.tail = tail;
    }
}

fn fmt_score(v: i32) -> String {
    if v <= NEG_INF {
        "-inf".to_string()
    } else {
        v.to_string()
    }
}

impl fmt::Display for DpMatrices {
    /// Dumps `I`, `D`, `C` and `T` one row per line, for trace logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, v) in [("I", &self.ins), ("D", &self.del), ("C", &self.comb)] {
            writeln!(f, "{}:", label)?;
            for row in v.chunks(self.cols.max(1)).take(self.rows) {
                writeln!(f, "  {}", row.iter().map(|&x| format!("{:>5}", fmt_score(x))).join(" "))?;
            }
        }
        writeln!(f, "T:")?;
        for row in self.action.chunks(self.cols.max(1)).take(self.rows) {
            writeln!(f, "  {}", row.iter().map(|a| format!("{:>12}", a.name())).join(" "))?;
        }
        if self.tail.len > 0 {
            writeln!(f, "tail: {:?}", self.tail)?;
        }
        Ok(())
    }
}
