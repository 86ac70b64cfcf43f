use crate::libs::error::AlignError;
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use std::path::Path;

/// Residues covered by the built-in matrices.
const ALPHABET: &[u8] = b"ARNDCQEGHILKMFPSTWYVBZX*";

const UNSET: i32 = i32::MIN;

lazy_static! {
    static ref BLOSUM62: SubMatrix = SubMatrix::from_scores("blosum62", bio::scores::blosum62);
}

/// An amino-acid substitution matrix for scoring translated codons.
///
/// Stores scores for all pairs of bytes (256x256), though only residue letters
/// are ever set. Lookups are case-insensitive. Pairs that the matrix does not
/// define score `default` (0 unless changed with [`SubMatrix::with_default`]).
#[derive(Debug, Clone)]
pub struct SubMatrix {
    matrix: Vec<i32>,
    default: i32,
    name: String,
}

impl Default for SubMatrix {
    fn default() -> Self {
        Self::blosum62()
    }
}

impl SubMatrix {
    fn empty(name: &str) -> Self {
        SubMatrix {
            matrix: vec![UNSET; 256 * 256],
            default: 0,
            name: name.to_string(),
        }
    }

    fn from_scores(name: &str, scores: fn(u8, u8) -> i32) -> Self {
        let mut m = Self::empty(name);
        for &r in ALPHABET {
            for &c in ALPHABET {
                m.set(r, c, scores(r, c));
            }
        }
        m
    }

    /// Fill one pair for all case combinations.
    fn set(&mut self, r: u8, c: u8, score: i32) {
        let rows = [r.to_ascii_uppercase(), r.to_ascii_lowercase()];
        let cols = [c.to_ascii_uppercase(), c.to_ascii_lowercase()];
        for &r in &rows {
            for &c in &cols {
                self.matrix[(r as usize) * 256 + (c as usize)] = score;
            }
        }
    }

    /// BLOSUM62, the default matrix.
    pub fn blosum62() -> Self {
        BLOSUM62.clone()
    }

    /// Load from a preset name (blosum62, pam40, pam120, pam200, pam250) or a file.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "blosum62" => Ok(Self::blosum62()),
            "pam40" => Ok(Self::from_scores("pam40", bio::scores::pam40)),
            "pam120" => Ok(Self::from_scores("pam120", bio::scores::pam120)),
            "pam200" => Ok(Self::from_scores("pam200", bio::scores::pam200)),
            "pam250" => Ok(Self::from_scores("pam250", bio::scores::pam250)),
            _ => Self::from_file(name),
        }
    }

    /// Load a matrix file in NCBI/BLAST format, see [`SubMatrix::from_text`].
    pub fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Unknown substitution matrix: {}", path))?;
        let name = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path);
        Ok(Self::from_text(name, &text)?)
    }

    /// Score for pairs the matrix does not define.
    pub fn with_default(mut self, default: i32) -> Self {
        self.default = default;
        self
    }

    pub fn default_score(&self) -> i32 {
        self.default
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the substitution score for two residues.
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        let v = self.matrix[(a as usize) * 256 + (b as usize)];
        if v == UNSET {
            self.default
        } else {
            v
        }
    }

    /// Whether the matrix defines a score for this pair.
    pub fn contains(&self, a: u8, b: u8) -> bool {
        self.matrix[(a as usize) * 256 + (b as usize)] != UNSET
    }

    /// Parse a matrix in NCBI/BLAST text format.
    ///
    /// The text should contain a header line of residue letters (e.g. "A R N D ...")
    /// followed by one row per letter, each starting with that letter.
    /// Lines starting with '#' are comments.
    pub fn from_text(name: &str, text: &str) -> Result<Self, AlignError> {
        let mut m = Self::empty(name);
        let mut chars: Vec<u8> = Vec::new();
        let mut rows_read = 0;

        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();

            if chars.is_empty() {
                if !parts.iter().all(|s| is_residue_token(s)) {
                    return Err(AlignError::MatrixFormat {
                        message: "expected a header of residue letters".to_string(),
                        line: lineno + 1,
                    });
                }
                chars = parts.iter().map(|s| s.as_bytes()[0]).collect();
                continue;
            }

            // Rows may omit the leading letter; then they follow header order
            let (row_char, values) = if is_residue_token(parts[0]) {
                (parts[0].as_bytes()[0], &parts[1..])
            } else if rows_read < chars.len() {
                (chars[rows_read], &parts[..])
            } else {
                return Err(AlignError::MatrixFormat {
                    message: "more rows than header columns".to_string(),
                    line: lineno + 1,
                });
            };
            if values.len() != chars.len() {
                return Err(AlignError::MatrixFormat {
                    message: format!(
                        "row {} has {} values, header has {}",
                        row_char as char,
                        values.len(),
                        chars.len()
                    ),
                    line: lineno + 1,
                });
            }

            for (&col_char, value) in chars.iter().zip(values) {
                let score = value.parse::<i32>().map_err(|_| AlignError::MatrixFormat {
                    message: format!("invalid score {:?}", value),
                    line: lineno + 1,
                })?;
                m.set(row_char, col_char, score);
            }
            rows_read += 1;
        }

        if chars.is_empty() {
            return Err(AlignError::MatrixFormat {
                message: "no header line".to_string(),
                line: 0,
            });
        }
        Ok(m)
    }
}

fn is_residue_token(s: &str) -> bool {
    s.len() == 1 && {
        let b = s.as_bytes()[0];
        b.is_ascii_alphabetic() || b == b'*'
    }
}
