use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A penalty constant that is negative
    InvalidPenalty {
        /// Which penalty (gap_open, gap_extend, frameshift)
        name: &'static str,
        value: i32,
    },
    /// A codon table entry that is not three nucleotides or maps to a non-residue
    InvalidCodon(String),
    /// A codon table that does not cover all 64 codons
    IncompleteCodonTable(usize),
    /// An NCBI genetic code id without a built-in table
    UnknownGeneticCode(u8),
    /// Error while reading substitution matrix text
    MatrixFormat {
        /// A human-readable message explaining the error
        message: String,
        /// The line number (1-based)
        line: usize,
    },
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::InvalidPenalty { name, value } => {
                write!(f, "Penalty {} must be non-negative, got {}", name, value)
            }
            AlignError::InvalidCodon(msg) => write!(f, "Invalid codon table entry: {}", msg),
            AlignError::IncompleteCodonTable(n) => {
                write!(f, "Codon table covers {} of 64 codons", n)
            }
            AlignError::UnknownGeneticCode(id) => write!(f, "Unknown genetic code: {}", id),
            AlignError::MatrixFormat { message, line } => {
                write!(f, "Matrix format error at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for AlignError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = AlignError::InvalidPenalty {
            name: "gap_open",
            value: -3,
        };
        assert_eq!(e.to_string(), "Penalty gap_open must be non-negative, got -3");

        let e = AlignError::MatrixFormat {
            message: "bad row".to_string(),
            line: 7,
        };
        assert_eq!(e.to_string(), "Matrix format error at line 7: bad row");
    }

    #[test]
    fn test_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(AlignError::UnknownGeneticCode(99))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "Unknown genetic code: 99");
    }
}
