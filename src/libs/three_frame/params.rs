use crate::libs::error::AlignError;

pub const GAP_OPEN_PENALTY: i32 = 3;
pub const GAP_EXTENSION_PENALTY: i32 = 2;
pub const FRAMESHIFT_PENALTY: i32 = 4;

/// Where the traceback starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traceback {
    Global,     // Whole DNA consumed, ends at (N, M)
    SemiGlobal, // Protein fully consumed, DNA suffix free
}

/// Penalties are non-negative and subtracted from the running score.
///
/// Opening an insertion or deletion costs `gap_open + gap_extend`, each further
/// residue or codon `gap_extend`. A frame slip costs `frameshift` on top of the
/// codon score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignParams {
    pub gap_open: i32,
    pub gap_extend: i32,
    pub frameshift: i32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            gap_open: GAP_OPEN_PENALTY,
            gap_extend: GAP_EXTENSION_PENALTY,
            frameshift: FRAMESHIFT_PENALTY,
        }
    }
}

impl AlignParams {
    pub fn new(gap_open: i32, gap_extend: i32, frameshift: i32) -> Self {
        Self {
            gap_open,
            gap_extend,
            frameshift,
        }
    }

    pub fn validate(&self) -> Result<(), AlignError> {
        for (name, value) in [
            ("gap_open", self.gap_open),
            ("gap_extend", self.gap_extend),
            ("frameshift", self.frameshift),
        ] {
            if value < 0 {
                return Err(AlignError::InvalidPenalty { name, value });
            }
        }
        Ok(())
    }
}
