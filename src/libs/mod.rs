pub mod codon;
pub mod error;
pub mod sub_matrix;
pub mod three_frame;

pub use codon::CodonTable;
pub use error::AlignError;
pub use sub_matrix::SubMatrix;
