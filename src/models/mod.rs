pub mod date_range;
pub mod records;

pub use date_range::*;
pub use records::*;
