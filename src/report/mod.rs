pub mod records;
pub mod writer;

pub use records::Report;
