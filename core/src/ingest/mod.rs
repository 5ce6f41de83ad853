pub mod csv;
pub mod memory;

pub use self::csv::CsvPointReader;
pub use memory::MemorySource;
