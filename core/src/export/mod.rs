pub mod csv;
pub mod kml;

pub use self::csv::export_csv;
pub use kml::export_kml;
