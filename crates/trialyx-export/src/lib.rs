//! trialyx-export — PDF and CSV byte-stream formatting collaborators.
//! Pure formatting over already-extracted data; no fetching, no filtering.

pub mod csv_export;
pub mod pdf;

pub use csv_export::trials_csv;
pub use pdf::{pico_pdf, trials_export_pdf};
