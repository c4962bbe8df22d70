//! Archive extraction adapters.

mod zip_extractor;

pub use zip_extractor::ZipExtractor;
