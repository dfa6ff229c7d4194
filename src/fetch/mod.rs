mod downloader;

pub use downloader::{report_filename, CsvFetcher};
