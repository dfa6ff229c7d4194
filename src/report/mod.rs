mod header;

pub use header::{clean_column_name, read_header, read_records};
