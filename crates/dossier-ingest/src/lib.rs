//! Grid I/O for record normalization: CSV tables, folder discovery and
//! layout configuration files.

pub mod csv_grid;
pub mod discovery;
pub mod error;
pub mod layout_file;
pub mod workbook_io;

pub use csv_grid::{read_csv_grid, write_csv_grid};
pub use discovery::{discover_tables, list_csv_files, sheet_name};
pub use error::IngestError;
pub use layout_file::{layout_to_json, load_layout, resolve_layout};
pub use workbook_io::{read_workbook, write_workbook};
