//! Document storage layer.
//!
//! Documents are plain files in one flat directory: the filename is the
//! document's identity and the file bytes are its content. There are no
//! subdirectories and no metadata sidecars.

pub mod file_store;

pub use file_store::{is_valid_name, FileStore};
