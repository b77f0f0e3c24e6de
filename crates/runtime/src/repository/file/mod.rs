mod meta;

pub use meta::{FileMetaRepository, SAVE_FILE};
