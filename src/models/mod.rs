pub mod dblp;
pub mod loaders;
pub mod record;

pub use dblp::{DblpHits, DblpResponse, DblpResult};
pub use loaders::load_author_file;
pub use record::PublicationRecord;
