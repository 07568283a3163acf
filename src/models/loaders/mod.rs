pub mod author_loader;

pub use author_loader::load_author_file;
