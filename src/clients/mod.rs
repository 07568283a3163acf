pub mod dblp_client;

pub use dblp_client::DblpClient;
