pub mod author_ctx;
pub mod author_flow;

pub use author_ctx::AuthorCtx;
pub use author_flow::{AuthorFlow, LookupOutcome};
