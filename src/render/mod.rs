pub mod markup;

pub use markup::{format_reply, Block, Inline};
