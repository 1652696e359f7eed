pub mod core;
pub mod tree;

pub use core::ParseError;
pub use core::ParseResult;
pub use core::Parser;
pub use tree::TreeBuilder;
