pub mod config;
pub mod lexer;
pub mod node;
pub mod token;
pub mod tree;

pub use config::ParserConfig;
pub use lexer::Lexer;
pub use node::Node;
pub use token::{StartTag, Token};
pub use tree::TreeBuilder;
