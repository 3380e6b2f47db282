pub mod parser_state;

pub use parser_state::ParserState;
