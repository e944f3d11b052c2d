pub mod grid;
pub mod operator_search;
pub mod parse;
