//! Command handlers -- one module per subcommand

pub mod convert;
pub mod parse;
pub mod validate;
