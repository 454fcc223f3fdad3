pub mod error;
pub mod fetch;
pub mod parse;
pub mod request;
