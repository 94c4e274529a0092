pub mod domain;
pub mod payload;
