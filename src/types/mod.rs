pub mod errors;
pub mod pack;
