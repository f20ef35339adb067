pub mod archive;
pub mod sources;
