//! Edges of the program: where orders come in and links go out.

pub mod csv;
pub mod link_writer;
