pub mod edge_list;

pub use crate::picture::Picture;
