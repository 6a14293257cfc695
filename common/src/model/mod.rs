pub mod api;
pub mod export;
pub mod resource;
pub mod tree;
