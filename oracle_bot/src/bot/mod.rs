pub mod answers;
pub mod handler;
pub mod handler_tree;
pub mod helpers;
