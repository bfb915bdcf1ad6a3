pub mod dto;
pub mod helpers;
