pub mod handler;
pub mod reader;

#[cfg(test)]
pub(crate) mod stub;
