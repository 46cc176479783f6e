pub mod audio;
pub mod pipeline;
pub mod shared;
pub mod transcript;

#[cfg(test)]
pub(crate) mod test_support;
