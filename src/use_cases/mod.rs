pub mod normalizer;

#[cfg(test)]
pub(crate) mod test_support;
