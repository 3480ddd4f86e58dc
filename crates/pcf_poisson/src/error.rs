//! Error types and result alias for the crate.
//!
//! Generation itself cannot fail: a candidate that is rejected `max_tries` times
//! simply retires its parent point. The only error is a configuration that is
//! rejected before any sampler state is built.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_includes_reason() {
        let err = Error::InvalidConfig("grid_size must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: grid_size must be > 0"
        );
    }
}
