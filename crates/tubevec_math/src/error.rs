use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("vector is not 3 dimensional")]
    NotThreeDimensional,

    #[error("the two vectors provided aren't the same dimensional size")]
    NotSameDimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            VectorError::NotThreeDimensional.to_string(),
            "vector is not 3 dimensional"
        );
        assert_eq!(
            VectorError::NotSameDimensions.to_string(),
            "the two vectors provided aren't the same dimensional size"
        );
    }

    #[test]
    fn is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(VectorError::NotSameDimensions);
        assert!(error.source().is_none());
    }
}
