use crate::domain::BoardError;

/// Static configuration for a board session.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Optional RNG seed for reproducible random boards.
    pub rng_seed: Option<u64>,
    /// Probability that a cell starts live when the board is randomized.
    pub random_density: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 32,
            rng_seed: None,
            random_density: 0.3,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions { rows: self.rows, cols: self.cols });
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(BoardError::InvalidDensity(self.random_density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols), (20, 32));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_board() {
        let config = BoardConfig { cols: 0, ..BoardConfig::default() };
        assert_eq!(
            config.validate(),
            Err(BoardError::InvalidDimensions { rows: 20, cols: 0 })
        );
    }

    #[test]
    fn test_rejects_bad_density() {
        let config = BoardConfig { random_density: -0.1, ..BoardConfig::default() };
        assert!(matches!(config.validate(), Err(BoardError::InvalidDensity(_))));
    }
}
