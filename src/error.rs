use std::path::PathBuf;

/// Errors produced when a token cannot be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors produced by the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no valid moves available")]
    NoValidMoves,
}

/// Errors produced by the match driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is the computer's turn")]
    NotYourTurn,

    #[error("it is not the computer's turn")]
    NotAiTurn,

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("move selection failed: {0}")]
    Select(#[from] SelectError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
    }

    #[test]
    fn test_session_error_wraps_move_error() {
        let err: SessionError = MoveError::GameOver.into();
        assert_eq!(err.to_string(), "illegal move: the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.hard_depth must be in 1..=10".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.hard_depth must be in 1..=10"
        );
    }
}
