/// Shell configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// FEN the shell seeds its session with.
    pub start_fen: String,
    /// Depth used when `perft` is given no argument.
    pub perft_depth: u32,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        AppConfig {
            start_fen: std::env::var("CHESS_START_FEN")
                .unwrap_or_else(|_| crate::engine::START_FEN.to_string()),
            perft_depth: std::env::var("CHESS_PERFT_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            start_fen: crate::engine::START_FEN.to_string(),
            perft_depth: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.start_fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
        assert_eq!(config.perft_depth, 5);
    }

    #[test]
    fn from_env_defaults() {
        // Without the env vars set, fall back to defaults.
        let config = AppConfig::from_env();
        assert_eq!(config.start_fen, crate::engine::START_FEN);
        assert_eq!(config.perft_depth, 5);
    }
}
