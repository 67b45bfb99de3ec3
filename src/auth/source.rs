// ABOUTME: Resolves the BV-BRC token from environment variables, then dotfiles.
// ABOUTME: The first non-empty source wins; no source yields an empty token.

use std::path::{Path, PathBuf};

use super::Token;

/// Environment variables checked for a token, in priority order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["BVBRC_TOKEN", "P3_AUTH_TOKEN"];

/// Dotfiles under the home directory checked for a token, in priority order.
pub const TOKEN_FILES: [&str; 3] = [".bvbrc_token", ".patric_token", ".p3_token"];

/// Where to look for a token.
#[derive(Debug, Clone)]
pub struct TokenSources {
    home: Option<PathBuf>,
}

impl Default for TokenSources {
    fn default() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }
}

impl TokenSources {
    /// Look for dotfiles in `home` instead of the user's home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Skip dotfile lookup entirely.
    pub fn env_only() -> Self {
        Self { home: None }
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Token {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` for environment variables.
    pub fn resolve_with<F>(&self, lookup: F) -> Token
    where
        F: Fn(&str) -> Option<String>,
    {
        for var in TOKEN_ENV_VARS {
            if let Some(value) = lookup(var) {
                let token = Token::new(value);
                if token.is_authenticated() {
                    tracing::debug!(source = var, "loaded token from environment");
                    return token;
                }
            }
        }

        if let Some(home) = &self.home {
            if let Some(token) = read_token_files(home) {
                return token;
            }
        }

        Token::empty()
    }
}

fn read_token_files(home: &Path) -> Option<Token> {
    for name in TOKEN_FILES {
        let path = home.join(name);
        if !path.is_file() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let token = Token::new(content);
                if token.is_authenticated() {
                    tracing::debug!(path = %path.display(), "loaded token from file");
                    return Some(token);
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable token file");
            }
        }
    }
    None
}
