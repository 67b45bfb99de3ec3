// ABOUTME: Auth module - BV-BRC token type and token source resolution.
// ABOUTME: Tokens come from environment variables or home-directory dotfiles.

mod source;
mod token;

pub use source::{TOKEN_ENV_VARS, TOKEN_FILES, TokenSources};
pub use token::Token;
