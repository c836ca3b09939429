//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : rpawogen contributors
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Error types

use std::io;
use thiserror::Error;

use crate::passgen::{MAX_LENGTH, MIN_LENGTH};

/// 密码生成错误
///
/// An empty alphabet is not an error: it yields an empty password.
#[derive(Error, Debug)]
pub enum GenError {
    /// The secure random source could not deliver bytes. Fatal to the request,
    /// there is no fallback source.
    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(#[source] rand::Error),

    /// The requested length needs more random bytes than fit in memory.
    #[error("Password length {0} is too large to sample")]
    LengthOverflow(usize),
}

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDir(String),

    #[error("Password length {0} is outside the allowed range {}..={}", MIN_LENGTH, MAX_LENGTH)]
    InvalidLength(usize),
}
