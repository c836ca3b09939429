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
// Password generator

use std::fmt;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::charset::{build_alphabet, Category};
use crate::error::GenError;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;

// 密码生成选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_numbers: bool,
    pub use_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_uppercase: true,
            use_lowercase: true,
            use_numbers: true,
            use_symbols: true,
        }
    }
}

impl GenerationConfig {
    /// Enabled categories, in alphabet order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.is_enabled(*category))
            .collect()
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Lowercase => self.use_lowercase,
            Category::Uppercase => self.use_uppercase,
            Category::Numbers => self.use_numbers,
            Category::Symbols => self.use_symbols,
        }
    }

    pub fn length_in_bounds(&self) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&self.length)
    }
}

/// A generated password. Empty when no category was enabled.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// 避免密码出现在调试日志中
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates a password from the operating system's secure random source.
pub fn generate(config: &GenerationConfig) -> Result<Password, GenError> {
    generate_with(config, &mut OsRng)
}

/// Generates a password from `rng`.
///
/// Each position is an independent 32-bit sample reduced modulo the alphabet
/// length, so characters may repeat. The residual modulo bias against an
/// alphabet of at most 88 characters is below 2^-25 and is accepted.
pub fn generate_with<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password, GenError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let alphabet = build_alphabet(config);
    if alphabet.is_empty() {
        log::debug!("No character category enabled, nothing to generate");
        return Ok(Password(String::new()));
    }
    log::debug!(
        "Generating password of length {} from {} characters",
        config.length,
        alphabet.len()
    );

    let samples = sample_u32(rng, config.length)?;
    // 字母表全部为 ASCII，按字节索引即按字符索引
    let symbols = alphabet.as_bytes();
    let password = samples
        .into_iter()
        .map(|r| char::from(symbols[r as usize % symbols.len()]))
        .collect();

    Ok(Password(password))
}

/// Generates `count` independent passwords from the operating system's
/// secure random source. Stops at the first randomness failure.
pub fn generate_batch(config: &GenerationConfig, count: usize) -> Result<Vec<Password>, GenError> {
    let mut rng = OsRng;
    (0..count).map(|_| generate_with(config, &mut rng)).collect()
}

fn sample_u32<R>(rng: &mut R, count: usize) -> Result<Vec<u32>, GenError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let byte_len = count
        .checked_mul(4)
        .ok_or(GenError::LengthOverflow(count))?;
    let mut bytes = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut bytes).map_err(|e| {
        log::error!("Secure random source failed: {}", e);
        GenError::RandomnessUnavailable(e)
    })?;

    let samples = bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    bytes.fill(0);
    Ok(samples)
}
