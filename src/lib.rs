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
// Secure random password generation and strength tiers.

pub mod charset;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod strength;

pub use error::{ConfigError, GenError};
pub use passgen::{generate, GenerationConfig, Password};
pub use strength::{classify, StrengthTier};
