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
// Character sets

use crate::passgen::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// 字符类别，声明顺序即字母表拼接顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Numbers,
        Category::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Numbers => NUMBERS,
            Category::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Lowercase => "lowercase",
            Category::Uppercase => "uppercase",
            Category::Numbers => "numbers",
            Category::Symbols => "symbols",
        }
    }
}

/// Concatenates the enabled character classes in the fixed order
/// lowercase, uppercase, numbers, symbols.
///
/// Returns an empty string when nothing is enabled.
pub fn build_alphabet(config: &GenerationConfig) -> String {
    config
        .categories()
        .into_iter()
        .map(Category::chars)
        .collect()
}
