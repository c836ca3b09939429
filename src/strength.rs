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
// Password strength tiers

use std::fmt;
use serde::{Deserialize, Serialize};

// 安全评级，按强度递增排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3 => StrengthTier::Medium,
            4 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
            StrengthTier::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub score: u8,
    pub tier: StrengthTier,
}

struct Criterion {
    hint: &'static str,
    check: fn(&str, usize) -> bool,
}

// 每项检查独立计分，小写字母不计分
const CRITERIA: [Criterion; 5] = [
    Criterion {
        hint: "Use more than 8 characters",
        check: |_, length| length > 8,
    },
    Criterion {
        hint: "Use more than 12 characters",
        check: |_, length| length > 12,
    },
    Criterion {
        hint: "Add an uppercase letter",
        check: |password, _| password.chars().any(|c| c.is_ascii_uppercase()),
    },
    Criterion {
        hint: "Add a digit",
        check: |password, _| password.chars().any(|c| c.is_ascii_digit()),
    },
    Criterion {
        hint: "Add a symbol",
        check: |password, _| password.chars().any(|c| !c.is_ascii_alphanumeric()),
    },
];

/// Heuristic score in `0..=5`.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    CRITERIA
        .iter()
        .filter(|criterion| (criterion.check)(password, length))
        .count() as u8
}

/// Hints for each scoring check the password fails, in scoring order.
pub fn suggestions(password: &str) -> Vec<&'static str> {
    let length = password.chars().count();
    CRITERIA
        .iter()
        .filter(|criterion| !(criterion.check)(password, length))
        .map(|criterion| criterion.hint)
        .collect()
}

pub fn classify(password: &str) -> StrengthTier {
    StrengthTier::from_score(score(password))
}

pub fn assess(password: &str) -> Assessment {
    let score = score(password);
    Assessment {
        score,
        tier: StrengthTier::from_score(score),
    }
}
