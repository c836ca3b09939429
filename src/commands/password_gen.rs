use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use rpawogen::charset::build_alphabet;
use rpawogen::passgen::{self, GenerationConfig};
use rpawogen::strength::{self, StrengthTier};

pub const EMPTY_ALPHABET_HINT: &str = "Select at least one character category to generate a password.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Quiet,
    Json,
}

#[derive(Serialize)]
struct GeneratedEntry<'a> {
    password: &'a str,
    strength: StrengthTier,
    score: u8,
}

pub fn generate_passwords<W: Write>(
    out: &mut W,
    config: &GenerationConfig,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    // 未选择任何字符类别时不生成密码
    if build_alphabet(config).is_empty() {
        log::debug!("No character category enabled, skipping generation");
        match format {
            OutputFormat::Json => writeln!(out, "[]")?,
            _ => writeln!(out, "{}", EMPTY_ALPHABET_HINT)?,
        }
        return Ok(());
    }

    let passwords = passgen::generate_batch(config, count)
        .context("Failed to generate password")?;

    match format {
        OutputFormat::Quiet => {
            for password in &passwords {
                writeln!(out, "{}", password)?;
            }
        },
        OutputFormat::Text => {
            for password in &passwords {
                let assessment = strength::assess(password.as_str());
                writeln!(out, "Generated password: {}", password)?;
                writeln!(out, "Password strength: {} (score: {}/5)", assessment.tier, assessment.score)?;
            }
        },
        OutputFormat::Json => {
            let entries: Vec<GeneratedEntry> = passwords
                .iter()
                .map(|password| {
                    let assessment = strength::assess(password.as_str());
                    GeneratedEntry {
                        password: password.as_str(),
                        strength: assessment.tier,
                        score: assessment.score,
                    }
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn no_categories() -> GenerationConfig {
        GenerationConfig {
            length: 12,
            use_uppercase: false,
            use_lowercase: false,
            use_numbers: false,
            use_symbols: false,
        }
    }

    fn run(config: &GenerationConfig, count: usize, format: OutputFormat) -> String {
        let mut out = Vec::new();
        generate_passwords(&mut out, config, count, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_alphabet_prints_hint() {
        let output = run(&no_categories(), 3, OutputFormat::Text);
        assert_eq!(output, format!("{}\n", EMPTY_ALPHABET_HINT));

        let output = run(&no_categories(), 3, OutputFormat::Quiet);
        assert_eq!(output, format!("{}\n", EMPTY_ALPHABET_HINT));
    }

    #[test]
    fn test_empty_alphabet_json_is_empty_array() {
        let output = run(&no_categories(), 3, OutputFormat::Json);
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_json_entries() {
        let config = GenerationConfig {
            length: 14,
            ..Default::default()
        };
        let output = run(&config, 4, OutputFormat::Json);
        let entries: Vec<Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(entries.len(), 4);

        for entry in &entries {
            let object = entry.as_object().unwrap();
            assert_eq!(object.len(), 3);

            let password = object["password"].as_str().unwrap();
            assert_eq!(password.chars().count(), 14);

            let assessment = strength::assess(password);
            assert_eq!(object["score"].as_u64().unwrap(), assessment.score as u64);
            assert_eq!(object["strength"].as_str().unwrap(), assessment.tier.label());
        }
    }

    #[test]
    fn test_json_tier_is_kebab_case() {
        let config = GenerationConfig {
            length: 14,
            use_uppercase: true,
            use_lowercase: false,
            use_numbers: false,
            use_symbols: false,
        };
        let output = run(&config, 1, OutputFormat::Json);
        let entries: Vec<Value> = serde_json::from_str(&output).unwrap();
        // 只含大写：长度两项加大写，共 3 分
        assert_eq!(entries[0]["strength"], "medium");

        let entry = GeneratedEntry {
            password: "Abcdefghijkl1!",
            strength: StrengthTier::VeryStrong,
            score: 5,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["strength"], "very-strong");
    }

    #[test]
    fn test_quiet_prints_only_passwords() {
        let config = GenerationConfig {
            length: 10,
            use_uppercase: false,
            use_lowercase: false,
            use_numbers: true,
            use_symbols: false,
        };
        let output = run(&config, 5, OutputFormat::Quiet);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.len() == 10 && line.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_text_output_has_strength_line() {
        let output = run(&GenerationConfig::default(), 2, OutputFormat::Text);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Generated password: "));
        assert!(lines[1].starts_with("Password strength: "));
        assert!(lines[1].ends_with("/5)"));
    }
}
