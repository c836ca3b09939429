use rpawogen::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_passwords() {
        assert_eq!(score("abcdefg"), 0);
        assert_eq!(classify("abcdefg"), StrengthTier::Weak);

        assert_eq!(score("Abcdefghi"), 2);
        assert_eq!(classify("Abcdefghi"), StrengthTier::Weak);

        assert_eq!(score("Abcdefghi1"), 3);
        assert_eq!(classify("Abcdefghi1"), StrengthTier::Medium);

        assert_eq!(score("Abcdefghijkl1!"), 5);
        assert_eq!(classify("Abcdefghijkl1!"), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_classify_strong() {
        // 长度 13，含大写和数字，无符号
        assert_eq!(score("Abcdefghijkl1"), 4);
        assert_eq!(classify("Abcdefghijkl1"), StrengthTier::Strong);
    }

    #[test]
    fn test_lowercase_scores_nothing() {
        assert_eq!(score("abcdefgh"), 0);
        assert_eq!(score("ABCDEFGH"), 1);
        assert_eq!(score(""), 0);
        assert_eq!(classify(""), StrengthTier::Weak);
    }

    #[test]
    fn test_length_thresholds_are_strict() {
        assert_eq!(score("aaaaaaaa"), 0);
        assert_eq!(score("aaaaaaaaa"), 1);
        assert_eq!(score("aaaaaaaaaaaa"), 1);
        assert_eq!(score("aaaaaaaaaaaaa"), 2);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 个字符，14 个字节
        assert_eq!(score("ééééééé"), 1);
        assert_eq!(score("ÄÄÄÄÄÄÄÄÄ"), 2);
    }

    #[test]
    fn test_symbols_and_whitespace_count_as_special() {
        assert_eq!(score("abc def"), 1);
        assert_eq!(score("abc_def"), 1);
        assert_eq!(score("abc"), 0);
    }

    #[test]
    fn test_from_score_mapping() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(1), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(2), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_score(5), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::from_score(u8::MAX), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_tier_monotonic_in_score() {
        let tiers: Vec<StrengthTier> = (0..=5).map(StrengthTier::from_score).collect();
        assert!(tiers.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(StrengthTier::Weak < StrengthTier::Medium);
        assert!(StrengthTier::Medium < StrengthTier::Strong);
        assert!(StrengthTier::Strong < StrengthTier::VeryStrong);
    }

    #[test]
    fn test_classify_is_pure() {
        for password in ["abcdefg", "Abcdefghi1", "P@ssw0rd-2026-long"] {
            assert_eq!(classify(password), classify(password));
            assert_eq!(assess(password).tier, classify(password));
            assert_eq!(assess(password).score, score(password));
        }
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(StrengthTier::Weak.to_string(), "weak");
        assert_eq!(StrengthTier::Medium.to_string(), "medium");
        assert_eq!(StrengthTier::Strong.to_string(), "strong");
        assert_eq!(StrengthTier::VeryStrong.to_string(), "very-strong");
        assert_eq!(serde_json::to_string(&StrengthTier::VeryStrong).unwrap(), "\"very-strong\"");
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(
            suggestions("abcdefg"),
            vec![
                "Use more than 8 characters",
                "Use more than 12 characters",
                "Add an uppercase letter",
                "Add a digit",
                "Add a symbol",
            ]
        );
        assert_eq!(suggestions("Abcdefghi1"), vec!["Use more than 12 characters", "Add a symbol"]);
        assert!(suggestions("Abcdefghijkl1!").is_empty());
    }
}
