use anyhow::Result;
use std::io::Write;

use rpawogen::strength;

pub fn test_password<W: Write>(out: &mut W, password: &str) -> Result<()> {
    let assessment = strength::assess(password);
    writeln!(out, "Password strength: {} (score: {}/5)", assessment.tier, assessment.score)?;

    let suggestions = strength::suggestions(password);
    if !suggestions.is_empty() {
        writeln!(out, "Suggestions: {}", suggestions.join(". "))?;
    }
    Ok(())
}
