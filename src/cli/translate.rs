//! Ad-hoc text translation command

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::json;
use crate::translate::Translation;

/// Translate `text` and print the outcome
pub async fn run(
    opts: &GlobalOptions,
    text: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let prefs = &ctx.config.preferences;
    let source = from.unwrap_or(prefs.source_lang.as_str());
    let target = to.unwrap_or(prefs.target_lang.as_str());

    let translator = ctx.translator()?;
    let outcome = translator.translate_detailed(text, source, target).await;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "target": target,
                "original": text,
                "text": outcome.text(),
                "translated": !outcome.is_unchanged(),
                "reason": unchanged_reason(&outcome),
            });
            println!("{}", json::format_json(&output)?);
        }
        _ => {
            println!("{}", outcome.text());
            if let Some(reason) = unchanged_reason(&outcome) {
                eprintln!("{} Texto sin traducir: {}", "⚠".yellow(), reason);
            }
        }
    }

    Ok(())
}

fn unchanged_reason(outcome: &Translation) -> Option<String> {
    match outcome {
        Translation::Unchanged { reason, .. } => Some(reason.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;

    #[test]
    fn test_unchanged_reason() {
        let outcome = Translation::Unchanged {
            text: "Soup".to_string(),
            reason: TranslateError::HttpStatus(503),
        };
        assert!(unchanged_reason(&outcome).unwrap().contains("503"));
        assert_eq!(
            unchanged_reason(&Translation::Translated("Sopa".to_string())),
            None
        );
    }
}
