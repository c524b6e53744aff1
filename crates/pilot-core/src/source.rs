//! Seam to the palette-generation service.
//!
//! The service itself (a hosted model) lives outside this workspace. It takes
//! a free-text prompt and answers with
//!
//! ```json
//! { "colors": [ { "hex": "#ffffff", "name": "White" }, ... ] }
//! ```
//!
//! Colors are accepted as returned; nothing here validates the hex strings.

use serde::{Deserialize, Serialize};

use crate::model::{Color, Palette};

/// Prompts shorter than this are rejected before reaching the service.
pub const MIN_PROMPT_CHARS: usize = 10;

/// Characters of the prompt kept in a generated palette's name.
const NAME_PROMPT_CHARS: usize = 30;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("prompt must be at least {} characters", MIN_PROMPT_CHARS)]
    PromptTooShort,
    #[error("malformed generation output: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("palette service failed: {0}")]
    Service(String),
}

/// Anything that can turn a prompt into a list of colors.
pub trait PaletteSource: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<Vec<Color>, SourceError>;
}

/// Wire shape of the service's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub colors: Vec<Color>,
}

/// Parse the service's JSON answer.
pub fn parse_generation_output(json: &str) -> Result<Vec<Color>, SourceError> {
    let output: GenerationOutput = serde_json::from_str(json)?;
    Ok(output.colors)
}

pub fn validate_prompt(prompt: &str) -> Result<(), SourceError> {
    if prompt.chars().count() < MIN_PROMPT_CHARS {
        return Err(SourceError::PromptTooShort);
    }
    Ok(())
}

/// `AI: <first 30 chars>` with `...` appended when the prompt was cut.
pub fn prompt_palette_name(prompt: &str) -> String {
    let head: String = prompt.chars().take(NAME_PROMPT_CHARS).collect();
    if prompt.chars().count() > NAME_PROMPT_CHARS {
        format!("AI: {head}...")
    } else {
        format!("AI: {head}")
    }
}

impl Palette {
    /// A freshly generated palette named after its prompt.
    pub fn from_prompt(id: impl Into<String>, prompt: &str, colors: Vec<Color>) -> Self {
        Self::new(id, colors).with_name(prompt_palette_name(prompt))
    }
}

/// Validate `prompt`, ask `source`, and wrap the answer as a palette.
pub fn generate_palette(
    source: &dyn PaletteSource,
    id: impl Into<String>,
    prompt: &str,
) -> Result<Palette, SourceError> {
    validate_prompt(prompt)?;
    let colors = source.generate(prompt)?;
    tracing::debug!("palette source returned {} colors", colors.len());
    Ok(Palette::from_prompt(id, prompt, colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    impl PaletteSource for Canned {
        fn generate(&self, _prompt: &str) -> Result<Vec<Color>, SourceError> {
            parse_generation_output(self.0)
        }
    }

    const OUTPUT: &str = r##"{"colors":[{"hex":"#FFFFFF","name":"White"},{"hex":"#000000","name":"Black"}]}"##;

    #[test]
    fn test_parse_output() {
        let colors = parse_generation_output(OUTPUT).unwrap();
        assert_eq!(colors, vec![Color::new("#FFFFFF", "White"), Color::new("#000000", "Black")]);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            parse_generation_output(r#"{"palette": []}"#),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_short_prompt_rejected() {
        assert!(matches!(validate_prompt("sunset"), Err(SourceError::PromptTooShort)));
        assert!(validate_prompt("sunset sea").is_ok());
        assert_eq!(
            SourceError::PromptTooShort.to_string(),
            "prompt must be at least 10 characters"
        );
    }

    #[test]
    fn test_name_truncates_long_prompts() {
        assert_eq!(prompt_palette_name("misty forest dawn"), "AI: misty forest dawn");
        assert_eq!(
            prompt_palette_name("Cyberpunk cityscape at night: neon signs"),
            "AI: Cyberpunk cityscape at night: ..."
        );
        assert_eq!(prompt_palette_name(&"x".repeat(30)), format!("AI: {}", "x".repeat(30)));
    }

    #[test]
    fn test_generate_palette_wraps_colors() {
        let palette = generate_palette(&Canned(OUTPUT), "1700", "monochrome newsprint").unwrap();
        assert_eq!(palette.id, "1700");
        assert_eq!(palette.name.as_deref(), Some("AI: monochrome newsprint"));
        assert_eq!(palette.colors.len(), 2);
        assert_eq!(palette.is_adjusted, None);
    }

    #[test]
    fn test_generate_palette_checks_prompt_first() {
        let err = generate_palette(&Canned("not json"), "1", "short").unwrap_err();
        assert!(matches!(err, SourceError::PromptTooShort));
    }
}
