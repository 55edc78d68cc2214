use super::language::Direction;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following {source_language} text to {target_language}. \
     Output only the translated text without any explanations. \
     Preserve the meaning and register of the original, including formatting and blank lines.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(direction: Direction) -> String {
    // {source_language}/{target_language} are placeholders for string
    // replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", direction.source().name())
        .replace("{target_language}", direction.target().name())
}
