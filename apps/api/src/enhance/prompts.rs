// Prompts for the wording-enhancement service.

use crate::llm_client::prompts::{FAITHFULNESS_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::models::Language;

pub fn enhance_system_prompt() -> String {
    format!(
        "{JSON_ONLY_SYSTEM} You are a resume enhancement assistant. \
         You improve the wording and phrasing of resume content to make it more \
         impactful and professional."
    )
}

pub fn enhance_prompt(text: &str, language: Language) -> String {
    let language_name = match language {
        Language::En => "English",
        Language::Tr => "Turkish",
    };
    format!(
        "Rewrite the resume content below.\n\
         Write in {language_name} (language code: {code}).\n\
         Use strong action verbs and highlight accomplishments. Be concise and professional.\n\
         Keep the line structure: when the input has one item per line starting with \"- \", \
         return the same number of lines in the same format.\n\
         {FAITHFULNESS_INSTRUCTION}\n\n\
         CONTENT:\n{text}\n\n\
         Respond with exactly this JSON shape:\n\
         {{\"enhanced_content\": \"<the rewritten content>\"}}",
        code = language.code(),
    )
}
