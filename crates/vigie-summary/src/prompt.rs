//! System/user prompt pair for the narrative-analysis model.

use serde::{Deserialize, Serialize};

use crate::context::{SupportingDocument, build_document_block};

pub const SYSTEM_PROMPT: &str = "\
You are a senior preventive-medicine physician reviewing a structured health \
questionnaire. Produce an evidence-based prevention plan: screenings, \
vaccinations and follow-up examinations suited to this person's age, sex, \
habits and family history. Cite national guidelines where possible. Do not \
diagnose and do not prescribe treatment.

Answer with a single JSON object and nothing else, of the form:
{
  \"risk_summary\": \"two or three sentences on the main risks\",
  \"recommendations\": [
    {
      \"id\": \"stable-kebab-case-id\",
      \"name\": \"actionable title\",
      \"category\": \"cancer|cardiovascular|metabolic|bone_health|dental|vaccination|eye_health|genetics\",
      \"interval\": \"frequency\",
      \"age_start\": 50,
      \"age_end\": 74,
      \"priority\": 1-5,
      \"evidence_level\": \"strength of the evidence\",
      \"source\": \"guideline reference\",
      \"reasoning\": \"why it applies to this person\",
      \"note\": \"important detail or caveat, or null\"
    }
  ],
  \"next_steps\": [\"concrete action\"],
  \"disclaimer\": \"This analysis supports, and does not replace, a physician's judgement.\"
}";

const USER_PROMPT_HEADER: &str = "\
Here is the structured summary of a person's preventive-care questionnaire.
Assess the overall picture first, then propose a prioritized plan.
Follow the JSON format exactly and output nothing but JSON.

===== STRUCTURED SUMMARY =====
";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Assemble the prompt pair from a rendered summary.
///
/// Supporting documents, when present, are appended to the system prompt as
/// a context block.
pub fn build_prompt(summary: &str, documents: &[SupportingDocument]) -> Prompt {
    let block = build_document_block(documents);
    let system = if block.is_empty() {
        SYSTEM_PROMPT.to_string()
    } else {
        format!("{SYSTEM_PROMPT}\n\n{block}")
    };

    Prompt {
        system,
        user: format!("{USER_PROMPT_HEADER}{summary}\n"),
    }
}
