//! Prompt construction for the generative summary variant.
//!
//! Assembles the normalized family inputs into a bounded natural-language
//! instruction. Pure logic; the completion call lives in
//! [`crate::completion`].

use crate::intake::{PlanRequest, joined_descriptors};

/// Fixed system instruction for the two-message completion exchange.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a friendly homeschool planning assistant. You write short, \
     practical draft plans for families and never invent details the family \
     did not provide.";

/// Sampling temperature for draft generation. Moderately creative: the
/// drafts should vary in phrasing without drifting from the inputs.
pub const DRAFT_TEMPERATURE: f32 = 0.7;

/// Upper bound on generated summary length.
pub const DRAFT_MAX_TOKENS: u32 = 600;

/// Build the user prompt for a draft summary.
///
/// The prompt carries a persona line, a family context block, an explicit
/// numbered task list, and tone constraints, all derived from the
/// normalized request.
pub fn build_draft_prompt(request: &PlanRequest) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str(
        "Act as an experienced homeschool planning consultant preparing a \
         first draft for a family consultation.\n\n",
    );

    prompt.push_str("## Family Context\n\n");
    prompt.push_str(&format!("- Children: {}\n", joined_descriptors(request)));
    prompt.push_str(&format!(
        "- Teaching philosophy: {}\n",
        request.philosophy
    ));
    prompt.push_str(&format!("- Location: {}\n", request.location));
    prompt.push_str(&format!("- Goals: {}\n\n", request.goals));

    prompt.push_str("## Tasks\n\n");
    prompt.push_str(
        "1. Open with one sentence that reflects this family's situation back to them.\n",
    );
    prompt.push_str("2. Suggest a weekly rhythm that fits the children listed above.\n");
    prompt.push_str("3. Recommend two or three concrete resources or activities per child.\n");
    prompt.push_str("4. Close with a single encouraging next step.\n\n");

    prompt.push_str(
        "Keep the tone warm and encouraging, avoid jargon, and stay under 250 \
         words. Where a field says \"Not specified\", work with what is known \
         instead of asking follow-up questions.\n",
    );

    prompt
}
