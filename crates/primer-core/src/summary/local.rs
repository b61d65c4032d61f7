//! The deterministic local/offline summary template.

use crate::intake::{PlanRequest, joined_descriptors};

/// Render the offline draft summary.
///
/// Pure formatting over the normalized fields: identical input yields
/// byte-identical output. Used whenever no completion client is
/// configured, and always used by the form's local preview.
pub fn render(request: &PlanRequest) -> String {
    let mut out = String::with_capacity(512);

    out.push_str("Draft Homeschool Plan\n");
    out.push_str("=====================\n\n");

    out.push_str(&format!("Children: {}\n", joined_descriptors(request)));
    out.push_str(&format!("Teaching philosophy: {}\n", request.philosophy));
    out.push_str(&format!("Location: {}\n", request.location));
    out.push_str(&format!("Goals: {}\n\n", request.goals));

    out.push_str("Suggested starting points:\n");
    out.push_str("- Sketch a simple weekly rhythm before committing to a full schedule.\n");
    out.push_str("- Pick one subject per child to anchor the first month.\n");
    out.push_str("- Revisit this draft after two weeks and adjust what is not working.\n\n");

    out.push_str(
        "This draft was assembled locally. Configure a completion API key \
         for a personalized narrative summary.\n",
    );

    out
}
