//! The `primer draft` command: summaries from a form file.

use anyhow::{Context, Result};
use serde::Deserialize;

use primer_core::intake::{self, form::FormState};

use crate::config::PrimerConfig;

// -----------------------------------------------------------------------
// Form file format
// -----------------------------------------------------------------------

/// On-disk form shape:
///
/// ```toml
/// philosophy = "Charlotte Mason"
/// location = "Vermont"
/// goals = "Strong readers by spring"
///
/// [[children]]
/// name = "Emma"
/// age = "10"
/// grade = "4"
/// ```
#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default)]
    children: Vec<FormChild>,
    #[serde(default)]
    philosophy: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    goals: String,
}

#[derive(Debug, Deserialize)]
struct FormChild {
    #[serde(default)]
    name: String,
    #[serde(default)]
    age: String,
    #[serde(default)]
    grade: String,
}

fn build_form(file: &FormFile) -> FormState {
    let mut form = FormState::new();
    form.philosophy = file.philosophy.clone();
    form.location = file.location.clone();
    form.goals = file.goals.clone();
    for child in &file.children {
        let id = form.add_child();
        form.set_name(id, &child.name);
        form.set_age(id, &child.age);
        form.set_grade(id, &child.grade);
    }
    form
}

// -----------------------------------------------------------------------
// Command
// -----------------------------------------------------------------------

/// Read a form file, normalize it, and print a draft summary.
///
/// Uses the generative variant when a credential is configured, unless
/// `offline` forces the local template.
pub async fn run_draft(config: &PrimerConfig, file: &str, offline: bool) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read form file {file}"))?;
    let form_file: FormFile =
        toml::from_str(&contents).with_context(|| format!("failed to parse form file {file}"))?;

    let form = build_form(&form_file);

    if offline {
        let summary = form.preview()?;
        println!("{summary}");
        return Ok(());
    }

    let normalized = intake::normalize(&form.payload())?;
    let service = config.summary_service();
    let summary = service
        .draft(&normalized)
        .await
        .context("draft generation failed")?;
    println!("{summary}");

    Ok(())
}
