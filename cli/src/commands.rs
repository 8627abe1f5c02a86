//! Command implementations, kept free of argument parsing and printing.

use anyhow::{Context, Result};
use serde::Serialize;

use genderkit_config::OutputFormat;
use genderkit_types::{FEMALE_LABEL, Gender, MALE_LABEL, PronounSet};

/// Build a gender from a label and optional pronoun token.
///
/// Without pronouns, the built-in labels take their defaults and any other
/// label gets singular "they".
pub fn encode(description: &str, pronouns: Option<&str>) -> Result<Gender> {
    let pronouns = match pronouns {
        Some(raw) => PronounSet::parse(raw).with_context(|| format!("invalid pronouns '{raw}'"))?,
        None => default_pronouns_for(description).clone(),
    };
    let gender = Gender::classify(description, pronouns);
    tracing::debug!(token = %gender.encode(), "Encoded gender");
    Ok(gender)
}

pub fn decode(token: &str) -> Result<Gender> {
    Gender::parse(token).with_context(|| format!("could not decode gender token '{token}'"))
}

pub fn describe(token: &str, description: &str) -> Result<Gender> {
    let gender = decode(token)?;
    let updated = gender.with_description(description);
    if gender.is_custom() && !updated.is_custom() {
        tracing::info!(
            from = %gender.description(),
            to = %updated.description(),
            "Built-in label discards custom pronouns"
        );
    }
    Ok(updated)
}

pub fn repronoun(token: &str, pronouns: &str) -> Result<Gender> {
    let gender = decode(token)?;
    let pronouns =
        PronounSet::parse(pronouns).with_context(|| format!("invalid pronouns '{pronouns}'"))?;
    Ok(gender.with_pronouns(pronouns))
}

pub fn compare(lhs: &str, rhs: &str) -> Result<bool> {
    Ok(decode(lhs)? == decode(rhs)?)
}

fn default_pronouns_for(description: &str) -> &'static PronounSet {
    match description {
        MALE_LABEL => PronounSet::default_male(),
        FEMALE_LABEL => PronounSet::default_female(),
        _ => PronounSet::neutral(),
    }
}

#[derive(Debug, Serialize)]
struct GenderReport<'a> {
    token: String,
    description: &'a str,
    pronouns: &'a PronounSet,
    custom: bool,
}

#[derive(Debug, Serialize)]
struct ComparisonReport {
    equal: bool,
}

pub fn render_gender(gender: &Gender, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Token => Ok(gender.encode()),
        OutputFormat::Json => {
            let report = GenderReport {
                token: gender.encode(),
                description: gender.description(),
                pronouns: gender.pronouns(),
                custom: gender.is_custom(),
            };
            serde_json::to_string(&report).context("failed to serialize gender report")
        }
    }
}

pub fn render_comparison(equal: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Token => Ok(if equal { "equal" } else { "not equal" }.to_string()),
        OutputFormat::Json => serde_json::to_string(&ComparisonReport { equal })
            .context("failed to serialize comparison report"),
    }
}
