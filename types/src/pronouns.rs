//! Pronoun sets and their token encoding.
//!
//! A [`PronounSet`] is the five grammatical forms used to refer to someone.
//! Its token is the forms joined with `/` in declaration order, e.g.
//! `she/her/her/hers/herself`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delimiter between forms in a pronoun token.
pub const FORM_DELIMITER: char = '/';

pub static DEFAULT_MALE_PRONOUNS: PronounSet =
    PronounSet::from_static("he", "him", "his", "his", "himself");

pub static DEFAULT_FEMALE_PRONOUNS: PronounSet =
    PronounSet::from_static("she", "her", "her", "hers", "herself");

/// Singular "they". Not a default for any fixed gender.
pub static NEUTRAL_PRONOUNS: PronounSet =
    PronounSet::from_static("they", "them", "their", "theirs", "themselves");

/// Names one slot of a [`PronounSet`], for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronounForm {
    Subject,
    Object,
    PossessiveDeterminer,
    PossessivePronoun,
    Reflexive,
}

impl PronounForm {
    #[must_use]
    pub const fn all() -> &'static [PronounForm] {
        &[
            PronounForm::Subject,
            PronounForm::Object,
            PronounForm::PossessiveDeterminer,
            PronounForm::PossessivePronoun,
            PronounForm::Reflexive,
        ]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PronounForm::Subject => "subject",
            PronounForm::Object => "object",
            PronounForm::PossessiveDeterminer => "possessive determiner",
            PronounForm::PossessivePronoun => "possessive pronoun",
            PronounForm::Reflexive => "reflexive",
        }
    }
}

impl fmt::Display for PronounForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PronounSetError {
    #[error("pronoun token must have 5 forms separated by '/', found {found}")]
    WrongFormCount { found: usize },
    #[error("{form} pronoun must not be empty")]
    EmptyForm { form: PronounForm },
    #[error("{form} pronoun must not contain '/'")]
    ContainsDelimiter { form: PronounForm },
}

/// The grammatical forms used to refer to a person.
///
/// Invariant: every form is non-blank and free of [`FORM_DELIMITER`], so
/// [`PronounSet::encode`] and [`PronounSet::decode`] are exact inverses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PronounSet {
    subject: Cow<'static, str>,
    object: Cow<'static, str>,
    possessive_determiner: Cow<'static, str>,
    possessive_pronoun: Cow<'static, str>,
    reflexive: Cow<'static, str>,
}

impl PronounSet {
    pub fn new(
        subject: impl Into<String>,
        object: impl Into<String>,
        possessive_determiner: impl Into<String>,
        possessive_pronoun: impl Into<String>,
        reflexive: impl Into<String>,
    ) -> Result<Self, PronounSetError> {
        let forms = [
            subject.into(),
            object.into(),
            possessive_determiner.into(),
            possessive_pronoun.into(),
            reflexive.into(),
        ];
        for (value, form) in forms.iter().zip(PronounForm::all()) {
            validate_form(value, *form)?;
        }
        let [subject, object, possessive_determiner, possessive_pronoun, reflexive] = forms;
        Ok(Self {
            subject: Cow::Owned(subject),
            object: Cow::Owned(object),
            possessive_determiner: Cow::Owned(possessive_determiner),
            possessive_pronoun: Cow::Owned(possessive_pronoun),
            reflexive: Cow::Owned(reflexive),
        })
    }

    const fn from_static(
        subject: &'static str,
        object: &'static str,
        possessive_determiner: &'static str,
        possessive_pronoun: &'static str,
        reflexive: &'static str,
    ) -> Self {
        Self {
            subject: Cow::Borrowed(subject),
            object: Cow::Borrowed(object),
            possessive_determiner: Cow::Borrowed(possessive_determiner),
            possessive_pronoun: Cow::Borrowed(possessive_pronoun),
            reflexive: Cow::Borrowed(reflexive),
        }
    }

    #[must_use]
    pub fn default_male() -> &'static PronounSet {
        &DEFAULT_MALE_PRONOUNS
    }

    #[must_use]
    pub fn default_female() -> &'static PronounSet {
        &DEFAULT_FEMALE_PRONOUNS
    }

    #[must_use]
    pub fn neutral() -> &'static PronounSet {
        &NEUTRAL_PRONOUNS
    }

    /// "she", "he", "they".
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// "her", "him", "them".
    #[must_use]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// "her", "his", "their" (as in "her book").
    #[must_use]
    pub fn possessive_determiner(&self) -> &str {
        &self.possessive_determiner
    }

    /// "hers", "his", "theirs" (as in "the book is hers").
    #[must_use]
    pub fn possessive_pronoun(&self) -> &str {
        &self.possessive_pronoun
    }

    #[must_use]
    pub fn reflexive(&self) -> &str {
        &self.reflexive
    }

    #[must_use]
    pub fn encode(&self) -> String {
        [
            self.subject(),
            self.object(),
            self.possessive_determiner(),
            self.possessive_pronoun(),
            self.reflexive(),
        ]
        .join("/")
    }

    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        Self::parse(token).ok()
    }

    pub fn parse(token: &str) -> Result<Self, PronounSetError> {
        let forms: Vec<&str> = token.split(FORM_DELIMITER).collect();
        let [subject, object, determiner, possessive, reflexive] = forms.as_slice() else {
            return Err(PronounSetError::WrongFormCount { found: forms.len() });
        };
        Self::new(*subject, *object, *determiner, *possessive, *reflexive)
    }
}

fn validate_form(value: &str, form: PronounForm) -> Result<(), PronounSetError> {
    if value.trim().is_empty() {
        return Err(PronounSetError::EmptyForm { form });
    }
    if value.contains(FORM_DELIMITER) {
        return Err(PronounSetError::ContainsDelimiter { form });
    }
    Ok(())
}

impl fmt::Display for PronounSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for PronounSet {
    type Err = PronounSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PronounSet {
    type Error = PronounSetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PronounSet> for String {
    fn from(value: PronounSet) -> Self {
        value.encode()
    }
}
