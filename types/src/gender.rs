//! The gender value.
//!
//! [`Gender`] is a closed set of two fixed identities plus an open
//! [`Gender::Other`] case. Its two derived attributes, `description` and
//! `pronouns`, are read through accessors and "set" through
//! [`Gender::with_description`] and [`Gender::with_pronouns`], which return a
//! reclassified value and leave the receiver untouched.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};

use crate::pronouns::PronounSet;

pub const MALE_LABEL: &str = "Male";
pub const FEMALE_LABEL: &str = "Female";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    /// A user-defined label with an explicit pronoun set.
    ///
    /// Only `description` takes part in equality.
    Other {
        description: String,
        pronouns: PronounSet,
    },
}

impl Gender {
    #[must_use]
    pub fn other(description: impl Into<String>, pronouns: PronounSet) -> Self {
        Gender::Other {
            description: description.into(),
            pronouns,
        }
    }

    /// The value produced by labelling a gender and then choosing pronouns.
    ///
    /// `"Male"` with the male defaults stays [`Gender::Male`]; a built-in
    /// label with any other pronouns becomes [`Gender::Other`] under that label.
    #[must_use]
    pub fn classify(description: impl Into<String>, pronouns: PronounSet) -> Self {
        Gender::Male
            .with_description(description)
            .with_pronouns(pronouns)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Gender::Male => MALE_LABEL,
            Gender::Female => FEMALE_LABEL,
            Gender::Other { description, .. } => description,
        }
    }

    #[must_use]
    pub fn pronouns(&self) -> &PronounSet {
        match self {
            Gender::Male => PronounSet::default_male(),
            Gender::Female => PronounSet::default_female(),
            Gender::Other { pronouns, .. } => pronouns,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Gender::Other { .. })
    }

    /// Relabel this gender.
    ///
    /// The built-in labels collapse to their fixed variant and drop any
    /// pronoun override. Any other text yields [`Gender::Other`] carrying the
    /// pronouns currently in effect.
    #[must_use]
    pub fn with_description(&self, description: impl Into<String>) -> Gender {
        let description = description.into();
        match description.as_str() {
            MALE_LABEL => Gender::Male,
            FEMALE_LABEL => Gender::Female,
            _ => Gender::other(description, self.pronouns().clone()),
        }
    }

    /// Replace the pronoun set, keeping the current description.
    ///
    /// Setting a fixed variant's own default is a no-op.
    #[must_use]
    pub fn with_pronouns(&self, pronouns: PronounSet) -> Gender {
        match self {
            Gender::Male | Gender::Female if pronouns == *self.pronouns() => self.clone(),
            _ => Gender::other(self.description(), pronouns),
        }
    }
}

impl PartialEq for Gender {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Gender::Male, Gender::Male) | (Gender::Female, Gender::Female) => true,
            (Gender::Other { description: lhs, .. }, Gender::Other { description: rhs, .. }) => {
                lhs == rhs
            }
            _ => false,
        }
    }
}

impl Eq for Gender {}

impl Hash for Gender {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        if let Gender::Other { description, .. } = self {
            description.hash(state);
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
