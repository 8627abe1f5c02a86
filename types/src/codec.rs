//! Single-line token encoding for [`Gender`].
//!
//! ```text
//! token := "M" | "F" | "O" description "|" pronoun-token
//! ```
//!
//! Only the first `|` after the tag delimits the description, and no escaping
//! is performed. A description that itself contains `|` therefore does not
//! survive a round trip: the text after its first `|` is read as pronoun
//! data, which either fails to decode or silently yields a different value.

use std::str::FromStr;

use thiserror::Error;

use crate::gender::Gender;
use crate::pronouns::{PronounSet, PronounSetError};

/// Delimits an `Other` token's description from its pronoun token.
pub const SEPARATOR: char = '|';

const MALE_TAG: &str = "M";
const FEMALE_TAG: &str = "F";
const OTHER_TAG: char = 'O';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("gender token must not be empty")]
    Empty,
    #[error("unrecognized gender token '{token}'; expected \"M\", \"F\" or \"O<description>|<pronouns>\"")]
    UnrecognizedTag { token: String },
    #[error("gender token '{token}' has no '|' before its pronouns")]
    MissingSeparator { token: String },
    #[error("invalid pronouns in gender token: {0}")]
    InvalidPronouns(#[from] PronounSetError),
}

#[must_use]
pub fn encode(gender: &Gender) -> String {
    match gender {
        Gender::Male => MALE_TAG.to_string(),
        Gender::Female => FEMALE_TAG.to_string(),
        Gender::Other {
            description,
            pronouns,
        } => format!("{OTHER_TAG}{description}{SEPARATOR}{}", pronouns.encode()),
    }
}

/// Decode a token, discarding the reason on failure.
#[must_use]
pub fn decode(token: &str) -> Option<Gender> {
    parse(token).ok()
}

pub fn parse(token: &str) -> Result<Gender, TokenError> {
    match token {
        "" => Err(TokenError::Empty),
        MALE_TAG => Ok(Gender::Male),
        FEMALE_TAG => Ok(Gender::Female),
        _ => {
            let Some(body) = token.strip_prefix(OTHER_TAG) else {
                return Err(TokenError::UnrecognizedTag {
                    token: token.to_string(),
                });
            };
            let Some((description, pronouns)) = body.split_once(SEPARATOR) else {
                return Err(TokenError::MissingSeparator {
                    token: token.to_string(),
                });
            };
            let pronouns = PronounSet::parse(pronouns)?;
            Ok(Gender::other(description, pronouns))
        }
    }
}

impl Gender {
    #[must_use]
    pub fn encode(&self) -> String {
        encode(self)
    }

    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        decode(token)
    }

    pub fn parse(token: &str) -> Result<Self, TokenError> {
        parse(token)
    }
}

impl FromStr for Gender {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<String> for Gender {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        encode(&value)
    }
}
