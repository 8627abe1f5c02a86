//! Gender identity values for GenderKit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//!
//! - [`Gender`]: `Male`, `Female`, or a user-described `Other` with its own pronouns
//! - [`PronounSet`]: the grammatical forms used to refer to someone
//! - [`codec`]: the single-line token format used to store a [`Gender`]
//!
//! ```
//! use genderkit_types::{Gender, NEUTRAL_PRONOUNS};
//!
//! let gender = Gender::Male.with_pronouns(NEUTRAL_PRONOUNS.clone());
//! assert_eq!(gender.description(), "Male");
//! assert_eq!(gender.encode(), "OMale|they/them/their/theirs/themselves");
//! assert_eq!(Gender::decode(&gender.encode()), Some(gender));
//! ```

pub mod codec;
mod gender;
mod pronouns;
mod referable;

pub use codec::{SEPARATOR, TokenError};
pub use gender::{FEMALE_LABEL, Gender, MALE_LABEL};
pub use pronouns::{
    DEFAULT_FEMALE_PRONOUNS, DEFAULT_MALE_PRONOUNS, FORM_DELIMITER, NEUTRAL_PRONOUNS, PronounForm,
    PronounSet, PronounSetError,
};
pub use referable::PronounReferable;
