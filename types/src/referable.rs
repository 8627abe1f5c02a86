//! Referring to something by its pronouns.

use crate::gender::Gender;
use crate::pronouns::PronounSet;

/// Anything that carries a [`PronounSet`] can be referred to with it.
pub trait PronounReferable {
    fn pronoun_set(&self) -> &PronounSet;

    fn subject_pronoun(&self) -> &str {
        self.pronoun_set().subject()
    }

    fn object_pronoun(&self) -> &str {
        self.pronoun_set().object()
    }

    fn possessive_determiner(&self) -> &str {
        self.pronoun_set().possessive_determiner()
    }

    fn possessive_pronoun(&self) -> &str {
        self.pronoun_set().possessive_pronoun()
    }

    fn reflexive_pronoun(&self) -> &str {
        self.pronoun_set().reflexive()
    }
}

impl PronounReferable for PronounSet {
    fn pronoun_set(&self) -> &PronounSet {
        self
    }
}

impl PronounReferable for Gender {
    fn pronoun_set(&self) -> &PronounSet {
        self.pronouns()
    }
}
