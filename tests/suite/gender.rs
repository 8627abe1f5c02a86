//! Gender value and setter tests

use genderkit_types::{
    DEFAULT_FEMALE_PRONOUNS, DEFAULT_MALE_PRONOUNS, Gender, NEUTRAL_PRONOUNS, PronounReferable,
};

use crate::common::{nonbinary, xe_pronouns};

#[test]
fn equality_rules() {
    assert_eq!(Gender::Male, Gender::Male);
    assert_eq!(Gender::Female, Gender::Female);
    assert_ne!(Gender::Male, Gender::Female);

    let a = Gender::other("Nonbinary", DEFAULT_MALE_PRONOUNS.clone());
    let b = Gender::other("Nonbinary", xe_pronouns());
    assert_eq!(a, b);
    assert_ne!(a, Gender::Male);
    assert_ne!(a, Gender::Female);
}

#[test]
fn picker_flow_keeps_custom_pronouns_while_renaming() {
    // Pick pronouns on a named gender, then rename it.
    let step1 = Gender::Female.with_pronouns(xe_pronouns());
    assert_eq!(step1.description(), "Female");
    let step2 = step1.with_description("Genderqueer");
    assert_eq!(step2.pronouns(), &xe_pronouns());
    assert_eq!(step2.subject_pronoun(), "xe");

    // Choosing a built-in label resets to its defaults.
    let step3 = step2.with_description("Male");
    assert_eq!(step3, Gender::Male);
    assert_eq!(step3.pronouns(), &DEFAULT_MALE_PRONOUNS);
}

#[test]
fn setting_pronouns_preserves_description() {
    for gender in [Gender::Male, Gender::Female, nonbinary()] {
        let updated = gender.with_pronouns(xe_pronouns());
        assert_eq!(updated.description(), gender.description());
        assert_eq!(updated.pronouns(), &xe_pronouns());
    }
}

#[test]
fn setting_description_reclassifies() {
    for gender in [Gender::Male, Gender::Female, nonbinary()] {
        assert!(matches!(gender.with_description("Male"), Gender::Male));
        assert!(matches!(gender.with_description("Female"), Gender::Female));

        let custom = gender.with_description("Bigender");
        assert!(custom.is_custom());
        assert_eq!(custom.description(), "Bigender");
        assert_eq!(custom.pronouns(), gender.pronouns());
    }
}

#[test]
fn matching_default_is_a_no_op() {
    assert!(matches!(
        Gender::Male.with_pronouns(DEFAULT_MALE_PRONOUNS.clone()),
        Gender::Male
    ));
    assert!(matches!(
        Gender::Female.with_pronouns(DEFAULT_FEMALE_PRONOUNS.clone()),
        Gender::Female
    ));
    // Another variant's default is still an override.
    assert!(
        Gender::Male
            .with_pronouns(DEFAULT_FEMALE_PRONOUNS.clone())
            .is_custom()
    );
}

#[test]
fn neutral_pronouns_refer_through_gender() {
    let gender = Gender::classify("Agender", NEUTRAL_PRONOUNS.clone());
    assert_eq!(gender.object_pronoun(), "them");
    assert_eq!(gender.reflexive_pronoun(), "themselves");
}
