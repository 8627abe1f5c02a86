//! Token codec tests

use genderkit_types::{DEFAULT_MALE_PRONOUNS, Gender, TokenError, codec};

use crate::common::{nonbinary, xe_pronouns};

#[test]
fn concrete_tokens() {
    assert_eq!(codec::encode(&Gender::Male), "M");
    assert_eq!(codec::encode(&Gender::Female), "F");

    let nonbinary_he = Gender::other("Nonbinary", DEFAULT_MALE_PRONOUNS.clone());
    let token = format!("ONonbinary|{}", DEFAULT_MALE_PRONOUNS.encode());
    assert_eq!(codec::encode(&nonbinary_he), token);
    assert_eq!(codec::decode("M"), Some(Gender::Male));

    let decoded = codec::decode(&token).unwrap();
    assert_eq!(decoded, nonbinary_he);
    assert_eq!(decoded.pronouns(), &DEFAULT_MALE_PRONOUNS);
}

#[test]
fn malformed_tokens_decode_to_none() {
    for token in ["", "Ohello", "X", "MF", "O", "Ohello|", "Ohello|a/b/c/d/"] {
        assert_eq!(codec::decode(token), None, "token {token:?}");
    }
}

#[test]
fn pronoun_failure_fails_whole_decode() {
    assert!(matches!(
        Gender::parse("OAgender|he/him/his"),
        Err(TokenError::InvalidPronouns(_))
    ));
}

#[test]
fn edited_values_round_trip() {
    let values = [
        Gender::Male,
        Gender::Female,
        nonbinary(),
        Gender::Male.with_pronouns(xe_pronouns()),
        Gender::Female.with_description("Demigirl"),
        nonbinary().with_description(""),
    ];
    for gender in values {
        let decoded = Gender::decode(&gender.encode()).expect("round trip");
        assert_eq!(decoded, gender);
        assert_eq!(decoded.pronouns(), gender.pronouns());
    }
}

#[test]
fn json_embeds_token() {
    let value = serde_json::json!({ "gender": Gender::Female.with_pronouns(xe_pronouns()) });
    assert_eq!(
        value["gender"],
        "OFemale|xe/xem/xyr/xyrs/xemself"
    );
}
