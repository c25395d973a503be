use super::{error::Error, field::Field};
use lazy_static::lazy_static;
use regex::Regex;

/// Checks attribute values given in canonical order.
///
/// Fails on the first violation: missing required values, then lengths of
/// every field, then case, edge whitespace, forbidden characters and null
/// characters field by field. Empty values count as absent.
pub fn validate(values: &[(Field, Option<&str>)]) -> Result<(), Error> {
    for (field, value) in values {
        if field.is_required() && present(*value).is_none() {
            return Err(Error::MissingField(*field));
        }
    }

    for (field, value) in values {
        let Some(value) = present(*value) else {
            continue;
        };

        let (min, max) = field.char_count_bounds();
        let char_count = value.chars().count();

        if char_count < min || char_count > max {
            return Err(Error::LengthViolation {
                field: *field,
                min,
                max,
            });
        }
    }

    for (field, value) in values {
        let Some(value) = present(*value) else {
            continue;
        };

        validate_characters(*field, value)?;
    }

    Ok(())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn validate_characters(field: Field, value: &str) -> Result<(), Error> {
    lazy_static! {
        static ref INVALID_CHARACTERS: Regex =
            Regex::new(r#"[,=$"'\\]"#).expect("Failed to compile regex");
    }

    if !value.chars().next().is_some_and(char::is_uppercase) {
        return Err(Error::CaseViolation(field));
    }

    if value.trim_matches(is_strippable) != value {
        return Err(Error::WhitespaceViolation(field));
    }

    if INVALID_CHARACTERS.is_match(value) {
        return Err(Error::InvalidCharacter(field));
    }

    if value.contains('\0') {
        return Err(Error::NullCharacter(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate, Error, Field};

    fn values<'a>(
        organisation: Option<&'a str>,
        locality: Option<&'a str>,
        country: Option<&'a str>,
        state: Option<&'a str>,
    ) -> Vec<(Field, Option<&'a str>)> {
        vec![
            (Field::Organisation, organisation),
            (Field::Locality, locality),
            (Field::Country, country),
            (Field::State, state),
            (Field::OrganisationalUnit, None),
            (Field::CommonName, None),
        ]
    }

    #[test]
    fn accepts_required_fields_only() {
        assert_eq!(
            validate(&values(Some("Acme"), Some("London"), Some("GB"), None)),
            Ok(())
        );
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        assert_eq!(
            validate(&values(None, None, None, None)),
            Err(Error::MissingField(Field::Organisation))
        );
        assert_eq!(
            validate(&values(Some("Acme"), Some(""), None, None)),
            Err(Error::MissingField(Field::Locality))
        );
        assert_eq!(
            validate(&values(Some("Acme"), Some("London"), None, None)),
            Err(Error::MissingField(Field::Country))
        );
    }

    #[test]
    fn presence_is_checked_before_length() {
        assert_eq!(
            validate(&values(Some("A"), Some("London"), None, None)),
            Err(Error::MissingField(Field::Country))
        );
    }

    #[test]
    fn length_is_checked_before_characters() {
        assert_eq!(
            validate(&values(Some("acme"), Some("London"), Some("G"), None)),
            Err(Error::LengthViolation {
                field: Field::Country,
                min: 2,
                max: 2,
            })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(
            validate(&values(Some("Ää"), Some("London"), Some("GB"), None)),
            Ok(())
        );

        let organisation = "Ä".repeat(128);
        assert_eq!(
            validate(&values(Some(organisation.as_str()), Some("London"), Some("GB"), None)),
            Ok(())
        );

        let organisation = "Ä".repeat(129);
        assert_eq!(
            validate(&values(Some(organisation.as_str()), Some("London"), Some("GB"), None)),
            Err(Error::LengthViolation {
                field: Field::Organisation,
                min: 2,
                max: 128,
            })
        );
    }

    #[test]
    fn optional_field_lengths_are_bounded() {
        let state = "S".repeat(65);

        assert_eq!(
            validate(&values(Some("Acme"), Some("London"), Some("GB"), Some(state.as_str()))),
            Err(Error::LengthViolation {
                field: Field::State,
                min: 2,
                max: 64,
            })
        );
        assert_eq!(
            validate(&values(Some("Acme"), Some("London"), Some("GB"), Some("S"))),
            Err(Error::LengthViolation {
                field: Field::State,
                min: 2,
                max: 64,
            })
        );
    }

    #[test]
    fn character_checks_run_field_by_field() {
        assert_eq!(
            validate(&values(Some("Acme"), Some("london"), Some("GB"), Some("A$"))),
            Err(Error::CaseViolation(Field::Locality))
        );
        assert_eq!(
            validate(&values(Some("Acme "), Some("london"), Some("GB"), None)),
            Err(Error::WhitespaceViolation(Field::Organisation))
        );
    }

    #[test]
    fn first_character_must_be_uppercase() {
        assert_eq!(
            validate(&values(Some("1Acme"), Some("London"), Some("GB"), None)),
            Err(Error::CaseViolation(Field::Organisation))
        );
        assert_eq!(
            validate(&values(Some(" Acme"), Some("London"), Some("GB"), None)),
            Err(Error::CaseViolation(Field::Organisation))
        );
        assert_eq!(
            validate(&values(Some("Élan"), Some("London"), Some("GB"), None)),
            Ok(())
        );
    }

    #[test]
    fn rejects_trailing_whitespace() {
        assert_eq!(
            validate(&values(Some("Acme"), Some("London\t"), Some("GB"), None)),
            Err(Error::WhitespaceViolation(Field::Locality))
        );
    }

    #[test]
    fn rejects_edge_information_separators() {
        assert_eq!(
            validate(&values(Some("Acme\u{1f}"), Some("London"), Some("GB"), None)),
            Err(Error::WhitespaceViolation(Field::Organisation))
        );
        assert_eq!(
            validate(&values(Some("Acme"), Some("London"), Some("GB"), Some("Essex\u{1c}"))),
            Err(Error::WhitespaceViolation(Field::State))
        );
        assert_eq!(
            validate(&values(Some("Ac\u{1d}me"), Some("London"), Some("GB"), None)),
            Ok(())
        );
    }

    #[test]
    fn rejects_every_forbidden_character() {
        for forbidden in [',', '=', '$', '"', '\'', '\\'] {
            let organisation = format!("Acme{forbidden}Corp");

            assert_eq!(
                validate(&values(Some(organisation.as_str()), Some("London"), Some("GB"), None)),
                Err(Error::InvalidCharacter(Field::Organisation)),
                "{forbidden}"
            );
        }
    }

    #[test]
    fn allows_other_punctuation() {
        assert_eq!(
            validate(&values(Some("R&D (UK) Ltd."), Some("London"), Some("GB"), None)),
            Ok(())
        );
    }

    #[test]
    fn rejects_null_character() {
        assert_eq!(
            validate(&values(Some("Acme"), Some("London"), Some("GB"), Some("Ess\0ex"))),
            Err(Error::NullCharacter(Field::State))
        );
    }
}
