//! X.500 distinguished names as used to identify conveyancers.
//!
//! A name is held as six attributes and stored as its canonical string,
//! e.g. `O=Acme,L=London,C=GB,ST=England,OU=R&D,CN=Node1`. Only the keys
//! `O`, `L`, `C`, `ST`, `OU` and `CN` are understood, always written in that
//! order, without escaping.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod error;
pub mod field;
pub mod validate;

pub use error::Error;
pub use field::Field;
use validate::validate;

/// A validated, immutable X.500 name.
///
/// Obtained through [`X500Name::builder`], [`X500Name::try_from`] on
/// [`X500Fields`] or by parsing a canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct X500Name {
    organisation: String,
    locality: String,
    country: String,
    state: Option<String>,
    organisational_unit: Option<String>,
    common_name: Option<String>,
}

/// Unvalidated attribute values, keyed by attribute name.
///
/// This is the structured form used for JSON input and output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct X500Fields {
    #[serde(default)]
    pub organisation: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub organisational_unit: Option<String>,
    #[serde(default)]
    pub common_name: Option<String>,
}

impl X500Fields {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Organisation => self.organisation.as_deref(),
            Field::Locality => self.locality.as_deref(),
            Field::Country => self.country.as_deref(),
            Field::State => self.state.as_deref(),
            Field::OrganisationalUnit => self.organisational_unit.as_deref(),
            Field::CommonName => self.common_name.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());

        match field {
            Field::Organisation => self.organisation = value,
            Field::Locality => self.locality = value,
            Field::Country => self.country = value,
            Field::State => self.state = value,
            Field::OrganisationalUnit => self.organisational_unit = value,
            Field::CommonName => self.common_name = value,
        }
    }

    fn values(&self) -> [(Field, Option<&str>); 6] {
        Field::ALL.map(|field| (field, self.get(field)))
    }
}

#[derive(Debug)]
pub struct Builder {
    fields: X500Fields,
}

impl Builder {
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.fields.set(Field::State, state);
        self
    }

    pub fn organisational_unit(mut self, organisational_unit: impl Into<String>) -> Self {
        self.fields.set(Field::OrganisationalUnit, organisational_unit);
        self
    }

    pub fn common_name(mut self, common_name: impl Into<String>) -> Self {
        self.fields.set(Field::CommonName, common_name);
        self
    }

    pub fn build(self) -> Result<X500Name, Error> {
        X500Name::try_from(self.fields)
    }
}

impl X500Name {
    pub fn builder(
        organisation: impl Into<String>,
        locality: impl Into<String>,
        country: impl Into<String>,
    ) -> Builder {
        let mut fields = X500Fields::default();

        fields.set(Field::Organisation, organisation);
        fields.set(Field::Locality, locality);
        fields.set(Field::Country, country);

        Builder { fields }
    }

    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn organisational_unit(&self) -> Option<&str> {
        self.organisational_unit.as_deref()
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Organisation => Some(self.organisation()),
            Field::Locality => Some(self.locality()),
            Field::Country => Some(self.country()),
            Field::State => self.state(),
            Field::OrganisationalUnit => self.organisational_unit(),
            Field::CommonName => self.common_name(),
        }
    }

    /// Canonical string form, validated once more before it is produced.
    pub fn to_canonical(&self) -> Result<String, Error> {
        let values = Field::ALL.map(|field| (field, self.get(field)));

        validate(&values)?;

        let canonical = values
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| format!("{}={value}", field.key())))
            .collect::<Vec<_>>()
            .join(",");

        Ok(canonical)
    }

    pub fn to_fields(&self) -> X500Fields {
        X500Fields {
            organisation: Some(self.organisation.clone()),
            locality: Some(self.locality.clone()),
            country: Some(self.country.clone()),
            state: self.state.clone(),
            organisational_unit: self.organisational_unit.clone(),
            common_name: self.common_name.clone(),
        }
    }
}

impl TryFrom<X500Fields> for X500Name {
    type Error = Error;

    fn try_from(fields: X500Fields) -> Result<Self, Self::Error> {
        validate(&fields.values())?;

        let present = |value: Option<String>| value.filter(|value| !value.is_empty());

        Ok(Self {
            organisation: fields.organisation.unwrap_or_default(),
            locality: fields.locality.unwrap_or_default(),
            country: fields.country.unwrap_or_default(),
            state: present(fields.state),
            organisational_unit: present(fields.organisational_unit),
            common_name: present(fields.common_name),
        })
    }
}

impl FromStr for X500Name {
    type Err = Error;

    /// Parses comma separated `KEY=VALUE` tokens.
    ///
    /// Spaces are removed from keys but kept in values. Unknown keys are
    /// ignored and a repeated key keeps its last value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = X500Fields::default();

        for token in s.split(',') {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| Error::MalformedToken(token.to_owned()))?;

            if let Some(field) = Field::from_key(&key.replace(' ', "")) {
                fields.set(field, value);
            }
        }

        Self::try_from(fields)
    }
}

impl std::fmt::Display for X500Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let canonical = self.to_canonical().map_err(|_| std::fmt::Error)?;

        f.write_str(&canonical)
    }
}
