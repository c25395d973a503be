use super::id::Id;
use super::x500::{self, X500Fields, X500Name};
use serde::Serialize;

pub const COMPANY_NAME_MAX_CHAR_COUNT: usize = 256;

#[derive(Debug)]
pub struct CompanyName(String);

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CompanyName {
    pub fn parse(company_name: impl Into<String>) -> Result<Self, ()> {
        let company_name = company_name.into();

        if company_name.trim().is_empty() {
            return Err(());
        }

        if company_name.chars().count() > COMPANY_NAME_MAX_CHAR_COUNT {
            return Err(());
        }

        Ok(Self(company_name))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Conveyancer {
    pub conveyancer_id: Id,
    pub x500: X500Fields,
    pub x500_string: String,
    pub company_name: String,
}

impl Conveyancer {
    pub fn new(
        conveyancer_id: Id,
        x500_name: &X500Name,
        company_name: impl Into<String>,
    ) -> Result<Self, x500::Error> {
        Ok(Self {
            conveyancer_id,
            x500: x500_name.to_fields(),
            x500_string: x500_name.to_canonical()?,
            company_name: company_name.into(),
        })
    }

    /// Fails when the stored name no longer parses.
    pub fn from_raw(raw: RawConveyancer) -> Result<Self, x500::Error> {
        let x500_name = raw.x500_name.parse::<X500Name>()?;

        Self::new(raw.conveyancer_id, &x500_name, raw.company_name)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawConveyancer {
    pub conveyancer_id: Id,
    pub x500_name: String,
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::{CompanyName, Conveyancer, RawConveyancer};
    use crate::types::x500::{Error, Field};

    fn raw(x500_name: &str) -> RawConveyancer {
        RawConveyancer {
            conveyancer_id: 5,
            x500_name: x500_name.to_owned(),
            company_name: "Acme Conveyancing".to_owned(),
        }
    }

    #[test]
    fn projects_structured_and_canonical_name() {
        let conveyancer =
            Conveyancer::from_raw(raw("O=Acme,L=London,C=GB,CN=Node1")).unwrap();
        let json = serde_json::to_value(conveyancer).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "conveyancer_id": 5,
                "x500": {
                    "organisation": "Acme",
                    "locality": "London",
                    "country": "GB",
                    "state": null,
                    "organisational_unit": null,
                    "common_name": "Node1",
                },
                "x500_string": "O=Acme,L=London,C=GB,CN=Node1",
                "company_name": "Acme Conveyancing",
            })
        );
    }

    #[test]
    fn stored_name_is_re_serialized_canonically() {
        let conveyancer = Conveyancer::from_raw(raw("C=GB, L=London, O=Acme")).unwrap();

        assert_eq!(conveyancer.x500_string, "O=Acme,L=London,C=GB");
    }

    #[test]
    fn invalid_stored_name_is_an_error() {
        assert_eq!(
            Conveyancer::from_raw(raw("O=Acme,L=London")).unwrap_err(),
            Error::MissingField(Field::Country)
        );
    }

    #[test]
    fn company_name_must_not_be_blank() {
        assert!(CompanyName::parse("   ").is_err());
        assert!(CompanyName::parse("A".repeat(257)).is_err());
        assert_eq!(CompanyName::parse("Acme").unwrap().as_ref(), "Acme");
    }
}
