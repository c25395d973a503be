pub const ORGANISATION_MIN_CHAR_COUNT: usize = 2;
pub const ORGANISATION_MAX_CHAR_COUNT: usize = 128;

pub const COUNTRY_CHAR_COUNT: usize = 2;

pub const ATTRIBUTE_MIN_CHAR_COUNT: usize = 2;
pub const ATTRIBUTE_MAX_CHAR_COUNT: usize = 64;

/// One of the six attributes of an X.500 name, in canonical output order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Organisation,
    Locality,
    Country,
    State,
    OrganisationalUnit,
    CommonName,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Organisation,
        Self::Locality,
        Self::Country,
        Self::State,
        Self::OrganisationalUnit,
        Self::CommonName,
    ];

    pub fn is_required(self) -> bool {
        match self {
            Self::Organisation | Self::Locality | Self::Country => true,
            Self::State | Self::OrganisationalUnit | Self::CommonName => false,
        }
    }

    /// Inclusive character count bounds.
    pub fn char_count_bounds(self) -> (usize, usize) {
        match self {
            Self::Organisation => (ORGANISATION_MIN_CHAR_COUNT, ORGANISATION_MAX_CHAR_COUNT),
            Self::Country => (COUNTRY_CHAR_COUNT, COUNTRY_CHAR_COUNT),
            Self::Locality | Self::State | Self::OrganisationalUnit | Self::CommonName => {
                (ATTRIBUTE_MIN_CHAR_COUNT, ATTRIBUTE_MAX_CHAR_COUNT)
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            ORGANISATION_KEY => Some(Self::Organisation),
            LOCALITY_KEY => Some(Self::Locality),
            COUNTRY_KEY => Some(Self::Country),
            STATE_KEY => Some(Self::State),
            ORGANISATIONAL_UNIT_KEY => Some(Self::OrganisationalUnit),
            COMMON_NAME_KEY => Some(Self::CommonName),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Organisation => ORGANISATION_KEY,
            Self::Locality => LOCALITY_KEY,
            Self::Country => COUNTRY_KEY,
            Self::State => STATE_KEY,
            Self::OrganisationalUnit => ORGANISATIONAL_UNIT_KEY,
            Self::CommonName => COMMON_NAME_KEY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organisation => "organisation",
            Self::Locality => "locality",
            Self::Country => "country",
            Self::State => "state",
            Self::OrganisationalUnit => "organisational_unit",
            Self::CommonName => "common_name",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const ORGANISATION_KEY: &str = "O";
const LOCALITY_KEY: &str = "L";
const COUNTRY_KEY: &str = "C";
const STATE_KEY: &str = "ST";
const ORGANISATIONAL_UNIT_KEY: &str = "OU";
const COMMON_NAME_KEY: &str = "CN";
