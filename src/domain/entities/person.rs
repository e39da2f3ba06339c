//! Person entity produced by the person source.

/// The randomly generated subject of a profile.
///
/// Text fields are already normalized: absent upstream values hold `"N/A"`,
/// except `picture_url` which is empty when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub picture_url: String,
    pub age: Option<u32>,
    pub date_of_birth: String,
    pub city: String,
    pub country_name: String,
    pub full_address: String,
}
