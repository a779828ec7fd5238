use intake_core::fields::demographics as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{DateBounds, FieldKind, FieldSpec};

pub const SEX_OPTIONS: [&str; 4] = ["Male", "Female", "Other", "Prefer not to say"];
pub const RELATION_OPTIONS: [&str; 5] = ["Spouse", "Child", "Sibling", "Friend", "Other"];
pub const LANGUAGE_OPTIONS: [&str; 3] = ["English", "French", "Other"];

/// Personal information: identity, contact and emergency contact.
pub struct Demographics;

impl Questionnaire for Demographics {
    fn section(&self) -> Section {
        Section::Demographics
    }

    fn introduction(&self) -> &str {
        "Please provide your basic information. All fields are important for your care."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let birth_dates = DateBounds {
                min: Some(jiff::civil::date(1900, 1, 1)),
                not_after_today: true,
            };

            vec![
                FieldSpec::text(f::FIRST_NAME, "First Name", "First Name"),
                FieldSpec::text(f::LAST_NAME, "Last Name", "Last Name"),
                FieldSpec::new(
                    f::DATE_OF_BIRTH,
                    "Date of Birth",
                    "Date of Birth",
                    FieldKind::Date {
                        bounds: birth_dates,
                    },
                ),
                FieldSpec::choice(f::SEX, "Sex", "Sex", &SEX_OPTIONS),
                FieldSpec::text(f::PHONE, "Phone", "Phone Number"),
                FieldSpec::text(f::HEALTH_CARD, "Health Card", "Health Card Number (RAMQ)"),
                FieldSpec::text(
                    f::EMERGENCY_NAME,
                    "Emergency Contact",
                    "Emergency Contact Name",
                ),
                FieldSpec::choice(
                    f::EMERGENCY_RELATION,
                    "Relationship",
                    "Relationship",
                    &RELATION_OPTIONS,
                ),
                FieldSpec::text(
                    f::EMERGENCY_PHONE,
                    "Emergency Phone",
                    "Emergency Contact Phone",
                ),
                FieldSpec::choice(
                    f::PREFERRED_LANGUAGE,
                    "Preferred Language",
                    "Preferred Language",
                    &LANGUAGE_OPTIONS,
                ),
            ]
        });
        &FIELDS
    }
}
