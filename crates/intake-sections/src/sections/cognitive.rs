use intake_core::fields::cognitive as f;
use intake_core::models::section::Section;

use crate::Questionnaire;
use crate::domain::{DateBounds, FieldKind, FieldSpec, IntRange, ResponseScale};

pub const DAY_OPTIONS: [&str; 8] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
    "I'm not sure",
];
pub const SEASON_OPTIONS: [&str; 5] = ["Spring", "Summer", "Fall", "Winter", "I'm not sure"];

/// Memory and thinking: orientation questions (MMSE-style) followed by
/// self-reported memory concerns.
pub struct Cognitive;

impl Questionnaire for Cognitive {
    fn section(&self) -> Section {
        Section::Cognitive
    }

    fn introduction(&self) -> &str {
        "These questions help us understand your memory and thinking. Please answer as best as you can. It is okay if you are not sure."
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let mut fields = vec![
                // Orientation
                FieldSpec::new(
                    f::TODAY_DATE,
                    "Today's date",
                    "What is today's date?",
                    FieldKind::Date {
                        bounds: DateBounds {
                            min: None,
                            not_after_today: false,
                        },
                    },
                ),
                FieldSpec::choice(
                    f::DAY_OF_WEEK,
                    "Day of the week",
                    "What day of the week is it?",
                    &DAY_OPTIONS,
                ),
                FieldSpec::choice(f::SEASON, "Season", "What season is it?", &SEASON_OPTIONS),
                FieldSpec::integer(
                    f::CURRENT_YEAR,
                    "Year",
                    "What year is it?",
                    IntRange::new(2000, 2030),
                ),
                FieldSpec::text(
                    f::HOSPITAL_NAME,
                    "Hospital",
                    "What is the name of this hospital?",
                ),
                FieldSpec::text(f::CITY, "City", "What city are we in?"),
            ];

            let memory = [
                (
                    f::FORGET_NAMES,
                    "Forgets names",
                    "Do you often forget names of people you know?",
                ),
                (
                    f::FORGET_APPOINTMENTS,
                    "Forgets appointments",
                    "Do you forget appointments or important dates?",
                ),
                (
                    f::LOSE_ITEMS,
                    "Misplaces items",
                    "Do you frequently misplace items (keys, glasses, etc.)?",
                ),
                (
                    f::REPEAT_QUESTIONS,
                    "Repeats questions",
                    "Has anyone told you that you repeat questions or stories?",
                ),
                (
                    f::DIFFICULTY_DECISIONS,
                    "Difficulty with decisions",
                    "Do you find it harder to make decisions than before?",
                ),
                (
                    f::GET_LOST,
                    "Gets lost in familiar places",
                    "Do you ever get lost in familiar places?",
                ),
            ];
            fields.extend(memory.iter().map(|(key, label, question)| {
                FieldSpec::response(key, label, question, ResponseScale::YesNoSometimes)
            }));

            fields.push(FieldSpec::text(
                f::OTHER_CONCERNS,
                "Other concerns",
                "Do you have any other concerns about your memory or thinking?",
            ));
            fields
        });
        &FIELDS
    }
}
