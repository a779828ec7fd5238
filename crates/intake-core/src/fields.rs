//! Field keys, grouped by section.
//!
//! These are the only keys the answer store accepts. The section schemas in
//! `intake-sections` declare one field for every constant here.

pub mod demographics {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const SEX: &str = "sex";
    pub const PHONE: &str = "phone";
    pub const HEALTH_CARD: &str = "health_card";
    pub const EMERGENCY_NAME: &str = "emergency_name";
    pub const EMERGENCY_RELATION: &str = "emergency_relation";
    pub const EMERGENCY_PHONE: &str = "emergency_phone";
    pub const PREFERRED_LANGUAGE: &str = "preferred_language";
}

pub mod symptoms {
    pub const PAIN: &str = "pain";
    pub const DIZZINESS: &str = "dizziness";
    pub const FATIGUE: &str = "fatigue";
    pub const BREATHING: &str = "breathing";
    pub const SLEEP: &str = "sleep";
    pub const APPETITE: &str = "appetite";
    pub const VISION: &str = "vision";
    pub const HEARING: &str = "hearing";
    pub const BALANCE: &str = "balance";
    pub const FALLS: &str = "falls";
    pub const PAIN_LOCATION: &str = "pain_location";
    pub const PAIN_LEVEL: &str = "pain_level";
    pub const FALLS_COUNT: &str = "falls_count";
    pub const OTHER_SYMPTOMS: &str = "other_symptoms";
}

pub mod cognitive {
    pub const TODAY_DATE: &str = "today_date";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    pub const SEASON: &str = "season";
    pub const CURRENT_YEAR: &str = "current_year";
    pub const HOSPITAL_NAME: &str = "hospital_name";
    pub const CITY: &str = "city";
    pub const FORGET_NAMES: &str = "forget_names";
    pub const FORGET_APPOINTMENTS: &str = "forget_appointments";
    pub const LOSE_ITEMS: &str = "lose_items";
    pub const REPEAT_QUESTIONS: &str = "repeat_questions";
    pub const DIFFICULTY_DECISIONS: &str = "difficulty_decisions";
    pub const GET_LOST: &str = "get_lost";
    pub const OTHER_CONCERNS: &str = "other_concerns";
}

pub mod medications {
    pub const TAKING_MEDICATIONS: &str = "taking_medications";
    pub const NUM_MEDICATIONS: &str = "num_medications";
    pub const MEDICATIONS_LIST: &str = "medications_list";
    pub const NEEDS_HELP: &str = "needs_help";
    pub const MISS_DOSES: &str = "miss_doses";
    pub const HAS_ALLERGIES: &str = "has_allergies";
    pub const ALLERGIES_LIST: &str = "allergies_list";
}

pub mod adl {
    pub const BATHING: &str = "bathing";
    pub const DRESSING: &str = "dressing";
    pub const TOILETING: &str = "toileting";
    pub const TRANSFERRING: &str = "transferring";
    pub const CONTINENCE: &str = "continence";
    pub const FEEDING: &str = "feeding";
    pub const USES_MOBILITY_AIDS: &str = "uses_mobility_aids";
    pub const MOBILITY_AIDS_LIST: &str = "mobility_aids_list";
}

pub mod iadl {
    pub const TELEPHONE: &str = "telephone";
    pub const SHOPPING: &str = "shopping";
    pub const FOOD_PREP: &str = "food_prep";
    pub const HOUSEKEEPING: &str = "housekeeping";
    pub const LAUNDRY: &str = "laundry";
    pub const TRANSPORTATION: &str = "transportation";
    pub const MEDICATIONS: &str = "medications";
    pub const FINANCES: &str = "finances";
    pub const LIVING_SITUATION: &str = "living_situation";
    pub const HAS_CAREGIVER: &str = "has_caregiver";
    pub const CAREGIVER_RELATION: &str = "caregiver_relation";
}

pub mod medical_history {
    pub const HEART_DISEASE: &str = "heart_disease";
    pub const HIGH_BLOOD_PRESSURE: &str = "high_blood_pressure";
    pub const DIABETES: &str = "diabetes";
    pub const STROKE: &str = "stroke";
    pub const CANCER: &str = "cancer";
    pub const ARTHRITIS: &str = "arthritis";
    pub const OSTEOPOROSIS: &str = "osteoporosis";
    pub const LUNG_DISEASE: &str = "lung_disease";
    pub const KIDNEY_DISEASE: &str = "kidney_disease";
    pub const DEPRESSION: &str = "depression";
    pub const DEMENTIA: &str = "dementia";
    pub const PARKINSONS: &str = "parkinsons";
    pub const HAD_SURGERIES: &str = "had_surgeries";
    pub const SURGERIES_LIST: &str = "surgeries_list";
    pub const HOSPITALIZED_PAST_YEAR: &str = "hospitalized_past_year";
    pub const HOSPITALIZATION_REASON: &str = "hospitalization_reason";
    pub const OTHER_CONDITIONS: &str = "other_conditions";
}
