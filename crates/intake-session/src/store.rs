use intake_core::fields::medications as meds;
use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::MedicationEntry;
use intake_core::models::record::PatientRecord;
use intake_core::models::section::Section;
use intake_sections::get_section;
use jiff::civil::Date;

use crate::error::SessionError;
use crate::medications::{DEFAULT_MEDICATION_COUNT, synchronize};

/// Keyed answer storage for one patient record.
///
/// Every write is validated against the section schema and canonicalized
/// before it lands in the record, so readers never see an unknown key or an
/// out-of-domain value. Writes touching the medication count or list run the
/// synchronizer so `medications_list` always matches `num_medications`.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    record: PatientRecord,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    pub fn into_record(self) -> PatientRecord {
        self.record
    }

    pub fn get(&self, section: Section, key: &str) -> Option<&AnswerValue> {
        self.record.get(section, key)
    }

    /// Upsert an answer, validating date bounds against the local calendar
    /// date.
    pub fn set(
        &mut self,
        section: Section,
        key: &str,
        value: AnswerValue,
    ) -> Result<(), SessionError> {
        self.set_on(section, key, value, jiff::Zoned::now().date())
    }

    /// Upsert an answer, validating date bounds against `today`.
    pub fn set_on(
        &mut self,
        section: Section,
        key: &str,
        value: AnswerValue,
        today: Date,
    ) -> Result<(), SessionError> {
        let value = get_section(section).check_answer(key, value, today)?;

        match (section, key) {
            (Section::Medications, meds::NUM_MEDICATIONS) => {
                self.record.put(section, key, value);
                self.sync_medications();
            }
            (Section::Medications, meds::MEDICATIONS_LIST) => {
                if self.stored_medication_count().is_none()
                    && let Some(list) = value.as_medications()
                    && !list.is_empty()
                {
                    // A committed list without a count defines the count.
                    self.record.put(
                        section,
                        meds::NUM_MEDICATIONS,
                        AnswerValue::Integer(list.len() as i64),
                    );
                }
                self.record.put(section, key, value);
                self.sync_medications();
            }
            _ => self.record.put(section, key, value),
        }

        tracing::debug!(section = %section, key, "answer stored");
        Ok(())
    }

    /// Replace the medication at `index`, synchronizing the list first.
    ///
    /// When no count has been answered the default count is stored with the
    /// entry, matching the initial value the count question presents. A
    /// rejected index leaves the record untouched.
    pub fn set_medication(
        &mut self,
        index: usize,
        entry: MedicationEntry,
    ) -> Result<(), SessionError> {
        let stored = self.stored_medication_count();
        let count = stored.unwrap_or(DEFAULT_MEDICATION_COUNT);

        let mut list = self.current_medications();
        synchronize(&mut list, count);

        let slot = list
            .get_mut(index)
            .ok_or(SessionError::MedicationIndex { index, count })?;
        *slot = entry;

        if stored.is_none() {
            self.record.put(
                Section::Medications,
                meds::NUM_MEDICATIONS,
                AnswerValue::Integer(count as i64),
            );
        }
        self.record.put(
            Section::Medications,
            meds::MEDICATIONS_LIST,
            AnswerValue::Medications(list),
        );
        tracing::debug!(index, count, "medication entry stored");
        Ok(())
    }

    /// The medication list as it would be displayed: synchronized to the
    /// stored count, or to the default count when none is stored.
    pub fn medications(&self) -> Vec<MedicationEntry> {
        let count = self
            .stored_medication_count()
            .unwrap_or(DEFAULT_MEDICATION_COUNT);
        crate::medications::synchronized(&self.current_medications(), count)
    }

    pub fn clear(&mut self) {
        self.record = PatientRecord::default();
    }

    fn stored_medication_count(&self) -> Option<usize> {
        self.record
            .integer(Section::Medications, meds::NUM_MEDICATIONS)
            .and_then(|n| usize::try_from(n).ok())
    }

    fn current_medications(&self) -> Vec<MedicationEntry> {
        self.record
            .medications(Section::Medications, meds::MEDICATIONS_LIST)
            .map(<[MedicationEntry]>::to_vec)
            .unwrap_or_default()
    }

    fn sync_medications(&mut self) {
        let Some(count) = self.stored_medication_count() else {
            return;
        };
        let mut list = self.current_medications();
        synchronize(&mut list, count);
        self.record.put(
            Section::Medications,
            meds::MEDICATIONS_LIST,
            AnswerValue::Medications(list),
        );
    }
}
