//! Medication list synchronization.
//!
//! `medications_list` is the only variable-length collection on the form.
//! Its length is driven by the separately answered `num_medications`, and the
//! two must agree before any entry is shown, edited, or committed.

use intake_core::models::medication::MedicationEntry;

/// Count assumed when the patient has not answered `num_medications` yet.
pub const DEFAULT_MEDICATION_COUNT: usize = 1;

/// Resize `list` to exactly `count` entries.
///
/// Missing entries are appended empty (blank name and dose, first frequency
/// option). Entries past `count` are dropped. Entries at shared indices are
/// left untouched.
pub fn synchronize(list: &mut Vec<MedicationEntry>, count: usize) {
    if list.len() != count {
        tracing::debug!(from = list.len(), to = count, "resizing medication list");
    }
    list.resize_with(count, MedicationEntry::default);
}

/// Non-mutating variant of [`synchronize`].
pub fn synchronized(list: &[MedicationEntry], count: usize) -> Vec<MedicationEntry> {
    let mut out: Vec<MedicationEntry> = list.iter().take(count).cloned().collect();
    synchronize(&mut out, count);
    out
}
