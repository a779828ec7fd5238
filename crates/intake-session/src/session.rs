use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::MedicationEntry;
use intake_core::models::record::PatientRecord;
use intake_core::models::section::Section;
use jiff::civil::Date;
use uuid::Uuid;

use crate::error::SessionError;
use crate::event::IntakeEvent;
use crate::navigation::{Navigator, Progress, Step};
use crate::store::AnswerStore;

/// Everything one patient's pass through the form owns: the answers, the
/// active step, the review confirmation and the submitted flag.
///
/// There is no ambient state; the host owns the session value and feeds it
/// events. Once submitted, the session only accepts [`IntakeEvent::Reset`].
#[derive(Debug, Clone)]
pub struct IntakeSession {
    id: Uuid,
    store: AnswerStore,
    navigator: Navigator,
    confirmed: bool,
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, "intake session started");
        Self {
            id,
            store: AnswerStore::new(),
            navigator: Navigator::new(),
            confirmed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn record(&self) -> &PatientRecord {
        self.store.record()
    }

    pub fn store(&self) -> &AnswerStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn step(&self) -> Step {
        self.navigator.step()
    }

    pub fn progress(&self) -> Progress {
        self.navigator.progress()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn is_submitted(&self) -> bool {
        self.navigator.is_submitted()
    }

    pub fn answer(
        &mut self,
        section: Section,
        key: &str,
        value: AnswerValue,
    ) -> Result<(), SessionError> {
        if self.ignored_after_submit("answer") {
            return Ok(());
        }
        self.store.set(section, key, value)
    }

    /// Like [`answer`](Self::answer), with date bounds checked against
    /// `today` instead of the wall clock.
    pub fn answer_on(
        &mut self,
        section: Section,
        key: &str,
        value: AnswerValue,
        today: Date,
    ) -> Result<(), SessionError> {
        if self.ignored_after_submit("answer") {
            return Ok(());
        }
        self.store.set_on(section, key, value, today)
    }

    pub fn set_medication(
        &mut self,
        index: usize,
        entry: MedicationEntry,
    ) -> Result<(), SessionError> {
        if self.ignored_after_submit("medication") {
            return Ok(());
        }
        self.store.set_medication(index, entry)
    }

    pub fn advance(&mut self) -> bool {
        if self.ignored_after_submit("advance") {
            return false;
        }
        self.navigator.advance()
    }

    /// Step back. Leaving Review withdraws the confirmation, so it has to be
    /// given again after any further edits.
    pub fn retreat(&mut self) -> bool {
        if self.ignored_after_submit("retreat") {
            return false;
        }
        let moved = self.navigator.retreat();
        if moved && self.confirmed {
            self.confirmed = false;
            tracing::debug!(session = %self.id, "confirmation withdrawn on leaving review");
        }
        moved
    }

    /// Tick or untick the accuracy confirmation. Only offered on Review.
    pub fn confirm(&mut self, confirmed: bool) {
        if self.ignored_after_submit("confirm") {
            return;
        }
        if !self.navigator.is_review() {
            tracing::debug!(session = %self.id, "confirmation ignored outside review");
            return;
        }
        self.confirmed = confirmed;
    }

    /// Submit the form. A no-op unless on Review with confirmation given.
    pub fn submit(&mut self) -> bool {
        let submitted = self.navigator.submit(self.confirmed);
        if submitted {
            tracing::info!(session = %self.id, "intake form submitted");
        }
        submitted
    }

    /// Discard every answer and start over with a fresh session id.
    pub fn reset(&mut self) {
        tracing::info!(session = %self.id, "intake session reset");
        *self = Self::new();
    }

    /// Apply one host event.
    pub fn apply(&mut self, event: IntakeEvent) -> Result<(), SessionError> {
        match event {
            IntakeEvent::Answer {
                section,
                key,
                value,
            } => self.answer(section, &key, value)?,
            IntakeEvent::Medication { index, entry } => self.set_medication(index, entry)?,
            IntakeEvent::Advance => {
                self.advance();
            }
            IntakeEvent::Retreat => {
                self.retreat();
            }
            IntakeEvent::Confirm { confirmed } => self.confirm(confirmed),
            IntakeEvent::Submit => {
                self.submit();
            }
            IntakeEvent::Reset => self.reset(),
        }
        Ok(())
    }

    fn ignored_after_submit(&self, action: &str) -> bool {
        if self.navigator.is_submitted() {
            tracing::debug!(session = %self.id, action, "ignored after submission");
            return true;
        }
        false
    }
}

/// Reducer form of [`IntakeSession::apply`]: `(state, event) -> state`.
pub fn reduce(mut session: IntakeSession, event: IntakeEvent) -> Result<IntakeSession, SessionError> {
    session.apply(event)?;
    Ok(session)
}
