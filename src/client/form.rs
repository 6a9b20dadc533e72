use time::Date;

use crate::catalog::store::Course;
use crate::client::drafts::DraftStore;
use crate::schemas::enrollment::{EnrollmentFormData, EnrollmentPayload};
use crate::services::enrollment::{self, FieldError};

/// Where the two-step enrollment form currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStep {
    Identity,
    Profile,
    Submitted,
}

/// Enrollment form session for one course: accumulates field edits, persists
/// them as a draft, and gates step transitions on the same validation the
/// submission endpoint applies.
pub struct EnrollmentForm {
    course_id: String,
    course_name: String,
    course_code: String,
    data: EnrollmentFormData,
    step: EnrollmentStep,
    drafts: DraftStore,
}

impl EnrollmentForm {
    /// Open the form for a course, resuming any saved draft.
    pub fn open(course: &Course, drafts: DraftStore) -> Self {
        let data = drafts.load(&course.id).unwrap_or_default();
        Self {
            course_id: course.id.clone(),
            course_name: course.title.clone(),
            course_code: course.code.clone(),
            data,
            step: EnrollmentStep::Identity,
            drafts,
        }
    }

    pub fn step(&self) -> EnrollmentStep {
        self.step
    }

    pub fn data(&self) -> &EnrollmentFormData {
        &self.data
    }

    /// Apply field edits and persist the draft.
    pub fn update(&mut self, patch: EnrollmentFormData) {
        self.data.merge(patch);
        self.drafts.save(&self.course_id, &self.data);
    }

    /// Validate the current step and move forward. On a validation error the
    /// step does not change and the entered data is kept. A validated profile
    /// step stays at `Profile`: the form is ready to submit, and only
    /// [`complete`](Self::complete) marks it `Submitted`.
    pub fn advance(&mut self, today: Date) -> Result<EnrollmentStep, FieldError> {
        match self.step {
            EnrollmentStep::Identity => {
                enrollment::validate_identity(&self.data, today)?;
                self.step = EnrollmentStep::Profile;
            }
            EnrollmentStep::Profile => {
                enrollment::validate_profile(&self.data)?;
            }
            EnrollmentStep::Submitted => {}
        }
        Ok(self.step)
    }

    /// Record that the server accepted the submission. The draft is dropped
    /// only here; a failed submission leaves it intact for another attempt.
    pub fn complete(&mut self) {
        self.step = EnrollmentStep::Submitted;
        self.drafts.clear(&self.course_id);
    }

    /// Step back from profile to identity. Entered data stays.
    pub fn back(&mut self) {
        if self.step == EnrollmentStep::Profile {
            self.step = EnrollmentStep::Identity;
        }
    }

    /// The submission body for the current form state.
    pub fn payload(&self) -> EnrollmentPayload {
        EnrollmentPayload {
            course_id: Some(self.course_id.clone()),
            course_name: Some(self.course_name.clone()),
            course_code: Some(self.course_code.clone()),
            full_name: self.data.full_name.clone(),
            email: self.data.email.clone(),
            phone: self.data.phone.clone(),
            date_of_birth: self.data.date_of_birth.clone(),
            qualification: self.data.qualification.clone(),
            join_reason: self.data.join_reason.clone(),
            source: self.data.source.clone(),
            agreed_to_terms: self.data.agreed_to_terms,
        }
    }
}
