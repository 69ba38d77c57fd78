use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Legal status of the applicant at the time of application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CitizenshipStatus {
    Citizen,
    LegalResident,
    Neither,
}

impl CitizenshipStatus {
    /// Citizens and legal residents qualify.
    pub fn qualifies(self) -> bool {
        self != CitizenshipStatus::Neither
    }
}

/// Personal facts eligibility is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EligibilityInput {
    pub birth_date: NaiveDate,
    pub citizenship: CitizenshipStatus,
    /// The "today" at which age is measured.
    pub reference_date: NaiveDate,
}

impl EligibilityInput {
    pub fn new(
        birth_date: NaiveDate,
        citizenship: CitizenshipStatus,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            birth_date,
            citizenship,
            reference_date,
        }
    }
}
