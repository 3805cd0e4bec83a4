//! Student model.

use serde::{Deserialize, Serialize};

use super::CallType;

/// A student and the calls it must receive this week.
///
/// The requirement vector is processed in order; each entry becomes one call
/// on a distinct weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Opaque student identifier.
    pub id: String,
    /// Required call types, in scheduling order.
    pub requirements: Vec<CallType>,
}

impl Student {
    /// Creates a student with the standard weekly quota.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            requirements: CallType::WEEKLY_QUOTA.to_vec(),
        }
    }

    /// Replaces the requirement vector.
    pub fn with_requirements(mut self, requirements: impl Into<Vec<CallType>>) -> Self {
        self.requirements = requirements.into();
        self
    }

    /// Number of calls this student needs.
    #[inline]
    pub fn call_count(&self) -> usize {
        self.requirements.len()
    }
}
