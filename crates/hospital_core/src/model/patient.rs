//! Patient record.

use crate::model::PatientId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One registered patient.
///
/// `age` and `medical_history` are stored exactly as supplied; the registry
/// performs no range or content checks on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: i64,
    /// Free-text history, may be empty.
    pub medical_history: String,
}

impl Patient {
    pub fn new(
        id: impl Into<PatientId>,
        name: impl Into<String>,
        age: i64,
        medical_history: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            medical_history: medical_history.into(),
        }
    }
}

/// Summary detail line.
impl Display for Patient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient: {}, ID: {}, Age: {}, History: {}",
            self.name, self.id, self.age, self.medical_history
        )
    }
}
