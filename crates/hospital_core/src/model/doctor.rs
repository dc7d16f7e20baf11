//! Doctor record.

use crate::model::DoctorId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One registered doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(
        id: impl Into<DoctorId>,
        name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

impl Display for Doctor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Doctor: {}, ID: {}, Specialty: {}",
            self.name, self.id, self.specialty
        )
    }
}
