use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The fixed set of doctor personas shown on the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DoctorId {
    DrSarah,
    DrMarcus,
    DrElena,
    DrJames,
    DrGabriel,
    DrRaj,
}

impl DoctorId {
    /// Every identifier, in catalog order.
    pub const ALL: [DoctorId; 6] = [
        DoctorId::DrSarah,
        DoctorId::DrMarcus,
        DoctorId::DrElena,
        DoctorId::DrJames,
        DoctorId::DrGabriel,
        DoctorId::DrRaj,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DoctorId::DrSarah => "dr-sarah",
            DoctorId::DrMarcus => "dr-marcus",
            DoctorId::DrElena => "dr-elena",
            DoctorId::DrJames => "dr-james",
            DoctorId::DrGabriel => "dr-gabriel",
            DoctorId::DrRaj => "dr-raj",
        }
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoctorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DoctorId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownDoctor {
                doctor_id: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DoctorProfile {
    pub id: DoctorId,
    pub name: &'static str,
    pub specialty: &'static str,
    /// Text-to-image prompt used to synthesize the portrait.
    pub prompt: &'static str,
    pub fallback_url: &'static str,
}
