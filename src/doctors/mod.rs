mod types;

pub use types::*;

use std::collections::BTreeMap;

/// Fallback photos keyed by doctor, in catalog order.
pub type FallbackCatalog = BTreeMap<DoctorId, &'static str>;

// Indexed by `DoctorId as usize`; order must match `DoctorId::ALL`.
static PROFILES: [DoctorProfile; 6] = [
    DoctorProfile {
        id: DoctorId::DrSarah,
        name: "Dr. Sarah Chen",
        specialty: "Cardiology",
        prompt: "Professional headshot portrait of a friendly Asian female cardiologist in her 40s, \
                 wearing a white coat with a stethoscope, warm smile, modern hospital background, \
                 soft natural lighting, photorealistic",
        fallback_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400&fit=crop&crop=face",
    },
    DoctorProfile {
        id: DoctorId::DrMarcus,
        name: "Dr. Marcus Johnson",
        specialty: "Neurology",
        prompt: "Professional headshot portrait of a confident Black male neurologist in his 50s, \
                 wearing a white coat over a blue shirt, calm expression, clinic office background, \
                 soft natural lighting, photorealistic",
        fallback_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face",
    },
    DoctorProfile {
        id: DoctorId::DrElena,
        name: "Dr. Elena Rodriguez",
        specialty: "Pediatrics",
        prompt: "Professional headshot portrait of a cheerful Hispanic female pediatrician in her 30s, \
                 wearing light blue scrubs, gentle smile, bright pediatric clinic background, \
                 soft natural lighting, photorealistic",
        fallback_url: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?w=400&h=400&fit=crop&crop=face",
    },
    DoctorProfile {
        id: DoctorId::DrJames,
        name: "Dr. James Wilson",
        specialty: "Orthopedics",
        prompt: "Professional headshot portrait of an experienced Caucasian male orthopedic surgeon \
                 in his 60s, grey hair, wearing a white coat, reassuring expression, hospital \
                 corridor background, soft natural lighting, photorealistic",
        fallback_url: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?w=400&h=400&fit=crop&crop=face",
    },
    DoctorProfile {
        id: DoctorId::DrGabriel,
        name: "Dr. Gabriel Santos",
        specialty: "Dermatology",
        prompt: "Professional headshot portrait of a friendly Brazilian male dermatologist in his \
                 30s, short dark hair, wearing a white coat, approachable smile, modern clinic \
                 background, soft natural lighting, photorealistic",
        fallback_url: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?w=400&h=400&fit=crop&crop=face",
    },
    DoctorProfile {
        id: DoctorId::DrRaj,
        name: "Dr. Raj Patel",
        specialty: "Radiology",
        prompt: "Professional headshot portrait of a thoughtful South Asian male radiologist in his \
                 40s, wearing glasses and a white coat, attentive expression, imaging suite \
                 background, soft natural lighting, photorealistic",
        fallback_url: "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400&h=400&fit=crop&crop=face",
    },
];

impl DoctorId {
    pub fn profile(self) -> &'static DoctorProfile {
        &PROFILES[self as usize]
    }

    pub fn fallback_url(self) -> &'static str {
        self.profile().fallback_url
    }
}

pub fn profiles() -> &'static [DoctorProfile] {
    &PROFILES
}

pub fn fallback_photos() -> FallbackCatalog {
    DoctorId::ALL
        .into_iter()
        .map(|id| (id, id.fallback_url()))
        .collect()
}
