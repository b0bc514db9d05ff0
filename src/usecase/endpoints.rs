use crate::usecase::ports::api::{EnvelopeKind, FetchDescriptor};

pub const MEDICINES: FetchDescriptor = FetchDescriptor {
    path: "/medicines",
    envelope: EnvelopeKind::Data,
    defaults: &[],
};

pub const TOP_MANUFACTURERS: FetchDescriptor = FetchDescriptor {
    path: "/manufacturers/top",
    envelope: EnvelopeKind::Data,
    defaults: &[("top_n", "50")],
};

pub const PRICES: FetchDescriptor = FetchDescriptor {
    path: "/prices",
    envelope: EnvelopeKind::Data,
    defaults: &[],
};

pub const CATEGORIES: FetchDescriptor = FetchDescriptor {
    path: "/categories",
    envelope: EnvelopeKind::Data,
    defaults: &[],
};

pub const DISTRIBUTION: FetchDescriptor = FetchDescriptor {
    path: "/distribution",
    envelope: EnvelopeKind::Data,
    defaults: &[("limit", "25")],
};

pub const REGISTRATION_TIMELINE: FetchDescriptor = FetchDescriptor {
    path: "/registrations/timeline",
    envelope: EnvelopeKind::Chart,
    defaults: &[],
};

pub const OVERVIEW: FetchDescriptor = FetchDescriptor {
    path: "/overview",
    envelope: EnvelopeKind::Metrics,
    defaults: &[],
};

/// Filter parameter names shared by several views.
pub mod params {
    pub const DRUG_TYPE: &str = "drugtype";
    pub const COUNTRY: &str = "country";
    pub const AREA: &str = "area";
    pub const TOP_N: &str = "top_n";
    pub const LIMIT: &str = "limit";
}
