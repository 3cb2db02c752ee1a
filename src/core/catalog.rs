//! Fixed site content consumed by the interactive components
//!
//! Everything here is immutable. Components copy what they need at
//! construction and only ever mutate their own selection or index state.

use super::selection::Selection;
use super::wizard::{FieldKind, FieldSpec, StepDefinition};

/// Field names of the demo request form
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const COMPANY: &str = "company";
    pub const JOB_TITLE: &str = "jobTitle";
    pub const COMPANY_SIZE: &str = "companySize";
    pub const INTERESTS: &str = "interests";
    pub const MESSAGE: &str = "message";
}

const YOUR_INFO: &[FieldSpec] = &[
    FieldSpec::required(fields::FIRST_NAME, "First Name", FieldKind::Text).with_placeholder("John"),
    FieldSpec::required(fields::LAST_NAME, "Last Name", FieldKind::Text).with_placeholder("Doe"),
    FieldSpec::required(fields::EMAIL, "Work Email", FieldKind::Email)
        .with_placeholder("john@company.com"),
    FieldSpec::optional(fields::PHONE, "Phone Number", FieldKind::Phone)
        .with_placeholder("+1 (555) 123-4567"),
];

const COMPANY_DETAILS: &[FieldSpec] = &[
    FieldSpec::required(fields::COMPANY, "Company Name", FieldKind::Text)
        .with_placeholder("Acme Inc."),
    FieldSpec::required(fields::JOB_TITLE, "Job Title", FieldKind::Text)
        .with_placeholder("VP of Marketing"),
    FieldSpec::required(fields::COMPANY_SIZE, "Company Size", FieldKind::SingleChoice)
        .with_choices(COMPANY_SIZES),
];

const GOALS: &[FieldSpec] = &[
    FieldSpec::required(fields::INTERESTS, "Areas of Interest", FieldKind::MultiChoice)
        .with_choices(INTERESTS),
    FieldSpec::optional(fields::MESSAGE, "Additional Details", FieldKind::LongText)
        .with_placeholder(
            "Tell us about your current challenges and what you're hoping to achieve...",
        ),
];

/// Steps of the demo request wizard
pub const DEMO_STEPS: &[StepDefinition] = &[
    StepDefinition {
        title: "Your Info",
        fields: YOUR_INFO,
    },
    StepDefinition {
        title: "Company",
        fields: COMPANY_DETAILS,
    },
    StepDefinition {
        title: "Goals",
        fields: GOALS,
    },
    StepDefinition {
        title: "Schedule",
        fields: &[],
    },
];

pub const COMPANY_SIZES: &[&str] = &[
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-1000 employees",
    "1000+ employees",
];

pub const INTERESTS: &[&str] = &[
    "Identity Resolution",
    "Consent Management",
    "Analytics & Tracking",
    "Predictive Audiences",
    "Fraud Prevention",
    "Data Quality",
    "Full Platform",
];

/// Platform metric shown as an animated counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: 50.0,
        suffix: "B+",
        label: "Events Processed Daily",
        description: "Real-time data processing at scale",
    },
    Stat {
        value: 500.0,
        suffix: "+",
        label: "Enterprise Customers",
        description: "Trusted by leading brands worldwide",
    },
    Stat {
        value: 99.99,
        suffix: "%",
        label: "Uptime SLA",
        description: "Enterprise-grade reliability",
    },
    Stat {
        value: 180.0,
        suffix: "+",
        label: "Countries Supported",
        description: "Global privacy compliance",
    },
    Stat {
        value: 50.0,
        suffix: "ms",
        label: "Average Latency",
        description: "Lightning-fast response times",
    },
    Stat {
        value: 3.2,
        suffix: "x",
        label: "Average ROI",
        description: "Measurable business impact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub industry: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
    pub stat_value: &'static str,
    pub stat_label: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "DataWise transformed our approach to customer data. We've seen a 47% increase in marketing ROI while actually improving our privacy posture. The IdentityGraph alone has been game-changing.",
        author: "Sarah Chen",
        role: "VP of Marketing",
        company: "TechRetail Inc.",
        industry: "E-commerce",
        avatar: "SC",
        rating: 5,
        stat_value: "47%",
        stat_label: "ROI Increase",
    },
    Testimonial {
        quote: "Implementing ConsentGraph took our GDPR compliance from a constant worry to a competitive advantage. Our customers trust us more, and our legal team sleeps better at night.",
        author: "Marcus Weber",
        role: "Chief Privacy Officer",
        company: "FinanceFirst",
        industry: "Financial Services",
        avatar: "MW",
        rating: 5,
        stat_value: "99.9%",
        stat_label: "Compliance Rate",
    },
    Testimonial {
        quote: "The IntentEngine's predictions are remarkably accurate. We've reduced our ad spend by 35% while increasing conversions. It's like having a crystal ball for customer behavior.",
        author: "Priya Patel",
        role: "Head of Growth",
        company: "TravelNow",
        industry: "Travel & Tourism",
        avatar: "PP",
        rating: 5,
        stat_value: "35%",
        stat_label: "Cost Reduction",
    },
    Testimonial {
        quote: "DataWise's platform has been instrumental in our fraud prevention efforts. We've blocked over $12M in fraudulent transactions in the first quarter alone.",
        author: "James Rodriguez",
        role: "Director of Risk",
        company: "PaySecure",
        industry: "Fintech",
        avatar: "JR",
        rating: 5,
        stat_value: "$12M",
        stat_label: "Fraud Prevented",
    },
];

/// Industry tab on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub stat_value: &'static str,
    pub stat_label: &'static str,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        id: "retail",
        name: "Retail & E-commerce",
        icon: "shopping-cart",
        href: "/industries/retail",
        description: "Unify customer journeys across online and offline touchpoints for personalized shopping experiences.",
        benefits: &[
            "Omnichannel identity resolution",
            "Purchase intent prediction",
            "Customer lifetime value scoring",
            "Cross-sell optimization",
        ],
        stat_value: "47%",
        stat_label: "increase in conversion rates",
    },
    Industry {
        id: "marketplaces",
        name: "Marketplaces",
        icon: "map",
        href: "/industries/marketplaces",
        description: "Build trust and safety while connecting buyers and sellers with intelligent matching.",
        benefits: &[
            "Fraud detection & prevention",
            "Seller verification",
            "Buyer-seller matching",
            "Trust & safety scoring",
        ],
        stat_value: "89%",
        stat_label: "fraud reduction",
    },
    Industry {
        id: "tourism",
        name: "Travel & Tourism",
        icon: "plane",
        href: "/industries/tourism",
        description: "Deliver seamless travel experiences with privacy-safe location intelligence.",
        benefits: &[
            "Trip intent detection",
            "Destination personalization",
            "Loyalty optimization",
            "Real-time offers",
        ],
        stat_value: "2.3x",
        stat_label: "booking conversion lift",
    },
    Industry {
        id: "government",
        name: "Smart Cities",
        icon: "building",
        href: "/industries/government",
        description: "Enable citizen-centric services with privacy-preserving data analytics.",
        benefits: &[
            "Population insights",
            "Service optimization",
            "Mobility analytics",
            "Privacy compliance",
        ],
        stat_value: "35%",
        stat_label: "efficiency improvement",
    },
    Industry {
        id: "fintech",
        name: "Financial Services",
        icon: "landmark",
        href: "/industries/fintech",
        description: "Enhance risk assessment and customer experience while maintaining regulatory compliance.",
        benefits: &[
            "Identity verification",
            "Risk scoring models",
            "Regulatory compliance",
            "Fraud prevention",
        ],
        stat_value: "99.9%",
        stat_label: "compliance accuracy",
    },
    Industry {
        id: "telecom",
        name: "Telecom",
        icon: "wifi",
        href: "/industries/telecom",
        description: "Monetize first-party data while delivering hyper-personalized experiences.",
        benefits: &[
            "Network analytics",
            "Churn prediction",
            "Upsell optimization",
            "Data monetization",
        ],
        stat_value: "28%",
        stat_label: "churn reduction",
    },
];

/// Industry whose page lives at `/industries/{id}`
pub fn industry(id: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|industry| industry.id == id)
}

/// One layer of the platform stack selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformLayer {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Platform stack, bottom layer first
pub const PLATFORM_LAYERS: &[PlatformLayer] = &[
    PlatformLayer {
        id: "identitygraph",
        name: "IdentityGraph™",
        icon: "database",
        description: "Unified identity resolution engine",
        features: &["Cross-device matching", "Probabilistic + deterministic", "Real-time sync"],
    },
    PlatformLayer {
        id: "consentgraph",
        name: "ConsentGraph™",
        icon: "shield",
        description: "Automated consent orchestration",
        features: &["GDPR/CCPA compliance", "Preference center", "Audit trails"],
    },
    PlatformLayer {
        id: "analytics",
        name: "Analytics SDK",
        icon: "bar-chart",
        description: "Privacy-first data collection",
        features: &["First-party data", "Cookieless tracking", "Server-side events"],
    },
    PlatformLayer {
        id: "intent",
        name: "IntentEngine™",
        icon: "brain",
        description: "Predictive intelligence layer",
        features: &["ML-powered insights", "Behavioral signals", "Audience predictions"],
    },
    PlatformLayer {
        id: "datascore",
        name: "DataScore™",
        icon: "award",
        description: "Quality & reliability metrics",
        features: &["Data freshness", "Accuracy scoring", "Completeness index"],
    },
];

/// Id of the single selected entry among `ids`, falling back to the first.
///
/// Used by the single-select tab strips, whose selection is never empty in
/// practice but may hold a stale key.
pub fn active_id<'a>(selection: &Selection, ids: &[&'a str]) -> Option<&'a str> {
    ids.iter()
        .copied()
        .find(|id| selection.is_selected(id))
        .or_else(|| ids.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_steps_shape() {
        assert_eq!(DEMO_STEPS.len(), 4);
        let required: Vec<_> = DEMO_STEPS[0].required_fields().collect();
        assert_eq!(required, vec![fields::FIRST_NAME, fields::LAST_NAME, fields::EMAIL]);
        assert_eq!(DEMO_STEPS[3].required_fields().count(), 0);
    }

    #[test]
    fn test_choice_fields_have_choices() {
        for field in DEMO_STEPS.iter().flat_map(|s| s.fields) {
            let is_choice = matches!(field.kind, FieldKind::SingleChoice | FieldKind::MultiChoice);
            assert_eq!(is_choice, !field.choices.is_empty(), "{}", field.name);
        }
    }

    #[test]
    fn test_field_names_unique() {
        let mut names: Vec<_> = DEMO_STEPS
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_catalogs_non_empty() {
        assert!(!TESTIMONIALS.is_empty());
        assert!(!STATS.is_empty());
        assert!(!INDUSTRIES.is_empty());
        assert!(!PLATFORM_LAYERS.is_empty());
    }

    #[test]
    fn test_industries_match_site_tabs() {
        let ids: Vec<_> = INDUSTRIES.iter().map(|i| i.id).collect();
        assert_eq!(
            ids,
            vec!["retail", "marketplaces", "tourism", "government", "fintech", "telecom"]
        );
        for industry in INDUSTRIES {
            assert_eq!(industry.benefits.len(), 4, "{}", industry.id);
            assert_eq!(industry.href, format!("/industries/{}", industry.id));
            assert!(!industry.stat_value.is_empty());
        }
        assert_eq!(INDUSTRIES[4].name, "Financial Services");
    }

    #[test]
    fn test_industry_lookup() {
        assert_eq!(industry("tourism").map(|i| i.name), Some("Travel & Tourism"));
        assert!(industry("events").is_none());
    }

    #[test]
    fn test_platform_layers_in_stack_order() {
        let ids: Vec<_> = PLATFORM_LAYERS.iter().map(|l| l.id).collect();
        assert_eq!(
            ids,
            vec!["identitygraph", "consentgraph", "analytics", "intent", "datascore"]
        );
        assert!(PLATFORM_LAYERS.iter().all(|l| l.features.len() == 3));
    }

    #[test]
    fn test_active_id_follows_selection() {
        let ids: Vec<_> = PLATFORM_LAYERS.iter().map(|l| l.id).collect();
        let mut selection = Selection::single(ids[0]);
        assert_eq!(active_id(&selection, &ids), Some("identitygraph"));

        selection.select_only("intent");
        assert_eq!(active_id(&selection, &ids), Some("intent"));

        // A stale key falls back to the first entry
        selection.select_only("retired");
        assert_eq!(active_id(&selection, &ids), Some("identitygraph"));
        assert_eq!(active_id(&selection, &[]), None);
    }
}
