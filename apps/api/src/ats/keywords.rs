use serde::{Deserialize, Serialize};

/// Industry keyword presets. Scoring defaults to `Tech`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    #[default]
    Tech,
    Marketing,
    Finance,
    Healthcare,
}

const TECH: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "AWS",
    "Docker",
    "Kubernetes",
    "Agile",
    "Scrum",
    "Git",
];

const MARKETING: &[&str] = &[
    "SEO",
    "SEM",
    "Google Analytics",
    "Social Media",
    "Content Marketing",
    "Email Marketing",
    "CRM",
    "Lead Generation",
];

const FINANCE: &[&str] = &[
    "Financial Analysis",
    "Excel",
    "SQL",
    "Risk Management",
    "Compliance",
    "Budgeting",
    "Forecasting",
    "Accounting",
];

const HEALTHCARE: &[&str] = &[
    "Patient Care",
    "Medical Records",
    "HIPAA",
    "Clinical",
    "Healthcare",
    "Medical",
    "Treatment",
    "Diagnosis",
];

impl Industry {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Industry::Tech => TECH,
            Industry::Marketing => MARKETING,
            Industry::Finance => FINANCE,
            Industry::Healthcare => HEALTHCARE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Marketing => "marketing",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
        }
    }
}
