use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Age brackets the backend recognizes for a program.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "6-8")]
    SixToEight,
    #[serde(rename = "9-11")]
    NineToEleven,
    #[serde(rename = "12-14")]
    TwelveToFourteen,
    #[serde(rename = "15-18")]
    FifteenToEighteen,
}

impl AgeRange {
    pub const ALL: [AgeRange; 4] = [
        AgeRange::SixToEight,
        AgeRange::NineToEleven,
        AgeRange::TwelveToFourteen,
        AgeRange::FifteenToEighteen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::SixToEight => "6-8",
            AgeRange::NineToEleven => "9-11",
            AgeRange::TwelveToFourteen => "12-14",
            AgeRange::FifteenToEighteen => "15-18",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::SixToEight => "6-8 years",
            AgeRange::NineToEleven => "9-11 years",
            AgeRange::TwelveToFourteen => "12-14 years",
            AgeRange::FifteenToEighteen => "15-18 years",
        }
    }
}

/// Interest categories a program can be tagged with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Arts,
    Music,
    Stem,
    Sports,
    Coding,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::Arts,
        Interest::Music,
        Interest::Stem,
        Interest::Sports,
        Interest::Coding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Arts => "arts",
            Interest::Music => "music",
            Interest::Stem => "stem",
            Interest::Sports => "sports",
            Interest::Coding => "coding",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Arts => "Arts",
            Interest::Music => "Music",
            Interest::Stem => "STEM",
            Interest::Sports => "Sports",
            Interest::Coding => "Coding",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Interest::Arts => "🎨",
            Interest::Music => "🎵",
            Interest::Stem => "🔬",
            Interest::Sports => "⚽",
            Interest::Coding => "💻",
        }
    }
}

/// One free program record as the backend returns it. Records can be sparse:
/// missing text fields deserialize to empty strings and missing tags to
/// `None`, so filtering never has to special-case them.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Opportunity {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub interest: Option<Interest>,
    #[serde(default)]
    pub signup_url: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub user_type: Option<String>,
}

impl User {
    pub fn role_label(&self) -> &'static str {
        match self.user_type.as_deref() {
            Some("organizer") => "Organizer",
            _ => "Parent",
        }
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}
