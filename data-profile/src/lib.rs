use data_error::Result;
use serde::{Deserialize, Serialize};

/// A single entry of the skill radar: label, score and the fixed
/// scale maximum. The score is logically bounded to 0..=100 but the
/// pipeline passes whatever value was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub subject: String,
    #[serde(rename = "A")]
    pub score: u32,
    pub full_mark: u32,
}

impl Skill {
    pub fn new(subject: &str, score: u32) -> Self {
        Self {
            subject: subject.to_string(),
            score,
            full_mark: 100,
        }
    }
}

/// The fixed set of named social links. Absent entries are omitted
/// from the serialized document, not written as placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

/// The complete set of user-entered card fields. This is a pure value
/// type: structural equality only, copies are independent, and its only
/// durable form is the token embedded in a share URL.
///
/// `photo_url` is commonly a `data:` URI carrying base64 image bytes.
/// `video_url` is commonly a transient blob reference and is not
/// meaningfully portable across the serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub socials: SocialLinks,
    pub photo_url: Option<String>,
    pub video_url: Option<String>,
    pub theme_color: String,
    pub skills: Vec<Skill>,
}

impl Profile {
    /// Serialize to the canonical JSON document. Field order follows
    /// declaration order and is stable within a process.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON document back into a profile.
    ///
    /// Lenient beyond syntax: unknown fields are ignored and missing
    /// fields fall back to empty/absent values. No range validation is
    /// performed, consumers must treat the result defensively.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The seed profile a session starts from when no share link is
    /// present. Distinct from `Profile::default()`, which is all-empty
    /// and backs the lenient deserializer.
    pub fn initial() -> Self {
        Self {
            full_name: "Alex Morgan".to_string(),
            title: "Senior Product Designer".to_string(),
            company: "Creative Solutions Inc.".to_string(),
            email: "alex@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            bio: "Passionate about creating intuitive user experiences \
                  and bridging the gap between design and technology. 10+ \
                  years of delivering high-impact digital products."
                .to_string(),
            socials: SocialLinks {
                linkedin: Some("linkedin.com/in/alexmorgan".to_string()),
                twitter: Some("@alexm_design".to_string()),
                website: Some("alexmorgan.design".to_string()),
                instagram: Some("@alex_creates".to_string()),
                ..Default::default()
            },
            photo_url: Some("https://picsum.photos/300/300".to_string()),
            video_url: None,
            theme_color: THEME_COLORS[0].value.to_string(),
            skills: vec![
                Skill::new("UI Design", 90),
                Skill::new("UX Research", 85),
                Skill::new("Prototyping", 95),
                Skill::new("Frontend", 70),
                Skill::new("Strategy", 80),
                Skill::new("Leadership", 75),
            ],
        }
    }
}

/// A named theme color of the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub value: &'static str,
}

/// The palette offered by the editor. The profile stores the color
/// value as a plain string, an unknown value is carried through as-is.
pub const THEME_COLORS: [Theme; 6] = [
    Theme {
        name: "Slate",
        value: "#1e293b",
    },
    Theme {
        name: "Indigo",
        value: "#4f46e5",
    },
    Theme {
        name: "Emerald",
        value: "#10b981",
    },
    Theme {
        name: "Rose",
        value: "#e11d48",
    },
    Theme {
        name: "Amber",
        value: "#d97706",
    },
    Theme {
        name: "Cyan",
        value: "#0891b2",
    },
];
