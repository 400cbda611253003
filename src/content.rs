use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::fx::boot::Checkpoint;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not embedded: {0}")]
    Missing(String),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
}

/// Accent palette shared by every section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Green,
    Cyan,
    Red,
}

impl Accent {
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Green => "#00ff41",
            Accent::Cyan => "#00f0ff",
            Accent::Red => "#ff003c",
        }
    }

    /// The accent with a two-digit hex alpha appended, e.g. `#00ff4130`.
    pub fn with_alpha(&self, alpha: &str) -> String {
        format!("{}{}", self.hex(), alpha)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Shield,
    Terminal,
    Lock,
    Folder,
    Activity,
    Award,
    Book,
    Target,
    User,
    Mail,
    Phone,
    Pin,
    Github,
    Linkedin,
    Link,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Shield => "⛨",
            Icon::Terminal => ">_",
            Icon::Lock => "🔒",
            Icon::Folder => "📁",
            Icon::Activity => "📈",
            Icon::Award => "🏅",
            Icon::Book => "📖",
            Icon::Target => "🎯",
            Icon::User => "👤",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::Pin => "📍",
            Icon::Github => "",
            Icon::Linkedin => "",
            Icon::Link => "🔗",
        }
    }

    /// Devicon class for brand icons, rendered as `<i>` instead of a glyph.
    pub fn devicon(&self) -> Option<&'static str> {
        match self {
            Icon::Github => Some("devicon-github-plain"),
            Icon::Linkedin => Some("devicon-linkedin-plain"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Icon,
}

impl Link {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub brand: String,
    pub brand_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
    pub photo: String,
    pub highlights: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub years: String,
    pub location: String,
    pub gpa: String,
    pub concentration: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: u8,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    pub repo: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertStatus {
    Completed,
    Trained,
    InProgress,
}

impl CertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CertStatus::Completed => "COMPLETED",
            CertStatus::Trained => "TRAINED",
            CertStatus::InProgress => "IN PROGRESS",
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, CertStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub status: CertStatus,
    pub date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub name: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub intro: String,
    pub channels: Vec<Stat>,
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub socials: Vec<Link>,
    pub quick_links: Vec<Link>,
    pub status: Vec<String>,
}

/// Animation periods and delays, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub title_tick_ms: u64,
    pub subtitle_tick_ms: u64,
    pub subtitle_delay_ms: u64,
    pub decrypt_tick_ms: u64,
    pub decrypt_stride: usize,
    pub boot_tick_ms: u64,
    pub boot_settle_ms: u64,
    pub transmit_delay_ms: u64,
    pub carousel_lock_ms: u64,
    pub scroll_throttle_ms: u64,
    pub rain_cell_px: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            title_tick_ms: 100,
            subtitle_tick_ms: 50,
            subtitle_delay_ms: 1500,
            decrypt_tick_ms: 15,
            decrypt_stride: 2,
            boot_tick_ms: 400,
            boot_settle_ms: 500,
            transmit_delay_ms: crate::contact::TRANSMIT_DELAY_MS,
            carousel_lock_ms: 500,
            scroll_throttle_ms: 100,
            rain_cell_px: crate::fx::rain::RAIN_CELL_PX,
        }
    }
}

/// Everything the page shows, loaded once from the embedded content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub boot: Vec<Checkpoint>,
    pub hero: Hero,
    pub about: About,
    pub education: Vec<Education>,
    pub skill_categories: Vec<String>,
    pub skills: Vec<Skill>,
    pub toolchain: Vec<String>,
    pub projects: Vec<Project>,
    pub side_projects: Vec<SideProject>,
    pub certifications: Vec<Certification>,
    pub trainings: Vec<Training>,
    pub activities: Vec<Activity>,
    pub contact: Contact,
    pub footer: Footer,
    #[serde(default)]
    pub timings: Timings,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
    }

    fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::Missing(PORTFOLIO_FILE.to_string()))?;
        let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(raw)
    }
}

/// The embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_parses() {
        let p = portfolio().expect("embedded portfolio should parse");
        assert_eq!(p.hero.title, "SECURITY ANALYST");
        assert_eq!(p.hero.subtitle, "DEFENDING DIGITAL FRONTIERS");
        assert_eq!(
            p.boot.iter().map(|c| c.progress).collect::<Vec<_>>(),
            vec![10, 25, 40, 60, 80, 100]
        );
        assert_eq!(p.boot.last().map(|c| c.label.as_str()), Some("Access granted."));
        assert!(!p.projects.is_empty());
    }

    #[test]
    fn test_skill_categories_cover_skills() {
        let p = portfolio().unwrap();
        for skill in &p.skills {
            assert!(
                p.skill_categories.contains(&skill.category),
                "{} has unlisted category {}",
                skill.name,
                skill.category
            );
            assert!(skill.level <= 100);
        }
    }

    #[test]
    fn test_bio_has_paragraph_break() {
        let p = portfolio().unwrap();
        assert!(p.about.bio.contains("\n\n"));
    }

    #[test]
    fn test_timings_default_when_absent() {
        let p = portfolio().unwrap();
        let mut value = serde_json::to_value(p).unwrap();
        value.as_object_mut().unwrap().remove("timings");
        let reparsed = Portfolio::from_json(&value.to_string()).unwrap();
        assert_eq!(reparsed.timings, Timings::default());
    }

    #[test]
    fn test_partial_timings_override() {
        let t: Timings = serde_json::from_str(r#"{"boot_tick_ms": 250}"#).unwrap();
        assert_eq!(t.boot_tick_ms, 250);
        assert_eq!(t.boot_settle_ms, 500);
        assert_eq!(t.decrypt_stride, 2);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Portfolio::from_json("{\"owner\": 3}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_cert_status_serde() {
        let s: CertStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(s, CertStatus::InProgress);
        assert!(!s.is_finished());
        assert_eq!(Accent::Cyan.with_alpha("30"), "#00f0ff30");
    }
}
