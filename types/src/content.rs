//! Content catalogs for the portfolio page.
//!
//! Everything here is inert presentational data supplied by configuration:
//! the page renders these catalogs, it never mutates them.

use serde::{Deserialize, Serialize};

/// Hero section content: greeting line, name, the rotating role phrases,
/// a short tagline and the social links row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub greeting: String,
    pub name: String,
    /// Phrases cycled by the typewriter. Must be non-empty; validated at
    /// config load, before a `Typewriter` is ever constructed.
    pub roles: Vec<String>,
    pub tagline: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Project gallery category, also the unit of gallery filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Fullstack,
}

impl ProjectCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Fullstack => "Full Stack",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: ProjectCategory,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub repo_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Active gallery filter. Cycles all -> frontend -> fullstack -> all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Category(ProjectCategory::Frontend),
            ProjectFilter::Category(ProjectCategory::Frontend) => {
                ProjectFilter::Category(ProjectCategory::Fullstack)
            }
            ProjectFilter::Category(ProjectCategory::Fullstack) => ProjectFilter::All,
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(category) => category.label(),
        }
    }
}

/// One skill entry. `level` is a percentage (0-100), rendered as a bar
/// whose fill animates with the section reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    /// Optional accent color as a `#rrggbb` hex string.
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// One tab of the about section (story, approach, fun facts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutTab {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub tabs: Vec<AboutTab>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// One direct contact channel (email, phone, location).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub subtitle: String,
    #[serde(default)]
    pub channels: Vec<ContactChannel>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

/// The full page content, one field per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: AboutContent,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    pub contact: ContactContent,
}
