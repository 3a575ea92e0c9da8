//! Built-in sample content, used whenever no config file provides its own.

use folio_types::content::{
    AboutContent, AboutTab, ContactChannel, ContactContent, PortfolioContent, Profile, Project,
    ProjectCategory, Skill, SkillCategory, SocialLink, Stat,
};
use folio_types::ui::SectionId;

/// Per-section visibility thresholds: the hero sits at the top of the
/// page and reveals almost immediately; the contact section waits for a
/// fifth of its height.
pub(crate) fn section_threshold(section: SectionId) -> f32 {
    match section {
        SectionId::Hero => 0.05,
        SectionId::About | SectionId::Skills => 0.05,
        SectionId::Projects => 0.1,
        SectionId::Contact => 0.2,
    }
}

pub(crate) fn content() -> PortfolioContent {
    PortfolioContent {
        profile: profile(),
        about: about(),
        projects: projects(),
        skill_categories: skill_categories(),
        contact: contact(),
    }
}

fn profile() -> Profile {
    Profile {
        greeting: "Hi, my name is".to_string(),
        name: "Ada Quinn".to_string(),
        roles: vec![
            "Full Stack Developer".to_string(),
            "MERN Stack Developer".to_string(),
            "Problem Solver".to_string(),
        ],
        tagline: "I'm a passionate developer specializing in building exceptional \
                  digital experiences. Currently focused on creating responsive \
                  full-stack web applications with modern technologies."
            .to_string(),
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com/adaquinn".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/adaquinn".to_string(),
            },
            SocialLink {
                label: "Twitter".to_string(),
                url: "https://x.com/adaquinn".to_string(),
            },
        ],
    }
}

fn about() -> AboutContent {
    AboutContent {
        tabs: vec![
            AboutTab {
                title: "My Story".to_string(),
                paragraphs: vec![
                    "I started building for the web because I wanted to make things \
                     people actually use. A few years and many side projects later, \
                     that is still the whole point."
                        .to_string(),
                    "These days I work across the stack: interfaces that feel fast, \
                     APIs that stay out of the way, and databases that do not lose \
                     anyone's data."
                        .to_string(),
                ],
            },
            AboutTab {
                title: "How I Work".to_string(),
                paragraphs: vec![
                    "Think first, code second - plan it out, then build.".to_string(),
                    "User-focused - if it's confusing, it's wrong.".to_string(),
                    "Keep learning - tech changes, I adapt.".to_string(),
                    "Debug like a detective - every error is a clue.".to_string(),
                ],
            },
            AboutTab {
                title: "Fun Facts".to_string(),
                paragraphs: vec![
                    "I keep a graveyard folder of abandoned side projects and visit \
                     it for spare parts."
                        .to_string(),
                    "Best debugging tool I own is a rubber duck named Compile."
                        .to_string(),
                ],
            },
        ],
        technologies: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "MongoDB".to_string(),
            "Express".to_string(),
            "TypeScript".to_string(),
            "Tailwind".to_string(),
        ],
        stats: vec![
            Stat {
                value: "3+".to_string(),
                label: "Years writing code".to_string(),
            },
            Stat {
                value: "20+".to_string(),
                label: "Projects shipped".to_string(),
            },
            Stat {
                value: "10+".to_string(),
                label: "Happy clients".to_string(),
            },
        ],
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-Commerce Platform".to_string(),
            category: ProjectCategory::Fullstack,
            description: "Full-featured e-commerce platform with payment integration, \
                          cart management, and an admin dashboard."
                .to_string(),
            tech: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
                "Stripe".to_string(),
            ],
            repo_url: "https://github.com/adaquinn/ecommerce".to_string(),
            live_url: Some("https://shop.example.com".to_string()),
            featured: true,
        },
        Project {
            title: "Task Management App".to_string(),
            category: ProjectCategory::Frontend,
            description: "Collaborative task management tool with real-time updates \
                          and drag-and-drop boards."
                .to_string(),
            tech: vec![
                "React".to_string(),
                "Redux".to_string(),
                "Socket.io".to_string(),
            ],
            repo_url: "https://github.com/adaquinn/taskboard".to_string(),
            live_url: None,
            featured: false,
        },
        Project {
            title: "Weather Forecast App".to_string(),
            category: ProjectCategory::Frontend,
            description: "Weather app with location-based forecasts and interactive \
                          maps."
                .to_string(),
            tech: vec!["Vue.js".to_string(), "OpenWeather API".to_string()],
            repo_url: "https://github.com/adaquinn/weather".to_string(),
            live_url: Some("https://weather.example.com".to_string()),
            featured: false,
        },
        Project {
            title: "Blog CMS".to_string(),
            category: ProjectCategory::Fullstack,
            description: "Content management system for bloggers with markdown \
                          support and SEO tooling."
                .to_string(),
            tech: vec![
                "Next.js".to_string(),
                "PostgreSQL".to_string(),
                "Prisma".to_string(),
            ],
            repo_url: "https://github.com/adaquinn/blog-cms".to_string(),
            live_url: None,
            featured: true,
        },
        Project {
            title: "Portfolio Generator".to_string(),
            category: ProjectCategory::Frontend,
            description: "Tool that helps developers spin up a portfolio in minutes."
                .to_string(),
            tech: vec!["React".to_string(), "Tailwind".to_string()],
            repo_url: "https://github.com/adaquinn/portfolio-gen".to_string(),
            live_url: None,
            featured: false,
        },
    ]
}

fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Frontend Development".to_string(),
            skills: vec![
                skill("React", 90, "#61DAFB"),
                skill("JavaScript", 90, "#F7DF1E"),
                skill("HTML5", 95, "#E34F26"),
                skill("CSS3", 95, "#1572B6"),
                skill("Tailwind", 85, "#06B6D4"),
                skill("Redux", 80, "#764ABC"),
            ],
        },
        SkillCategory {
            title: "Backend Development".to_string(),
            skills: vec![
                skill("Node.js", 85, "#339933"),
                skill("Express", 85, "#888888"),
                skill("MongoDB", 80, "#47A248"),
                skill("Firebase", 75, "#FFCA28"),
            ],
        },
        SkillCategory {
            title: "Tools & Others".to_string(),
            skills: vec![
                skill("Git", 85, "#F05032"),
                skill("Docker", 70, "#2496ED"),
                skill("Postman", 80, "#FF6C37"),
                skill("Vercel", 85, "#888888"),
            ],
        },
    ]
}

fn skill(name: &str, level: u8, color: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        color: Some(color.to_string()),
    }
}

fn contact() -> ContactContent {
    ContactContent {
        subtitle: "Have a project in mind or just want to chat? Drop me a message!"
            .to_string(),
        channels: vec![
            ContactChannel {
                label: "Email".to_string(),
                value: "ada@example.com".to_string(),
                url: Some("mailto:ada@example.com".to_string()),
            },
            ContactChannel {
                label: "Phone".to_string(),
                value: "+1 555 010 0345".to_string(),
                url: Some("tel:+15550100345".to_string()),
            },
            ContactChannel {
                label: "Location".to_string(),
                value: "Portland, OR".to_string(),
                url: None,
            },
        ],
        availability: Some("Available for freelance work".to_string()),
        footer: Some("Designed & built by Ada Quinn".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::content;

    #[test]
    fn sample_content_is_well_formed() {
        let content = content();
        assert!(!content.profile.roles.is_empty());
        assert!(content.projects.len() >= 3);
        assert!(
            content
                .skill_categories
                .iter()
                .flat_map(|category| &category.skills)
                .all(|skill| skill.level <= 100)
        );
    }
}
