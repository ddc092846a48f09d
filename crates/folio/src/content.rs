//! Static site content.
//!
//! Everything rendered by the page sections lives here as `'static` data.
//! The types derive `Serialize` so the whole tree can be exported with
//! [`site_json`].

mod contact;
mod experience;
mod profile;
mod projects;
mod skills;
mod tech;

use serde::Serialize;

use crate::scroll::Section;

pub use contact::{CONTACT_INFO, CONTACT_SOCIALS, FOOTER, FOOTER_SOCIALS};
pub use experience::{ACHIEVEMENTS, CERTIFICATIONS, EXPERIENCE, RESEARCH, TIMELINE};
pub use profile::{HIGHLIGHTS, PROFILE};
pub use projects::{MAJOR_PROJECTS, MINOR_PROJECTS};
pub use skills::{SKILL_CATEGORIES, SOFT_SKILLS};
pub use tech::TECH_STACK;

pub const LOADING_TEXT: &str = "Loading Portfolio...";
/// How long the loading screen stays up on first load.
pub const LOADING_DELAY_MS: u32 = 2000;

/// Glyph families the view layer knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Discord,
    Brain,
    Cloud,
    Code,
    Rocket,
    Briefcase,
    Award,
    Paper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl SocialLink {
    /// Off-site links open in a new browsing context; `#section` links scroll.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }

    pub fn section(&self) -> Option<Section> {
        Section::from_href(self.href)
    }
}

/// Section title split into a plain lead and a gradient-highlighted tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub lead: &'static str,
    pub accent: &'static str,
    pub subtitle: Option<&'static str>,
}

/// Two-stop gradient, hex colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub fn css(&self, angle_deg: u32) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            angle_deg, self.from, self.to
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Typed out under the name in the hero.
    pub role: &'static str,
    pub tagline: &'static str,
    pub resume_href: &'static str,
    pub socials: &'static [SocialLink],
    pub about_heading: Heading,
    pub about: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, percent.
    pub level: u8,
    /// Icon asset paths; empty when the skill has no artwork.
    pub icons: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Major,
    Minor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Shown in the detail modal of major projects.
    pub long_description: Option<&'static str>,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub kind: ProjectKind,
}

impl Project {
    /// Technologies shown as chips on the card.
    pub const CARD_TECHNOLOGIES: usize = 3;

    pub fn visible_technologies(&self) -> &'static [&'static str] {
        let end = self.technologies.len().min(Self::CARD_TECHNOLOGIES);
        &self.technologies[..end]
    }

    /// Count behind the `+N` chip; zero means no chip.
    pub fn hidden_technology_count(&self) -> usize {
        self.technologies
            .len()
            .saturating_sub(Self::CARD_TECHNOLOGIES)
    }

    pub fn has_details(&self) -> bool {
        self.kind == ProjectKind::Major
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Research {
    pub title: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub kind: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub placement: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tech {
    pub name: &'static str,
    pub icon: &'static str,
    pub gradient: Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TechCategory {
    pub title: &'static str,
    pub technologies: &'static [Tech],
}

impl TechCategory {
    /// Columns of the wide-screen grid.
    pub fn columns(&self) -> u32 {
        if self.technologies.len() <= 4 { 4 } else { 6 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub blurb: &'static str,
    pub email: &'static str,
    pub availability: &'static str,
    pub call_to_action: &'static str,
    pub copyright: &'static str,
}

pub const SKILLS_HEADING: Heading = Heading {
    lead: "Skills & ",
    accent: "Expertise",
    subtitle: Some(
        "A comprehensive overview of my technical skills and proficiency levels across various technologies and frameworks.",
    ),
};

pub const PROJECTS_HEADING: Heading = Heading {
    lead: "Featured ",
    accent: "Projects",
    subtitle: Some("A showcase of my work in AI/ML, web development, and software engineering"),
};

pub const EXPERIENCE_HEADING: Heading = Heading {
    lead: "Experience & ",
    accent: "Achievements",
    subtitle: None,
};

pub const TECH_STACK_HEADING: Heading = Heading {
    lead: "Tech ",
    accent: "Stack",
    subtitle: Some("Technologies and tools I use to bring ideas to life"),
};

pub const CONTACT_HEADING: Heading = Heading {
    lead: "Get In ",
    accent: "Touch",
    subtitle: Some("Have a project in mind or want to collaborate? I'd love to hear from you!"),
};

/// The whole content tree, in page order.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Site {
    pub profile: &'static Profile,
    pub navigation: [Section; 5],
    pub highlights: &'static [Highlight],
    pub skills: &'static [SkillCategory],
    pub soft_skills: &'static [&'static str],
    pub major_projects: &'static [Project],
    pub minor_projects: &'static [Project],
    pub experience: &'static [Experience],
    pub certifications: &'static [Certification],
    pub research: &'static [Research],
    pub achievements: &'static [Achievement],
    pub timeline: &'static [Milestone],
    pub tech_stack: &'static [TechCategory],
    pub contact_info: &'static [ContactInfo],
    pub contact_socials: &'static [SocialLink],
    pub footer: &'static Footer,
    pub footer_socials: &'static [SocialLink],
}

pub fn site() -> Site {
    Site {
        profile: &PROFILE,
        navigation: Section::NAV,
        highlights: &HIGHLIGHTS,
        skills: &SKILL_CATEGORIES,
        soft_skills: &SOFT_SKILLS,
        major_projects: &MAJOR_PROJECTS,
        minor_projects: &MINOR_PROJECTS,
        experience: &EXPERIENCE,
        certifications: &CERTIFICATIONS,
        research: &RESEARCH,
        achievements: &ACHIEVEMENTS,
        timeline: &TIMELINE,
        tech_stack: &TECH_STACK,
        contact_info: &CONTACT_INFO,
        contact_socials: &CONTACT_SOCIALS,
        footer: &FOOTER,
        footer_socials: &FOOTER_SOCIALS,
    }
}

/// Pretty-printed JSON export of all content.
pub fn site_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&site())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_three_technologies_and_overflow() {
        let movie = &MAJOR_PROJECTS[0];
        assert_eq!(movie.visible_technologies(), ["Flask", "Scikit-learn", "Pandas"]);
        assert_eq!(movie.hidden_technology_count(), 4);

        let calculator = MINOR_PROJECTS
            .iter()
            .find(|project| project.title == "CLI Calculator")
            .unwrap();
        assert_eq!(calculator.visible_technologies().len(), 2);
        assert_eq!(calculator.hidden_technology_count(), 0);
    }

    #[test]
    fn only_major_projects_have_details() {
        assert!(MAJOR_PROJECTS.iter().all(|p| p.has_details() && p.long_description.is_some()));
        assert!(MINOR_PROJECTS.iter().all(|p| !p.has_details() && p.demo.is_none()));
    }

    #[test]
    fn tech_grid_columns() {
        let columns: Vec<u32> = TECH_STACK.iter().map(TechCategory::columns).collect();
        assert_eq!(columns, [4, 6, 4, 4, 6, 4]);
    }

    #[test]
    fn hero_socials_link_out_or_scroll() {
        let contact = PROFILE
            .socials
            .iter()
            .find(|link| link.label == "Contact")
            .unwrap();
        assert!(!contact.is_external());
        assert_eq!(contact.section(), Some(Section::Contact));
        assert!(PROFILE.socials.iter().filter(|l| l.is_external()).count() == 2);
    }

    #[test]
    fn exports_json() {
        let json: serde_json::Value = serde_json::from_str(&site_json().unwrap()).unwrap();
        assert_eq!(json["profile"]["name"], "Rohan Rajora");
        assert_eq!(json["navigation"][0], "about");
        assert_eq!(json["major_projects"][1]["kind"], "major");
        assert_eq!(json["tech_stack"].as_array().unwrap().len(), 6);
    }
}
