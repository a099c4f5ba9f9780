use super::data::PortfolioData;
use super::icons::{TechIcon, FEATURED_TECHNOLOGIES};
use crate::api::{Experience, Profile, Project, Skill};
use crate::constants::{DEFAULT_PROFILE_BIO, DEFAULT_PROFILE_NAME, DEFAULT_PROFILE_TITLE};

/// Page sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Self::Hero,
            Self::Experience,
            Self::Projects,
            Self::Skills,
            Self::Contact,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

/// Styling hint for a rendered line; the CLI and TUI map these to colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Subheading,
    Body,
    Meta,
    Tag,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLine {
    pub kind: LineKind,
    pub text: String,
}

impl SectionLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// `start - end`, or `start - Present` for a current role
pub fn date_range(exp: &Experience) -> String {
    format!(
        "{} - {}",
        exp.start_date,
        exp.end_date.as_deref().unwrap_or("Present")
    )
}

pub fn render_section(section: Section, data: &PortfolioData) -> Vec<SectionLine> {
    match section {
        Section::Hero => hero(data.profile.as_ref()),
        Section::Experience => experience(&data.experiences),
        Section::Projects => projects(&data.projects),
        Section::Skills => skills(&data.skills),
        Section::Contact => contact(data.profile.as_ref()),
    }
}

fn hero(profile: Option<&Profile>) -> Vec<SectionLine> {
    let name = profile.map(|p| p.name.as_str()).unwrap_or(DEFAULT_PROFILE_NAME);
    let title = profile.map(|p| p.title.as_str()).unwrap_or(DEFAULT_PROFILE_TITLE);
    let bio = profile
        .and_then(|p| p.bio.as_deref())
        .unwrap_or(DEFAULT_PROFILE_BIO);

    let mut lines = vec![
        SectionLine::new(LineKind::Heading, format!("Hello all, I'm {} 👋", name)),
        SectionLine::new(LineKind::Subheading, title),
        SectionLine::new(LineKind::Body, bio),
    ];

    if let Some(location) = profile.and_then(|p| p.location.as_deref()) {
        lines.push(SectionLine::new(LineKind::Meta, format!("📍 {}", location)));
    }

    lines
}

fn experience(experiences: &[Experience]) -> Vec<SectionLine> {
    let mut lines = vec![SectionLine::new(LineKind::Heading, "Work Experience")];

    for exp in experiences {
        lines.push(SectionLine::blank());
        lines.push(SectionLine::new(LineKind::Meta, date_range(exp)));
        lines.push(SectionLine::new(LineKind::Subheading, exp.position.as_str()));
        lines.push(SectionLine::new(LineKind::Body, exp.company.as_str()));
        if let Some(description) = &exp.description {
            lines.push(SectionLine::new(LineKind::Body, description.as_str()));
        }
        if !exp.technologies.is_empty() {
            lines.push(SectionLine::new(LineKind::Tag, exp.technologies.join(" · ")));
        }
    }

    lines
}

fn projects(projects: &[Project]) -> Vec<SectionLine> {
    let mut lines = vec![SectionLine::new(LineKind::Heading, "Projects")];

    for project in projects {
        lines.push(SectionLine::blank());
        lines.push(SectionLine::new(LineKind::Subheading, project.title.as_str()));
        if let Some(description) = &project.description {
            lines.push(SectionLine::new(LineKind::Body, description.as_str()));
        }
        if !project.technologies.is_empty() {
            lines.push(SectionLine::new(
                LineKind::Tag,
                project.technologies.join(" · "),
            ));
        }
        if let Some(url) = &project.github_url {
            lines.push(SectionLine::new(LineKind::Meta, format!("Code: {}", url)));
        }
        if let Some(url) = &project.live_url {
            lines.push(SectionLine::new(LineKind::Meta, format!("Live: {}", url)));
        }
    }

    lines
}

fn skills(skills: &[Skill]) -> Vec<SectionLine> {
    let mut lines = vec![
        SectionLine::new(LineKind::Heading, "What I do"),
        SectionLine::new(
            LineKind::Meta,
            "CRAZY FULL STACK DEVELOPER WHO WANTS TO EXPLORE EVERY TECH STACK",
        ),
        SectionLine::blank(),
    ];

    for (name, label) in FEATURED_TECHNOLOGIES {
        lines.push(SectionLine::new(
            LineKind::Tag,
            format!("{:<8} {}", TechIcon::for_name(name).badge(), label),
        ));
    }

    // Group by category, keeping the order the API returned them in
    let mut categories: Vec<(&str, Vec<&Skill>)> = Vec::new();
    for skill in skills {
        match categories.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, group)) => group.push(skill),
            None => categories.push((skill.category.as_str(), vec![skill])),
        }
    }

    for (category, group) in categories {
        lines.push(SectionLine::blank());
        lines.push(SectionLine::new(LineKind::Subheading, category));
        for skill in group {
            let text = match &skill.proficiency {
                Some(level) => format!(
                    "{:<8} {} ({})",
                    TechIcon::for_name(&skill.name).badge(),
                    skill.name,
                    level
                ),
                None => format!("{:<8} {}", TechIcon::for_name(&skill.name).badge(), skill.name),
            };
            lines.push(SectionLine::new(LineKind::Body, text));
        }
    }

    lines.push(SectionLine::blank());
    lines.push(SectionLine::new(
        LineKind::Body,
        "⚡ Develop highly interactive Front end / User Interfaces for your web and mobile applications",
    ));

    lines
}

fn contact(profile: Option<&Profile>) -> Vec<SectionLine> {
    let mut lines = vec![
        SectionLine::new(LineKind::Heading, "Contact Me ☎️"),
        SectionLine::new(
            LineKind::Meta,
            "DISCUSS A PROJECT OR JUST WANT TO SAY HI? MY INBOX IS OPEN FOR ALL.",
        ),
    ];

    let Some(profile) = profile else {
        return lines;
    };

    let entries = [
        ("Phone", profile.phone.as_deref()),
        ("Email", profile.email.as_deref()),
        ("GitHub", profile.github.as_deref()),
        ("LinkedIn", profile.linkedin.as_deref()),
        ("Website", profile.website.as_deref()),
    ];

    for (label, value) in entries {
        if let Some(value) = value {
            lines.push(SectionLine::new(LineKind::Body, format!("{}: {}", label, value)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exp(end: Option<&str>) -> Experience {
        Experience {
            id: "e1".to_string(),
            profile_id: "p1".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "Jan 2022".to_string(),
            end_date: end.map(str::to_string),
            description: None,
            technologies: vec!["Rust".to_string(), "SQL".to_string()],
            created_at: "2024-01-01".to_string(),
        }
    }

    fn texts(lines: &[SectionLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_date_range_defaults_to_present() {
        assert_eq!(date_range(&exp(None)), "Jan 2022 - Present");
        assert_eq!(date_range(&exp(Some("Mar 2023"))), "Jan 2022 - Mar 2023");
    }

    #[test]
    fn test_hero_uses_fallbacks_without_profile() {
        let lines = render_section(Section::Hero, &PortfolioData::default());
        assert_eq!(
            texts(&lines),
            vec![
                "Hello all, I'm Viharahamed 👋",
                "Full Stack Developer",
                DEFAULT_PROFILE_BIO,
            ]
        );
    }

    #[test]
    fn test_experience_lists_each_role() {
        let data = PortfolioData {
            experiences: vec![exp(None)],
            ..Default::default()
        };
        let lines = render_section(Section::Experience, &data);
        assert_eq!(
            texts(&lines),
            vec![
                "Work Experience",
                "",
                "Jan 2022 - Present",
                "Engineer",
                "Acme",
                "Rust · SQL",
            ]
        );
    }

    #[test]
    fn test_contact_skips_missing_fields() {
        let profile = Profile {
            id: "p1".to_string(),
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            bio: None,
            email: Some("ada@example.com".to_string()),
            phone: None,
            location: None,
            linkedin: None,
            github: Some("https://github.com/ada".to_string()),
            website: None,
            created_at: "2024-01-01".to_string(),
        };
        let data = PortfolioData {
            profile: Some(profile),
            ..Default::default()
        };

        let lines = render_section(Section::Contact, &data);
        let body: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Body)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            body,
            vec!["Email: ada@example.com", "GitHub: https://github.com/ada"]
        );
    }

    #[test]
    fn test_skills_grouped_by_category_in_order() {
        let skill = |category: &str, name: &str| Skill {
            id: name.to_string(),
            profile_id: "p1".to_string(),
            category: category.to_string(),
            name: name.to_string(),
            proficiency: None,
            created_at: "2024-01-01".to_string(),
        };
        let data = PortfolioData {
            skills: vec![
                skill("Backend", "Python"),
                skill("Frontend", "React.js"),
                skill("Backend", "Go"),
            ],
            ..Default::default()
        };

        let lines = render_section(Section::Skills, &data);
        let headings: Vec<&str> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Subheading)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(headings, vec!["Backend", "Frontend"]);

        let backend_pos = lines.iter().position(|l| l.text == "Backend").unwrap();
        assert!(lines[backend_pos + 1].text.ends_with("Python"));
        assert!(lines[backend_pos + 2].text.starts_with("[DATA]"));
        assert!(lines[backend_pos + 2].text.ends_with("Go"));
    }
}
