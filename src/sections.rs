use std::{fmt, str::FromStr};

use thiserror::Error;

/// The page's content blocks, in the order they are stacked on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

/// Declared order. Active-section resolution walks this front to back.
pub const SECTIONS: [SectionId; 7] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Experience,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Education,
    SectionId::Contact,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// Element id of the section on the page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    /// Accepts a bare id (`projects`) or an anchor hash (`#projects`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        SECTIONS
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let ids = SECTIONS.iter().map(|s| s.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "home",
                "about",
                "experience",
                "skills",
                "projects",
                "education",
                "contact"
            ]
        );
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_parse_every_section() {
        for section in SECTIONS {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
            assert_eq!(section.href().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "resume".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("resume".to_string()));
        assert_eq!(err.to_string(), "unknown section: resume");

        assert!("".parse::<SectionId>().is_err());
        assert!("#".parse::<SectionId>().is_err());
        assert!("Projects".parse::<SectionId>().is_err());
        assert!("##projects".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SectionId::Experience.label(), "Experience");
        assert_eq!(SectionId::Contact.to_string(), "contact");
        assert_eq!(SectionId::Projects.href(), "#projects");
    }
}
