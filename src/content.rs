//! Everything the page says. Read-only, rendered in the order listed here.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub region_code: &'static str,
    pub country: &'static str,
    pub country_code: &'static str,
    pub email: &'static str,
    /// Display form, e.g. "+91 8300773347"
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>();
        format!("tel:+{digits}")
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://linkedin.com/in/{}", self.linkedin)
    }

    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github)
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Vignesh M",
    role: "Software Developer",
    summary: "Results-driven Full Stack Software Developer with 3+ years of experience in designing and developing scalable web applications using MERN stack, JavaScript, TypeScript, React.js, Next.js, Node.js, and Express.js.",
    city: "Theni",
    region: "Tamil Nadu",
    region_code: "IN-TN",
    country: "India",
    country_code: "IN",
    email: "mvignesh191299@gmail.com",
    phone: "+91 8300773347",
    linkedin: "vignesh-vicky",
    github: "vignesh191299",
};

pub const STATS: &[Stat] = &[
    Stat {
        number: "3+",
        label: "Years Experience",
    },
    Stat {
        number: "40%",
        label: "Time Efficiency",
    },
    Stat {
        number: "60%",
        label: "Error Reduction",
    },
    Stat {
        number: "50%",
        label: "Performance Boost",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming Languages",
        skills: &["JavaScript", "TypeScript", "HTML5", "CSS3", "SQL"],
    },
    SkillGroup {
        category: "Frontend Technologies",
        skills: &[
            "React.js",
            "Next.js",
            "Redux",
            "Redux Toolkit",
            "Material-UI",
            "Tailwind CSS",
            "Responsive Web Design",
        ],
    },
    SkillGroup {
        category: "Backend Technologies",
        skills: &[
            "Node.js",
            "Express.js",
            "RESTful API",
            "Microservices",
            "JWT Authentication",
            "OAuth",
            "WebSockets",
        ],
    },
    SkillGroup {
        category: "Database",
        skills: &[
            "MongoDB",
            "MySQL",
            "PostgreSQL",
            "Database Design",
            "Data Modeling",
        ],
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Software Developer",
        company: "Digisquares Technologies Pvt. Ltd.",
        location: "India",
        period: "Aug 2022 – Present",
        highlights: &[
            "Architected and developed comprehensive low-code platform using React.js, Next.js, Node.js, and MongoDB, reducing development time by 40% and improving deployment efficiency by 35%",
            "Built Advanced Garments Management System managing inventory, production workflows, and order tracking for 200+ daily operations, cutting manual errors by 60% and accelerating order fulfillment by 45%",
            "Integrated LLM capabilities and Generative AI features using OpenAI API and Langchain, enabling intelligent automation and natural language processing for enhanced user interactions",
            "Designed and deployed RESTful APIs with microservices architecture using Express.js and Node.js, boosting application performance by 50% and enabling seamless third-party integrations",
            "Led cross-functional teams including product managers, designers, and QA engineers to deliver robust, scalable solutions, increasing user satisfaction by 30% and reducing support tickets by 25%",
            "Conducted comprehensive code reviews and mentored junior developers, elevating code quality metrics by 45% and decreasing production bugs by 40%",
        ],
    },
    ExperienceEntry {
        title: "Junior Software Developer",
        company: "OneWhistle Technology India Pvt. Ltd.",
        location: "India",
        period: "Aug 2021 – Jun 2022",
        highlights: &[
            "Developed and maintained full-stack web applications using MERN stack, building Whistle Freights logistics platform processing 500+ daily transactions with real-time tracking capabilities",
            "Created responsive UI components using React.js and modern CSS frameworks, driving 35% increase in mobile user engagement and achieving 20% faster page load times",
            "Built RESTful APIs with JWT authentication and Redux state management, strengthening application security and optimizing data flow efficiency",
            "Actively participated in agile development cycles including sprint planning, daily standups, and retrospectives, fostering continuous improvement and team collaboration",
            "Executed thorough testing, debugging, and code reviews to maintain high-quality standards, successfully reducing production defects by 30%",
        ],
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Low-Code Platform",
        description: "Comprehensive platform for rapid application development using React.js, Next.js, Node.js, and MongoDB",
        technologies: &["React.js", "Next.js", "Node.js", "MongoDB"],
        achievements: &[
            "40% reduction in development time",
            "35% improvement in deployment efficiency",
        ],
    },
    ProjectEntry {
        title: "Garments Management System",
        description: "Advanced inventory and production workflow management system handling 200+ daily operations",
        technologies: &["MERN Stack", "RESTful API", "Real-time Tracking"],
        achievements: &[
            "60% reduction in manual errors",
            "45% faster order fulfillment",
        ],
    },
    ProjectEntry {
        title: "AI-Powered Features Integration",
        description: "LLM capabilities and Generative AI implementation for intelligent automation",
        technologies: &["OpenAI API", "Langchain", "Natural Language Processing"],
        achievements: &["Enhanced user interactions", "Intelligent automation enabled"],
    },
    ProjectEntry {
        title: "Whistle Freights Logistics Platform",
        description: "Full-stack logistics platform with real-time tracking capabilities",
        technologies: &["React.js", "Node.js", "Express.js", "MongoDB"],
        achievements: &[
            "500+ daily transactions",
            "35% increase in mobile engagement",
            "20% faster page loads",
        ],
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Master of Computer Application (MCA)",
        institution: "RVS College of Arts and Science",
        location: "Tamil Nadu",
        period: "2020 - 2022",
    },
    EducationEntry {
        degree: "Bachelor of Science in Mathematics",
        institution: "Arul Anandar College",
        location: "Madurai",
        period: "2017 - 2020",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:mvignesh191299@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:+918300773347");
        assert_eq!(
            PROFILE.linkedin_url(),
            "https://linkedin.com/in/vignesh-vicky"
        );
        assert_eq!(PROFILE.github_url(), "https://github.com/vignesh191299");
        assert_eq!(PROFILE.location(), "Theni, Tamil Nadu");
    }

    #[test]
    fn test_experience_newest_first() {
        assert_eq!(EXPERIENCE.len(), 2);
        assert!(EXPERIENCE[0].period.ends_with("Present"));
        assert_eq!(EXPERIENCE[1].title, "Junior Software Developer");
        for entry in EXPERIENCE {
            assert!(!entry.company.is_empty());
            assert!(!entry.highlights.is_empty());
        }
    }

    #[test]
    fn test_records_populated() {
        assert_eq!(STATS.len(), 4);
        assert!(STATS.iter().all(|s| !s.number.is_empty() && !s.label.is_empty()));

        let categories = SKILLS.iter().map(|g| g.category).collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                "Programming Languages",
                "Frontend Technologies",
                "Backend Technologies",
                "Database"
            ]
        );
        assert!(SKILLS.iter().all(|g| !g.skills.is_empty()));

        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS {
            assert!(!project.technologies.is_empty());
            assert!(!project.achievements.is_empty());
        }

        assert_eq!(EDUCATION[0].institution, "RVS College of Arts and Science");
        assert_eq!(EDUCATION[1].period, "2017 - 2020");
    }
}
