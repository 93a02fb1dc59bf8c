//! Head metadata and the schema.org `Person` document for the page.

use serde::Serialize;

use crate::config::site_url;
use crate::content::{Profile, EDUCATION, EXPERIENCE, PROFILE, STATS};

pub const TITLE: &str = "Vignesh M - Software Developer | Full Stack MERN Developer";
pub const DESCRIPTION: &str = "Results-driven Full Stack Software Developer with 3+ years of experience in MERN stack, AI/ML integration, and scalable web application development. Expert in React.js, Next.js, Node.js, and TypeScript.";
/// Shorter form used for Open Graph and Twitter cards.
pub const SOCIAL_DESCRIPTION: &str = "Results-driven Full Stack Software Developer with 3+ years of experience in MERN stack, AI/ML integration, and scalable web application development.";
pub const KEYWORDS: &str = "Software Developer, Full Stack Developer, MERN Stack, React.js, Next.js, Node.js, JavaScript, TypeScript, AI/ML Integration, Web Development, Tamil Nadu";
pub const THEME_COLOR: &str = "#2563eb";
pub const SITE_NAME: &str = "Vignesh M Portfolio";
pub const OG_IMAGE: &str = "og-image.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const GEO_POSITION: (f64, f64) = (10.0104, 77.4840);

const KNOWS_ABOUT: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React.js",
    "Next.js",
    "Node.js",
    "Express.js",
    "MongoDB",
    "MySQL",
    "PostgreSQL",
    "RESTful API",
    "Microservices",
    "AI/ML Integration",
    "LLM Implementation",
];

pub fn og_image_url() -> String {
    site_url(OG_IMAGE)
}

/// `geo.position` form, "lat;lon"
pub fn geo_position() -> String {
    format!("{:.4};{:.4}", GEO_POSITION.0, GEO_POSITION.1)
}

/// `ICBM` form, "lat, lon"
pub fn icbm() -> String {
    format!("{:.4}, {:.4}", GEO_POSITION.0, GEO_POSITION.1)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    description: String,
    url: String,
    email: &'static str,
    telephone: String,
    address: PostalAddressLd,
    alumni_of: Vec<OrganizationLd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    works_for: Option<OrganizationLd>,
    knows_about: &'static [&'static str],
    same_as: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddressLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    address_locality: &'static str,
    address_region: &'static str,
    address_country: &'static str,
}

#[derive(Debug, Serialize)]
struct OrganizationLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
}

impl PersonLd {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.name,
            job_title: profile.role,
            description: format!(
                "Results-driven Full Stack Software Developer with {} years of experience in MERN stack development",
                STATS[0].number
            ),
            url: site_url(""),
            email: profile.email,
            telephone: profile.phone.replace(' ', "-"),
            address: PostalAddressLd {
                kind: "PostalAddress",
                address_locality: profile.city,
                address_region: profile.region,
                address_country: profile.country_code,
            },
            alumni_of: EDUCATION
                .iter()
                .map(|edu| OrganizationLd {
                    kind: "EducationalOrganization",
                    name: edu.institution,
                    description: Some(edu.degree),
                })
                .collect(),
            works_for: EXPERIENCE.first().map(|exp| OrganizationLd {
                kind: "Organization",
                name: exp.company,
                description: None,
            }),
            knows_about: KNOWS_ABOUT,
            same_as: vec![profile.linkedin_url(), profile.github_url()],
        }
    }
}

/// JSON-LD payload for the `<script type="application/ld+json">` tag.
pub fn structured_data() -> String {
    serde_json::to_string(&PersonLd::from_profile(&PROFILE)).unwrap_or_else(|e| {
        log::error!("failed to serialize structured data: {e}");
        String::from("{}")
    })
}
