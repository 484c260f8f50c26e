use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Parsed site content, resolved once per process.
pub static SITE: LazyLock<SiteContent> =
    LazyLock::new(|| load().expect("Should be able to load embedded site content"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Site content not found")]
    NotFound,
    #[error("Couldn't parse site content")]
    ParseError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub highlight: Option<String>,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinks {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub domain: String,
    pub profile: Profile,
    pub about: String,
    pub jobs: Vec<Job>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub links: SocialLinks,
    pub resume: String,
}

pub fn load() -> Result<SiteContent, ContentError> {
    let raw = Assets::get("site.json").ok_or(ContentError::NotFound)?;
    parse(&raw.data)
}

fn parse(data: &[u8]) -> Result<SiteContent, ContentError> {
    serde_json::from_slice(data).map_err(|_| ContentError::ParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = load().expect("embedded content should load");
        assert_eq!(content.profile.name, "Biswarup Sen");
        assert_eq!(content.profile.tagline, "Backend | System Design | DevOps");
        assert_eq!(content.jobs.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.links.email, "biswarupsen.work@gmail.com");
        assert!(!content.about.is_empty());
    }

    #[test]
    fn test_skills_are_kept_verbatim() {
        // Badges render skill strings untransformed, so the source strings
        // must already be display-ready
        let content = load().expect("embedded content should load");
        assert!(content.skills.iter().any(|s| s == "React"));
        assert!(content.skills.iter().any(|s| s == "CI/CD"));
        assert_eq!(content.skills.len(), 14);
    }

    #[test]
    fn test_optional_project_fields_degrade() {
        let raw = r#"{"name": "Sideproject", "description": "A thing."}"#;
        let project: Project =
            serde_json::from_str(raw).expect("minimal project should deserialize");
        assert!(project.highlight.is_none());
        assert!(project.url.is_none());

        // Only the first project carries a highlight and a link
        let content = load().expect("embedded content should load");
        assert!(content.projects[0].highlight.is_some());
        assert!(content.projects[0].url.is_some());
        assert!(content.projects[1].url.is_none());
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        assert!(Assets::get("nope.json").is_none());
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let res = parse(b"{ not json }");
        assert_eq!(res.unwrap_err(), ContentError::ParseError);
    }
}
