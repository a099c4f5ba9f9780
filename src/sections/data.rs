use tracing::warn;

use crate::api::{ApiClient, Experience, Profile, Project, Skill};

/// Everything the section views display, fetched once at startup
#[derive(Debug, Clone, Default)]
pub struct PortfolioData {
    pub profile: Option<Profile>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl PortfolioData {
    /// Fetch all sections concurrently. A failed fetch is logged and leaves
    /// that section empty; the rest still render.
    pub async fn load(client: &ApiClient) -> Self {
        let (profile, experiences, projects, skills) = futures::join!(
            client.profile(),
            client.experiences(),
            client.projects(),
            client.skills(),
        );

        Self {
            profile: profile
                .map_err(|e| warn!("Failed to load profile: {}", e))
                .ok(),
            experiences: experiences
                .map_err(|e| warn!("Failed to load experiences: {}", e))
                .unwrap_or_default(),
            projects: projects
                .map_err(|e| warn!("Failed to load projects: {}", e))
                .unwrap_or_default(),
            skills: skills
                .map_err(|e| warn!("Failed to load skills: {}", e))
                .unwrap_or_default(),
        }
    }
}
