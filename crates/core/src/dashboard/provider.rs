//! Metrics providers feeding the dashboards.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use venturehub_shared::{AppError, AppResult};

use super::demo::DemoData;
use super::types::{FounderSnapshot, InvestorSnapshot, TeamMember};

/// Source of the current metrics snapshot for each view.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Current founder metrics.
    async fn founder_snapshot(&self) -> AppResult<FounderSnapshot>;

    /// Founder team roster, if one has been supplied.
    async fn team_roster(&self) -> AppResult<Option<Vec<TeamMember>>>;

    /// Current investor metrics.
    async fn investor_snapshot(&self) -> AppResult<InvestorSnapshot>;
}

/// Serves a fixed in-memory data set.
#[derive(Debug, Clone, Default)]
pub struct DemoProvider {
    data: DemoData,
}

impl DemoProvider {
    /// Provider over the built-in demo data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider over `data`.
    #[must_use]
    pub fn from_data(data: DemoData) -> Self {
        Self { data }
    }

    /// Replaces the team roster.
    #[must_use]
    pub fn with_team(mut self, team: Option<Vec<TeamMember>>) -> Self {
        self.data.team = team;
        self
    }
}

#[async_trait]
impl MetricsProvider for DemoProvider {
    async fn founder_snapshot(&self) -> AppResult<FounderSnapshot> {
        Ok(self.data.founder.clone())
    }

    async fn team_roster(&self) -> AppResult<Option<Vec<TeamMember>>> {
        Ok(self.data.team.clone())
    }

    async fn investor_snapshot(&self) -> AppResult<InvestorSnapshot> {
        Ok(self.data.investor.clone())
    }
}

/// Reads a [`DemoData`] JSON document from disk on every request.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Provider reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File the provider reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<DemoData> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::ExternalService(format!(
                "cannot read snapshot {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl MetricsProvider for JsonFileProvider {
    async fn founder_snapshot(&self) -> AppResult<FounderSnapshot> {
        Ok(self.load().await?.founder)
    }

    async fn team_roster(&self) -> AppResult<Option<Vec<TeamMember>>> {
        Ok(self.load().await?.team)
    }

    async fn investor_snapshot(&self) -> AppResult<InvestorSnapshot> {
        Ok(self.load().await?.investor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use venturehub_shared::types::TeamMemberId;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("venturehub-{}-{name}.json", std::process::id()))
    }

    #[tokio::test]
    async fn test_demo_provider_serves_demo_data() {
        let provider = DemoProvider::new();
        let founder = provider.founder_snapshot().await.unwrap();
        assert_eq!(founder.funding.investors_contacted, 120);
        assert!(provider.team_roster().await.unwrap().is_none());
        assert_eq!(provider.investor_snapshot().await.unwrap().companies.len(), 4);
    }

    #[tokio::test]
    async fn test_demo_provider_with_team() {
        let member = TeamMember {
            id: TeamMemberId::new(1),
            name: "Ada Lovelace".into(),
            role: "CTO".into(),
            avatar: None,
        };
        let provider = DemoProvider::new().with_team(Some(vec![member.clone()]));
        assert_eq!(provider.team_roster().await.unwrap(), Some(vec![member]));
    }

    #[tokio::test]
    async fn test_json_file_provider_reads_snapshot() {
        let path = scratch_file("ok");
        let data = DemoData::default();
        tokio::fs::write(&path, serde_json::to_vec(&data).unwrap())
            .await
            .unwrap();

        let provider = JsonFileProvider::new(&path);
        assert_eq!(provider.path(), path.as_path());
        assert_eq!(provider.founder_snapshot().await.unwrap(), data.founder);
        assert_eq!(provider.investor_snapshot().await.unwrap(), data.investor);
        assert!(provider.team_roster().await.unwrap().is_none());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_json_file_provider_missing_file() {
        let provider = JsonFileProvider::new(scratch_file("missing"));
        let err = provider.founder_snapshot().await.unwrap_err();
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }

    #[tokio::test]
    async fn test_json_file_provider_malformed_file() {
        let path = scratch_file("malformed");
        tokio::fs::write(&path, b"{\"founder\": 3}").await.unwrap();

        let err = JsonFileProvider::new(&path)
            .investor_snapshot()
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
