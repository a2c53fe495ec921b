use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::infrastructure::PlayerStore;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use squad_board_core::{Player, PlayerId, Team};

impl From<gloo_net::Error> for StoreError {
    fn from(err: gloo_net::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Player table client speaking PostgREST conventions (Supabase-style):
/// filters in the query string, `Prefer: return=representation` to get the
/// affected rows back.
#[derive(Debug, Clone)]
pub struct RestPlayerStore {
    config: StoreConfig,
}

impl RestPlayerStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
    }

    async fn check_status(response: Response) -> Result<Response> {
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::Status { status, body })
        }
    }

    async fn rows(response: Response) -> Result<Vec<Player>> {
        response
            .json::<Vec<Player>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PlayerStore for RestPlayerStore {
    async fn list(&self) -> Result<Vec<Player>> {
        let url = format!("{}?select=*&order=created_at.desc", self.endpoint());
        let response = self.with_auth(Request::get(&url)).send().await?;
        let players = Self::rows(Self::check_status(response).await?).await?;

        tracing::debug!(count = players.len(), "listed players");
        Ok(players)
    }

    async fn insert(&self, name: &str) -> Result<Player> {
        let response = self
            .with_auth(Request::post(&self.endpoint()))
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "name": name, "team": Team::Unassigned }))?
            .send()
            .await?;

        let rows = Self::rows(Self::check_status(response).await?).await?;
        rows.into_iter().next().ok_or(StoreError::MissingRow)
    }

    async fn update_team(&self, id: PlayerId, team: Team) -> Result<()> {
        let url = format!("{}?id=eq.{}", self.endpoint(), id);
        let response = self
            .with_auth(Request::patch(&url))
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "team": team }))?
            .send()
            .await?;

        // PostgREST answers an unknown id with an empty affected-row set
        let rows = Self::rows(Self::check_status(response).await?).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: PlayerId) -> Result<()> {
        let url = format!("{}?id=eq.{}", self.endpoint(), id);
        let response = self
            .with_auth(Request::delete(&url))
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let rows = Self::rows(Self::check_status(response).await?).await?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
