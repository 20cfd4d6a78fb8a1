use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use scoresync_types::{LeaderboardEntry, RemoteConfig, SubmitScore};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::{ClientError, LeaderboardApi};

/// PostgREST answers a create with either the row or a one-row array,
/// depending on the `Accept` header negotiated.
#[derive(Deserialize)]
#[serde(untagged)]
enum Representation {
    One(LeaderboardEntry),
    Many(Vec<LeaderboardEntry>),
}

pub struct LeaderboardClient {
    client: Client,
    table_url: Url,
    api_key: String,
}

impl LeaderboardClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        let table_url = table_url(&config.base_url, &config.table)?;
        Ok(Self { client, table_url, api_key: config.api_key.clone() })
    }

    pub fn table_url(&self) -> &Url {
        &self.table_url
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            return builder;
        }
        builder.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    async fn check_status(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(ClientError::Status { status: status.as_u16(), message })
    }
}

fn table_url(base_url: &str, table: &str) -> Result<Url, ClientError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|url| url.join(table))
        .map_err(|e| ClientError::InvalidUrl(format!("{base}{table}: {e}")))
}

#[async_trait]
impl LeaderboardApi for LeaderboardClient {
    async fn submit(
        &self,
        score: &SubmitScore,
    ) -> Result<Option<LeaderboardEntry>, ClientError> {
        tracing::debug!(
            player = %score.player_name,
            score = score.score,
            difficulty = %score.difficulty,
            "Submitting score"
        );

        let resp = self
            .authorized(self.client.post(self.table_url.clone()))
            .header("Prefer", "return=representation")
            .json(score)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        // A success status means the row is stored; an unreadable body must
        // not turn that into a retry.
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Score accepted but response body was lost");
                return Ok(None);
            },
        };
        match serde_json::from_str::<Representation>(&body) {
            Ok(Representation::One(entry)) => Ok(Some(entry)),
            Ok(Representation::Many(entries)) => Ok(entries.into_iter().next()),
            Err(e) => {
                tracing::warn!(error = %e, "Score accepted but representation is unreadable");
                Ok(None)
            },
        }
    }

    async fn fetch_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let limit_param = limit.to_string();
        let resp = self
            .authorized(self.client.get(self.table_url.clone()))
            .query(&[
                ("select", "*"),
                ("order", "score.desc,created_at.desc"),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        let rows: Vec<serde_json::Value> =
            resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        // Rows written by other clients may not fit this schema; show the rest.
        let mut entries: Vec<LeaderboardEntry> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<LeaderboardEntry>(row) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable leaderboard row");
                    None
                },
            })
            .collect();
        entries.sort_by(LeaderboardEntry::rank_cmp);
        entries.truncate(limit);

        tracing::debug!(count = entries.len(), "Fetched leaderboard");
        Ok(entries)
    }
}
