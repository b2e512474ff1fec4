use crate::dates::dotted_to_iso;
use crate::errors::DataError;
use crate::models::ContributionData;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub enum DataService {
    Remote { client: Client, url: String },
    Local(Arc<Mutex<ContributionData>>),
}

impl DataService {
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn local(data: Arc<Mutex<ContributionData>>) -> Self {
        Self::Local(data)
    }

    pub async fn fetch_contribution_data(&self) -> ContributionData {
        let data = match self {
            Self::Remote { client, url } => match fetch_remote(client, url).await {
                Ok(data) => data,
                Err(err) => {
                    error!(%url, "failed to fetch contributions: {err}");
                    return ContributionData::default();
                }
            },
            Self::Local(data) => data.lock().await.clone(),
        };
        let data = normalize_keys(data);
        debug!(days = data.len(), "contribution data ready");
        data
    }
}

async fn fetch_remote(client: &Client, url: &str) -> Result<ContributionData, DataError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(DataError::Status(response.status()));
    }
    Ok(response.json::<ContributionData>().await?)
}

pub(crate) fn normalize_keys(data: ContributionData) -> ContributionData {
    let mut normalized = ContributionData::new();
    for (key, count) in data {
        let key = if key.contains('.') { dotted_to_iso(&key) } else { key };
        let entry = normalized.entry(key).or_insert(0);
        *entry = entry.saturating_add(count);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::get};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn remote_success_returns_mapping() {
        let router = Router::new().route(
            "/contributions",
            get(|| async { Json(serde_json::json!({ "2024-01-02": 15, "03.01.2024": 4 })) }),
        );
        let base = serve(router).await;

        let data = DataService::remote(format!("{base}/contributions"))
            .fetch_contribution_data()
            .await;
        assert_eq!(data.get("2024-01-02"), Some(&15));
        assert_eq!(data.get("2024-01-03"), Some(&4));
    }

    #[tokio::test]
    async fn remote_error_status_degrades_to_empty() {
        let router = Router::new().route(
            "/contributions",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(router).await;

        let data = DataService::remote(format!("{base}/contributions"))
            .fetch_contribution_data()
            .await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn remote_transport_failure_degrades_to_empty() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let data = DataService::remote(format!("http://127.0.0.1:{port}/contributions"))
            .fetch_contribution_data()
            .await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn local_reads_shared_mapping() {
        let mut stored = ContributionData::new();
        stored.insert("2024-05-01".into(), 2);
        let service = DataService::local(Arc::new(Mutex::new(stored)));
        assert_eq!(service.fetch_contribution_data().await.get("2024-05-01"), Some(&2));
    }

    #[test]
    fn dotted_keys_merge_with_iso_keys() {
        let mut data = ContributionData::new();
        data.insert("2024-07-15".into(), 3);
        data.insert("15.07.2024".into(), 4);
        let normalized = normalize_keys(data);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get("2024-07-15"), Some(&7));
    }
}
