use crate::data::normalize_keys;
use crate::models::ContributionData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

pub async fn load_data(path: &Path) -> ContributionData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<ContributionData>(&bytes) {
            Ok(data) => {
                let data = normalize_keys(data);
                info!(days = data.len(), path = %path.display(), "loaded contributions");
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                ContributionData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ContributionData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            ContributionData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("contribution_calendar_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        assert!(load_data(&temp_path("missing")).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_empty() {
        let path = temp_path("malformed");
        fs::write(&path, br#"{"2024-01-01": -3}"#).await.unwrap();
        assert!(load_data(&path).await.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn reads_mapping() {
        let path = temp_path("valid");
        fs::write(&path, br#"{"2024-01-01": 3, "2024-01-05": 31}"#).await.unwrap();
        let data = load_data(&path).await;
        assert_eq!(data.get("2024-01-05"), Some(&31));
        assert_eq!(data.len(), 2);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn dotted_keys_are_stored_as_iso() {
        let path = temp_path("dotted");
        fs::write(&path, br#"{"14.06.2024": 5, "2024-06-15": 1}"#).await.unwrap();
        let data = load_data(&path).await;
        assert_eq!(data.get("2024-06-14"), Some(&5));
        assert!(data.keys().all(|key| !key.contains('.')));
        let _ = fs::remove_file(&path).await;
    }
}
