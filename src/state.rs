use crate::data::DataService;
use crate::models::ContributionData;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<ContributionData>>,
    pub service: DataService,
}

impl AppState {
    pub fn new(data: ContributionData, api_url: Option<String>) -> Self {
        let data = Arc::new(Mutex::new(data));
        let service = match api_url {
            Some(url) => DataService::remote(url),
            None => DataService::local(Arc::clone(&data)),
        };
        Self { data, service }
    }
}
