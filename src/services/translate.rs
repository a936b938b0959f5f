//! Natural-language filter translation.
//!
//! The translator is an opaque collaborator: query text goes in, a filter
//! fragment comes out. Connectivity and decode failures surface as
//! translation errors; callers keep their previous filter state in that
//! case.

use serde::Serialize;

use crate::{
    config::TranslateConfig,
    error::{AppError, AppResult},
    filter::EquipmentFilter,
};

#[derive(Serialize)]
struct TranslateRequest<'a> {
    query: &'a str,
}

#[derive(Clone)]
pub struct TranslateService {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl TranslateService {
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Translate free text into a filter fragment.
    pub async fn translate(&self, query: &str) -> AppResult<EquipmentFilter> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| AppError::Translation("no translator endpoint configured".to_string()))?;

        let response = self
            .client
            .post(endpoint)
            .json(&TranslateRequest { query })
            .send()
            .await
            .map_err(|e| AppError::Translation(format!("translator unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Translation(format!(
                "translator returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<EquipmentFilter>()
            .await
            .map_err(|e| AppError::Translation(format!("malformed translator response: {}", e)))
    }
}
