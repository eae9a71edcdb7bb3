//! Scene asset rendering through Imagen `predict`.

use super::dto::{PredictInstance, PredictParameters, PredictRequest, PredictResponse};
use crate::http::{build_client, post_json};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use sceneweaver_error::{HttpError, SceneweaverResult};
use sceneweaver_interface::{AssetDriver, RenderCall};
use sceneweaver_rate_limit::RenderConfig;
use std::time::Duration;
use tracing::{debug, instrument};

/// Asset driver backed by the Imagen REST API.
///
/// Each render produces one image, returned as a `data:` URI.
pub struct ImagenAssetDriver {
    client: Client,
    api_key: String,
    config: RenderConfig,
}

impl std::fmt::Debug for ImagenAssetDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagenAssetDriver")
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl ImagenAssetDriver {
    /// Create a driver from an API key and render settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: RenderConfig) -> SceneweaverResult<Self> {
        let client = build_client(Duration::from_secs(120))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:predict",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Turn the first prediction into a data URI.
fn data_uri(response: &PredictResponse) -> Result<String, HttpError> {
    let prediction = response
        .predictions
        .first()
        .ok_or_else(|| HttpError::new("Render returned no predictions"))?;
    let encoded = prediction
        .bytes_base64_encoded
        .as_deref()
        .ok_or_else(|| HttpError::new("Render prediction has no image bytes"))?;

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|e| HttpError::new(format!("Render returned invalid base64: {}", e)))?;
    if decoded.is_empty() {
        return Err(HttpError::new("Render returned an empty image"));
    }

    let mime = prediction.mime_type.as_deref().unwrap_or("image/png");
    Ok(format!("data:{};base64,{}", mime, encoded))
}

#[async_trait]
impl AssetDriver for ImagenAssetDriver {
    #[instrument(skip(self, call), fields(model = %self.config.model, aspect_ratio = %call.aspect_ratio))]
    async fn render(&self, call: &RenderCall) -> SceneweaverResult<String> {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: &call.prompt,
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: call.aspect_ratio.as_str(),
            },
        };

        let response: PredictResponse =
            post_json(&self.client, &self.endpoint(), &self.api_key, &request).await?;
        let uri = data_uri(&response)?;
        debug!(bytes = uri.len(), "Rendered asset");
        Ok(uri)
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(value: serde_json::Value) -> PredictResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn data_uri_uses_reported_mime() {
        let uri = data_uri(&response(serde_json::json!({
            "predictions": [{ "bytesBase64Encoded": "iVBORw0K", "mimeType": "image/jpeg" }]
        })))
        .unwrap();
        assert_eq!(uri, "data:image/jpeg;base64,iVBORw0K");
    }

    #[test]
    fn missing_predictions_is_an_error() {
        assert!(data_uri(&response(serde_json::json!({ "predictions": [] }))).is_err());
        assert!(data_uri(&response(serde_json::json!({}))).is_err());
    }

    #[test]
    fn invalid_base64_is_an_error() {
        let result = data_uri(&response(serde_json::json!({
            "predictions": [{ "bytesBase64Encoded": "***" }]
        })));
        assert!(result.is_err());
    }
}
