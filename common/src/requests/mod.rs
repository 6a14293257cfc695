use serde::Deserialize;

/// Request payload for `POST /Save`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrUpdateTranslationRequestModel {
    pub key: String,
    pub language: String,
    #[serde(alias = "value")]
    pub translation: String,
}

/// Request payload for `POST /Remove`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveTranslationRequestModel {
    pub key: String,
    pub language: String,
}
