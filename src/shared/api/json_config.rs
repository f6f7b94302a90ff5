// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// Resume documents with long histories can exceed actix's 32KB default.
const JSON_LIMIT_BYTES: usize = 512 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}

/// Raw upload bodies (media files) are bounded by the upload policy, so the
/// extractor limit only needs to sit slightly above it.
pub fn upload_payload_config(max_file_size_bytes: u64) -> PayloadConfig {
    let limit = usize::try_from(max_file_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(1024);
    PayloadConfig::new(limit)
}
