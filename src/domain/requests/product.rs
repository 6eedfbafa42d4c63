use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchProductsQuery {
    /// Term matched against brand and model, case-insensitively.
    pub q: String,
}
