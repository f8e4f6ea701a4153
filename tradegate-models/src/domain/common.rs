use serde::Deserialize;
use validator::Validate;

/// Path parameter carrying a primary key.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PathId {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
}

/// Request body for toggling a handled/unhandled style flag.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeHandledPayload {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub is_handled: bool,
}
