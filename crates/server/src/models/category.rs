use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    /// Display name
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category id to display name, serialized as a JSON object
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
