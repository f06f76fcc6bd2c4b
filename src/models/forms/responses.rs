use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Form;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormDetailResponse {
    pub form: Form,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormListResponse {
    pub items: Vec<Form>,
}
