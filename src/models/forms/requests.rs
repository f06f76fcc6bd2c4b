use serde::Deserialize;
use ts_rs::TS;

use super::entities::Question;

// 创建表单（id 可指定，用于两个固定模板；缺省时生成 uuid）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct CreateFormRequest {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

// 编辑表单：问题列表整体替换
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct UpdateFormRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<Question>>,
}
