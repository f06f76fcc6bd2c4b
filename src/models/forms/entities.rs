use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 评估分配引擎依赖的两个固定模板 ID
pub const MANAGER_FORM_ID: &str = "manager-form";
pub const EMPLOYEE_FORM_ID: &str = "employee-form";

// 问题类型（序列化为 kebab-case，与前端表单控件对应）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum QuestionType {
    Rating,
    MultipleChoice,
    Text,
    Select,
    Tel,
    File,
}

// 表单问题
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct Question {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    // 多分区表单的分区名
    pub section: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

// 表单（问题列表有序，编辑时整体替换）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct Form {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Form {
    /// 必填问题的 ID 集合（回复校验的依据）
    pub fn required_question_ids(&self) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| !q.optional)
            .map(|q| q.id.as_str())
            .collect()
    }

    pub fn has_question(&self, question_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_serialization() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple-choice\"");
        let parsed: QuestionType = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(parsed, QuestionType::Rating);
    }

    #[test]
    fn test_required_question_ids_skips_optional() {
        let form = Form {
            id: MANAGER_FORM_ID.into(),
            title: "Manager evaluation".into(),
            description: None,
            questions: vec![
                Question {
                    id: "q1".into(),
                    label: "Overall rating".into(),
                    question_type: QuestionType::Rating,
                    options: vec![],
                    section: Some("General".into()),
                    optional: false,
                },
                Question {
                    id: "q2".into(),
                    label: "Additional comments".into(),
                    question_type: QuestionType::Text,
                    options: vec![],
                    section: None,
                    optional: true,
                },
            ],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        assert_eq!(form.required_question_ids(), vec!["q1"]);
        assert!(form.has_question("q2"));
        assert!(!form.has_question("q3"));
    }
}
