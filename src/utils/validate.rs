use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::forms::entities::Form;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{5,19}$").expect("Invalid phone regex"));

static EMPLOYEE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.@-]+$").expect("Invalid employee id regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

pub fn validate_employee_id(id: &str) -> Result<(), &'static str> {
    // 员工 ID 即身份提供方的用户 ID，限制为 URL 安全字符
    if id.is_empty() || id.len() > 64 {
        return Err("Employee id length must be between 1 and 64 characters");
    }
    if !EMPLOYEE_ID_RE.is_match(id) {
        return Err("Employee id must contain only letters, digits, '_', '.', '@' or '-'");
    }
    Ok(())
}

pub fn validate_opaque_id(id: &str) -> Result<(), &'static str> {
    // 表单/任务 ID：自动分配引擎会拼接多个员工 ID，长度上限放宽
    if id.is_empty() || id.len() > 256 {
        return Err("Id length must be between 1 and 256 characters");
    }
    if !EMPLOYEE_ID_RE.is_match(id) {
        return Err("Id must contain only letters, digits, '_', '.', '@' or '-'");
    }
    Ok(())
}

pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.len() > 100 {
        return Err("Name length must be between 1 and 100 characters");
    }
    Ok(())
}

/// 校验一份问卷答案是否满足表单定义
///
/// 规则：
/// - 每个答案的 question_id 必须存在于表单中
/// - 非 optional 的问题必须有非空答案
/// - 选择题的答案必须是选项之一
pub fn validate_answers(form: &Form, answers: &BTreeMap<String, String>) -> Result<(), String> {
    for question_id in answers.keys() {
        if !form.has_question(question_id) {
            return Err(format!("Unknown question id: {question_id}"));
        }
    }

    for question in &form.questions {
        let answer = answers.get(&question.id).map(|a| a.trim());
        match answer {
            None | Some("") => {
                if !question.optional {
                    return Err(format!("Missing answer for required question: {}", question.id));
                }
            }
            Some(value) => {
                // 选项为空的问题视为自由文本
                if !question.options.is_empty() && !question.options.iter().any(|o| o == value) {
                    return Err(format!(
                        "Answer for question {} is not one of the allowed options",
                        question.id
                    ));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forms::entities::{Question, QuestionType};

    fn sample_form() -> Form {
        Form {
            id: "manager-form".to_string(),
            title: "管理者评估".to_string(),
            description: None,
            questions: vec![
                Question {
                    id: "q1".to_string(),
                    label: "总体评价".to_string(),
                    question_type: QuestionType::MultipleChoice,
                    options: vec!["好".to_string(), "一般".to_string()],
                    section: None,
                    optional: false,
                },
                Question {
                    id: "q2".to_string(),
                    label: "补充说明".to_string(),
                    question_type: QuestionType::Text,
                    options: vec![],
                    section: None,
                    optional: true,
                },
            ],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+86 138-0000-0000").is_ok());
        assert!(validate_phone("13800000000").is_ok());
        assert!(validate_phone("abc").is_err());
    }

    #[test]
    fn test_employee_id() {
        assert!(validate_employee_id("alice.wang").is_ok());
        assert!(validate_employee_id("u-1024@corp").is_ok());
        assert!(validate_employee_id("").is_err());
        assert!(validate_employee_id("bad/id").is_err());
    }

    #[test]
    fn test_answers_complete() {
        let form = sample_form();
        let mut answers = BTreeMap::new();
        answers.insert("q1".to_string(), "好".to_string());
        assert!(validate_answers(&form, &answers).is_ok());
    }

    #[test]
    fn test_answers_missing_required() {
        let form = sample_form();
        let answers = BTreeMap::new();
        assert!(validate_answers(&form, &answers).is_err());
    }

    #[test]
    fn test_answers_unknown_question() {
        let form = sample_form();
        let mut answers = BTreeMap::new();
        answers.insert("q1".to_string(), "好".to_string());
        answers.insert("q99".to_string(), "x".to_string());
        assert!(validate_answers(&form, &answers).is_err());
    }

    #[test]
    fn test_answers_free_text_accepts_any_value() {
        let form = sample_form();
        let mut answers = BTreeMap::new();
        answers.insert("q1".to_string(), "好".to_string());
        answers.insert("q2".to_string(), "任意自由文本".to_string());
        assert!(validate_answers(&form, &answers).is_ok());
    }

    #[test]
    fn test_answers_invalid_option() {
        let form = sample_form();
        let mut answers = BTreeMap::new();
        answers.insert("q1".to_string(), "非常好".to_string());
        assert!(validate_answers(&form, &answers).is_err());
    }
}
