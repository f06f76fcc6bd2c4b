use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::forms::entities::{
    EMPLOYEE_FORM_ID, MANAGER_FORM_ID, Question, QuestionType,
};
use crate::models::forms::requests::CreateFormRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    // 根据配置选择缓存后端
    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);

                // 如果配置的缓存失败，尝试回退策略
                if cache_type == "redis" {
                    warn!("Falling back to memory cache");
                    if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                        match fallback_constructor().await {
                            Ok(cache) => {
                                warn!(
                                    "Successfully created fallback Moka (in-memory) cache backend"
                                );
                                return Ok(Arc::from(cache));
                            }
                            Err(fallback_e) => {
                                warn!("Failed to create fallback Moka cache: {}", fallback_e);
                            }
                        }
                    }
                }
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);

        // 如果找不到配置的缓存类型，尝试默认的内存缓存
        if cache_type != "moka" {
            warn!("Falling back to default memory cache");
            if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                match fallback_constructor().await {
                    Ok(cache) => {
                        warn!("Successfully created fallback Moka (in-memory) cache backend");
                        return Ok(Arc::from(cache));
                    }
                    Err(fallback_e) => {
                        warn!("Failed to create fallback Moka cache: {}", fallback_e);
                    }
                }
            }
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

fn rating_question(id: &str, label: &str, section: &str) -> Question {
    Question {
        id: id.to_string(),
        label: label.to_string(),
        question_type: QuestionType::Rating,
        options: (1..=5).map(|n| n.to_string()).collect(),
        section: Some(section.to_string()),
        optional: false,
    }
}

fn text_question(id: &str, label: &str, section: &str) -> Question {
    Question {
        id: id.to_string(),
        label: label.to_string(),
        question_type: QuestionType::Text,
        options: Vec::new(),
        section: Some(section.to_string()),
        optional: true,
    }
}

fn manager_form_template() -> CreateFormRequest {
    CreateFormRequest {
        id: Some(MANAGER_FORM_ID.to_string()),
        title: "Manager Evaluation".to_string(),
        description: Some("Upward appraisal: reports give feedback on their manager or lead".to_string()),
        questions: vec![
            rating_question("communication", "Communicates clearly and in a timely manner", "Leadership"),
            rating_question("support", "Provides enough support for your work", "Leadership"),
            rating_question("feedback", "Gives specific, actionable feedback", "Leadership"),
            rating_question("fairness", "Assigns work and evaluates it fairly", "Leadership"),
            text_question("improvement", "What should this manager improve?", "Comments"),
        ],
    }
}

fn employee_form_template() -> CreateFormRequest {
    CreateFormRequest {
        id: Some(EMPLOYEE_FORM_ID.to_string()),
        title: "Employee Evaluation".to_string(),
        description: Some("Employee appraisal: supervisors evaluate their reports".to_string()),
        questions: vec![
            rating_question("quality", "Quality of work", "Performance"),
            rating_question("reliability", "Reliability of delivery", "Performance"),
            rating_question("collaboration", "Team collaboration", "Performance"),
            rating_question("growth", "Learning and growth", "Performance"),
            text_question("strengths", "What are this employee's strengths?", "Comments"),
            text_question("development", "Suggested areas of development", "Comments"),
        ],
    }
}

/// 种子两张内置评估表单
/// 自动分配引擎依赖固定 ID，表单已存在时不覆盖管理员的修改
async fn seed_canonical_forms(storage: &Arc<dyn Storage>) {
    for template in [manager_form_template(), employee_form_template()] {
        let form_id = template.id.clone().unwrap_or_default();
        match storage.create_form_if_missing(template).await {
            Ok(true) => info!("Seeded form template '{}'", form_id),
            Ok(false) => debug!("Form template '{}' already exists, skipping seed", form_id),
            Err(e) => warn!("Failed to seed form template '{}': {}", form_id, e),
        }
    }
}

/// 确保上传目录存在
fn ensure_upload_dir() {
    let config = AppConfig::get();
    if let Err(e) = std::fs::create_dir_all(&config.upload.dir) {
        warn!("Failed to create upload dir '{}': {}", config.upload.dir, e);
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和内置表单种子
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 种子内置评估表单
    seed_canonical_forms(&storage).await;

    ensure_upload_dir();

    // 创建缓存实例
    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_canonical_ids() {
        assert_eq!(manager_form_template().id.as_deref(), Some(MANAGER_FORM_ID));
        assert_eq!(employee_form_template().id.as_deref(), Some(EMPLOYEE_FORM_ID));
    }

    #[test]
    fn test_rating_questions_are_required() {
        let template = manager_form_template();
        let rating = template
            .questions
            .iter()
            .find(|q| q.question_type == QuestionType::Rating)
            .unwrap();
        assert!(!rating.optional);
        assert_eq!(rating.options.len(), 5);
    }
}
