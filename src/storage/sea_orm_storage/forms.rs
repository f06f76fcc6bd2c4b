use super::SeaOrmStorage;
use crate::entity::forms::{ActiveModel, Column, Entity as Forms};
use crate::errors::{HRSystemError, Result};
use crate::models::forms::{
    entities::Form,
    requests::{CreateFormRequest, UpdateFormRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建表单，未指定 ID 时生成 UUID
    pub async fn create_form_impl(&self, req: CreateFormRequest) -> Result<Form> {
        let now = chrono::Utc::now().timestamp();
        let id = req
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let questions = serde_json::to_string(&req.questions)
            .map_err(|e| HRSystemError::serialization(format!("Failed to serialize questions: {e}")))?;

        let model = ActiveModel {
            id: Set(id),
            title: Set(req.title),
            description: Set(req.description),
            questions: Set(questions),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to create form: {e}")))?;

        Ok(result.into_form())
    }

    /// 表单不存在时创建（内置表单播种），返回是否新建
    pub async fn create_form_if_missing_impl(&self, req: CreateFormRequest) -> Result<bool> {
        let Some(ref id) = req.id else {
            return Err(HRSystemError::validation("Seeded form must carry an id"));
        };

        if self.get_form_by_id_impl(id).await?.is_some() {
            return Ok(false);
        }

        self.create_form_impl(req).await?;
        Ok(true)
    }

    /// 通过 ID 获取表单
    pub async fn get_form_by_id_impl(&self, id: &str) -> Result<Option<Form>> {
        let result = Forms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query form: {e}")))?;

        Ok(result.map(|m| m.into_form()))
    }

    /// 列出全部表单
    pub async fn list_forms_impl(&self) -> Result<Vec<Form>> {
        let result = Forms::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list forms: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_form()).collect())
    }

    /// 更新表单，问题列表整体替换
    pub async fn update_form_impl(
        &self,
        id: &str,
        update: UpdateFormRequest,
    ) -> Result<Option<Form>> {
        let existing = self.get_form_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(questions) = update.questions {
            let serialized = serde_json::to_string(&questions)
                .map_err(|e| HRSystemError::serialization(format!("Failed to serialize questions: {e}")))?;
            model.questions = Set(serialized);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update form: {e}")))?;

        self.get_form_by_id_impl(id).await
    }

    /// 删除表单
    pub async fn delete_form_impl(&self, id: &str) -> Result<bool> {
        let result = Forms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete form: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
