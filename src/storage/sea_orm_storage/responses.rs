use std::collections::BTreeMap;

use super::SeaOrmStorage;
use crate::entity::form_responses::{ActiveModel, Column, Entity as FormResponses};
use crate::errors::{HRSystemError, Result};
use crate::models::responses::entities::FormResponse;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入一条回复
    ///
    /// 回复一经写入不再修改，(assignment_id, responder_id) 唯一索引
    /// 兜底并发下的重复提交。
    pub async fn create_response_impl(
        &self,
        assignment_id: &str,
        responder_id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<FormResponse> {
        let serialized = serde_json::to_string(&answers)
            .map_err(|e| HRSystemError::serialization(format!("Failed to serialize answers: {e}")))?;

        let model = ActiveModel {
            assignment_id: Set(assignment_id.to_string()),
            responder_id: Set(responder_id.to_string()),
            answers: Set(serialized),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to create response: {e}")))?;

        Ok(result.into_response())
    }

    /// 查询某人对某任务的回复
    pub async fn get_response_by_assignment_and_responder_impl(
        &self,
        assignment_id: &str,
        responder_id: &str,
    ) -> Result<Option<FormResponse>> {
        let result = FormResponses::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::ResponderId.eq(responder_id))
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query response: {e}")))?;

        Ok(result.map(|m| m.into_response()))
    }

    /// 列出某任务下的全部回复
    pub async fn list_responses_for_assignment_impl(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<FormResponse>> {
        let result = FormResponses::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list responses: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_response()).collect())
    }
}
