use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::employee_relations::{ActiveModel, Column, Entity as EmployeeRelations};
use crate::entity::prelude::Employees;
use crate::errors::{HRSystemError, Result};
use crate::models::relations::{
    entities::{EmployeeRelation, RelationWithEmployees},
    requests::{UpdateRelationRequest, UpsertRelationRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

/// (from_id, to_id, relation_type) 唯一边上的冲突子句
fn edge_conflict() -> OnConflict {
    OnConflict::columns([Column::FromId, Column::ToId, Column::RelationType])
        .do_nothing()
        .to_owned()
}

impl SeaOrmStorage {
    /// 幂等写入关系边
    ///
    /// 冲突在数据库层解决：并发写同一条边时输家落到已有行，不报错。
    pub async fn upsert_relation_impl(
        &self,
        req: UpsertRelationRequest,
    ) -> Result<(EmployeeRelation, bool)> {
        let from_id = req.from_id.clone();
        let to_id = req.to_id.clone();
        let relation_type = req.relation_type.to_string();

        let model = ActiveModel {
            from_id: Set(req.from_id),
            to_id: Set(req.to_id),
            relation_type: Set(relation_type.clone()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let created = match EmployeeRelations::insert(model)
            .on_conflict(edge_conflict())
            .exec(&self.db)
            .await
        {
            Ok(_) => true,
            Err(DbErr::RecordNotInserted) => false,
            Err(e) => {
                return Err(HRSystemError::database_operation(format!(
                    "Failed to create relation: {e}"
                )));
            }
        };

        let row = EmployeeRelations::find()
            .filter(Column::FromId.eq(&from_id))
            .filter(Column::ToId.eq(&to_id))
            .filter(Column::RelationType.eq(&relation_type))
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query relation: {e}")))?
            .ok_or_else(|| {
                HRSystemError::database_operation("Relation not found after insert".to_string())
            })?;

        Ok((row.into_relation(), created))
    }

    /// 通过 ID 获取关系边
    pub async fn get_relation_by_id_impl(&self, id: i64) -> Result<Option<EmployeeRelation>> {
        let result = EmployeeRelations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query relation: {e}")))?;

        Ok(result.map(|m| m.into_relation()))
    }

    /// 列出全量关系边
    pub async fn list_relations_impl(&self) -> Result<Vec<EmployeeRelation>> {
        let result = EmployeeRelations::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list relations: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_relation()).collect())
    }

    /// 列出关系边并联出两端员工
    ///
    /// 两端员工任一缺失的边（数据不一致时）被跳过而不是报错。
    pub async fn list_relations_with_employees_impl(&self) -> Result<Vec<RelationWithEmployees>> {
        let relations = self.list_relations_impl().await?;

        let employees = Employees::find()
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list employees: {e}")))?;

        let by_id: HashMap<String, _> = employees
            .into_iter()
            .map(|m| (m.id.clone(), m.into_employee()))
            .collect();

        let items = relations
            .into_iter()
            .filter_map(|relation| {
                let from_employee = by_id.get(&relation.from_id)?.clone();
                let to_employee = by_id.get(&relation.to_id)?.clone();
                Some(RelationWithEmployees {
                    relation,
                    from_employee,
                    to_employee,
                })
            })
            .collect();

        Ok(items)
    }

    /// 修改关系边类型
    pub async fn update_relation_impl(
        &self,
        id: i64,
        update: UpdateRelationRequest,
    ) -> Result<Option<EmployeeRelation>> {
        let existing = self.get_relation_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            relation_type: Set(update.relation_type.to_string()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update relation: {e}")))?;

        self.get_relation_by_id_impl(id).await
    }

    /// 删除关系边
    pub async fn delete_relation_impl(&self, id: i64) -> Result<bool> {
        let result = EmployeeRelations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete relation: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_upsert_resolves_duplicate_edge_in_database() {
        // 并发写同一条边必须在数据库层收敛，而不是触发唯一约束错误
        let model = ActiveModel {
            from_id: Set("mgr".to_string()),
            to_id: Set("dev".to_string()),
            relation_type: Set("manager".to_string()),
            created_at: Set(0),
            ..Default::default()
        };

        let sql = EmployeeRelations::insert(model)
            .on_conflict(edge_conflict())
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains("ON CONFLICT"));
        assert!(sql.contains("DO NOTHING"));
    }
}
