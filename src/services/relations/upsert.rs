use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::RelationService;
use crate::models::{
    ApiResponse, ErrorCode,
    relations::{requests::UpsertRelationRequest, responses::RelationResponse},
};

pub async fn upsert_relation(
    service: &RelationService,
    relation_data: UpsertRelationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 自环在服务端直接拒绝，不落库
    if relation_data.from_id == relation_data.to_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SelfRelationNotAllowed,
            "An employee cannot have a relation to themselves",
        )));
    }

    let storage = service.get_storage(request);

    // 两端员工都必须已存在
    for endpoint in [&relation_data.from_id, &relation_data.to_id] {
        match storage.get_employee_by_id(endpoint).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::EmployeeNotFound,
                    format!("Employee {endpoint} not found"),
                )));
            }
            Err(e) => {
                error!("Error querying employee: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(ErrorCode::InternalServerError, "Failed to save relation"),
                ));
            }
        }
    }

    match storage.upsert_relation(relation_data).await {
        Ok((relation, created)) => {
            let mut builder = if created {
                HttpResponse::Created()
            } else {
                HttpResponse::Ok()
            };
            let message = if created {
                "Relation created"
            } else {
                "Relation already exists"
            };
            Ok(builder.json(ApiResponse::success(
                RelationResponse { relation, created },
                message,
            )))
        }
        Err(e) => {
            error!("Error saving relation: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to save relation",
                )),
            )
        }
    }
}
