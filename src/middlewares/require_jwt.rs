/*!
 * JWT 认证中间件
 *
 * 校验身份提供方签发的 Bearer 令牌，并把已认证身份注入请求扩展。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件验证令牌签名与有效期
 * 3. 按令牌查缓存，未命中时从存储加载员工档案并回填缓存
 * 4. 将 [`AuthUser`] 存入请求扩展，继续处理请求
 * 5. 令牌无效或缺失时返回 401
 *
 * 注意：尚未走完入职流程的用户持有合法令牌但没有员工档案，
 * 此时 `AuthUser::employee` 为 `None`，入职提交等端点依赖这一点。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::employees::entities::Employee;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use serde::{Deserialize, Serialize};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

/// 已认证身份：令牌声明 + 本地员工档案（可能尚未落库）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub role: String,
    pub employee: Option<Employee>,
}

impl AuthUser {
    /// 员工档案上的反规范化标记优先；尚未落库的用户退回令牌角色声明，
    /// 否则空库上的管理员永远无法通过任何管理端点完成初始化。
    pub fn is_admin(&self) -> bool {
        match &self.employee {
            Some(employee) => employee.is_admin,
            None => self.role == crate::models::employees::entities::ADMIN_ROLE,
        }
    }
}

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：创建认证错误响应
fn create_auth_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

// 辅助函数：提取并验证 JWT token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<AuthUser, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取已解析的身份
    match cache.get_raw(&format!("auth:{token}")).await {
        CacheResult::Found(json) => match serde_json::from_str::<AuthUser>(&json) {
            Ok(user) => return Ok(user),
            Err(_) => {
                cache.remove(&format!("auth:{token}")).await;
                info!("Failed to deserialize auth user from cache for token: {}", token);
            }
        },
        _ => {
            debug!("Auth user not found in cache for token: {}", token);
        }
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    // 员工档案可能尚不存在（入职未批准），不视为认证失败
    let employee = storage
        .get_employee_by_id(&claims.sub)
        .await
        .map_err(|_| "Failed to retrieve employee from storage".to_string())?;

    let user = AuthUser {
        id: claims.sub,
        role: claims.role,
        employee,
    };

    // 将身份信息存入缓存
    let app_config = AppConfig::get();
    if let Ok(user_json) = serde_json::to_string(&user) {
        cache
            .insert_raw(
                format!("auth:{token}"),
                user_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_auth_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_auth_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取已认证身份
impl RequireJWT {
    /// 从请求扩展中提取完整的认证身份
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_auth_user(req: &actix_web::HttpRequest) -> Option<AuthUser> {
        req.extensions().get::<AuthUser>().cloned()
    }

    /// 从请求扩展中提取用户ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions().get::<AuthUser>().map(|user| user.id.clone())
    }

    /// 从请求扩展中提取员工档案（入职未批准时为 None）
    pub fn extract_employee(req: &actix_web::HttpRequest) -> Option<Employee> {
        req.extensions()
            .get::<AuthUser>()
            .and_then(|user| user.employee.clone())
    }

    /// 检查当前请求者是否为管理员
    pub fn is_admin(req: &actix_web::HttpRequest) -> bool {
        req.extensions()
            .get::<AuthUser>()
            .map(|user| user.is_admin())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(is_admin: bool) -> Employee {
        Employee {
            id: "u1".into(),
            email: "jane.doe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            department: "Engineering".into(),
            role: "Engineer".into(),
            is_manager: false,
            is_lead: false,
            is_admin,
            phone: None,
            profile_picture_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_is_admin_prefers_employee_flag() {
        let user = AuthUser {
            id: "u1".into(),
            role: "admin".into(),
            employee: Some(employee(false)),
        };
        assert!(!user.is_admin());

        let user = AuthUser {
            id: "u1".into(),
            role: "employee".into(),
            employee: Some(employee(true)),
        };
        assert!(user.is_admin());
    }

    #[test]
    fn test_is_admin_falls_back_to_token_role_without_profile() {
        let admin = AuthUser {
            id: "hr-root".into(),
            role: "admin".into(),
            employee: None,
        };
        assert!(admin.is_admin());

        let member = AuthUser {
            id: "u2".into(),
            role: "employee".into(),
            employee: None,
        };
        assert!(!member.is_admin());
    }
}
