use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::OnboardingService;
use crate::config::AppConfig;
use crate::errors::HRSystemError;
use crate::middlewares::RequireJWT;
use crate::models::onboarding::{
    entities::OnboardingStatus, requests::SubmitOnboardingRequest, responses::OnboardingResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_person_name, validate_phone};
use crate::utils::validate_magic_bytes;

// 读取 multipart 文本字段
async fn read_field_string(field: &mut actix_multipart::Field) -> ActixResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

pub async fn submit_request(
    service: &OnboardingService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let auth_user = match RequireJWT::extract_auth_user(request) {
        Some(user) => user,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )),
            );
        }
    };

    let user_id = auth_user.id.clone();
    let storage = service.get_storage(request);

    // 每个用户同时只允许一份待审批/已批准的申请，被驳回后可重新提交
    match storage.get_onboarding_request_by_user_id(&user_id).await {
        Ok(Some(existing)) if existing.status != OnboardingStatus::Rejected => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::OnboardingAlreadySubmitted,
                "An onboarding request already exists for this user",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Error querying onboarding request: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit onboarding request",
                )),
            );
        }
    }

    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    // 表单字段
    let mut email = String::new();
    let mut first_name = String::new();
    let mut last_name = String::new();
    let mut department = String::new();
    let mut role = String::new();
    let mut phone: Option<String> = None;
    let mut is_manager = false;
    let mut is_lead = false;
    let mut manager_name: Option<String> = None;
    let mut profile_picture_url: Option<String> = None;
    let mut file_uploaded = false;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "email" => email = read_field_string(&mut field).await?,
            "first_name" => first_name = read_field_string(&mut field).await?,
            "last_name" => last_name = read_field_string(&mut field).await?,
            "department" => department = read_field_string(&mut field).await?,
            "role" => role = read_field_string(&mut field).await?,
            "phone" => {
                let value = read_field_string(&mut field).await?;
                if !value.is_empty() {
                    phone = Some(value);
                }
            }
            "is_manager" => is_manager = read_field_string(&mut field).await? == "true",
            "is_lead" => is_lead = read_field_string(&mut field).await? == "true",
            "manager_name" => {
                let value = read_field_string(&mut field).await?;
                if !value.is_empty() {
                    manager_name = Some(value);
                }
            }
            "profile_picture" => {
                if file_uploaded {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MultifileUploadNotAllowed,
                        "Only one file can be uploaded at a time",
                    )));
                }
                file_uploaded = true;

                let original_name = content_disposition
                    .and_then(|cd| cd.get_filename())
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                let extension = Path::new(&original_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| format!(".{}", ext.to_lowercase()))
                    .unwrap_or_default();

                if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "File type not allowed",
                    )));
                }

                // 确保上传目录存在
                if !Path::new(upload_dir).exists()
                    && let Err(e) = fs::create_dir_all(upload_dir)
                {
                    tracing::error!("{}", HRSystemError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(
                            ErrorCode::FileUploadFailed,
                            "Failed to create upload directory",
                        ),
                    ));
                }

                let stored_name = format!(
                    "{}-{}{}",
                    chrono::Utc::now().timestamp(),
                    Uuid::new_v4(),
                    extension
                );
                let file_path = format!("{upload_dir}/{stored_name}");
                let mut f = match File::create(&file_path) {
                    Ok(file) => file,
                    Err(e) => {
                        tracing::error!("{}", HRSystemError::file_operation(format!("{e}")));
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::FileUploadFailed,
                                "Failed to create file",
                            ),
                        ));
                    }
                };

                let mut total_size: usize = 0;
                let mut first_chunk = true;
                while let Some(chunk) = field.next().await {
                    let data = chunk?;

                    // 第一个 chunk 时验证魔术字节
                    if first_chunk {
                        first_chunk = false;
                        if !validate_magic_bytes(&data, &extension) {
                            let _ = fs::remove_file(&file_path);
                            return Ok(HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::FileTypeNotAllowed,
                                    "File content does not match its extension",
                                ),
                            ));
                        }
                    }

                    total_size += data.len();
                    if total_size > max_size {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileSizeExceeded,
                            "File size exceeds the limit",
                        )));
                    }
                    f.write_all(&data)?;
                }

                // 落库存相对路径，展示时再拼接应用基址
                profile_picture_url = Some(format!("/uploads/{stored_name}"));
            }
            _ => {
                // 忽略未知字段
                while let Some(chunk) = field.next().await {
                    let _ = chunk?;
                }
            }
        }
    }

    // 字段校验
    if let Err(msg) = validate_email(&email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg))
        );
    }
    if let Err(msg) =
        validate_person_name(&first_name).and(validate_person_name(&last_name))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if department.is_empty() || role.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Department and role cannot be empty",
        )));
    }
    if let Some(ref value) = phone
        && let Err(msg) = validate_phone(value)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::PhoneInvalid, msg))
        );
    }

    let submit = SubmitOnboardingRequest {
        email,
        first_name,
        last_name,
        department,
        role,
        phone,
        is_manager,
        is_lead,
        manager_name,
    };

    match storage
        .create_onboarding_request(&user_id, &auth_user.role, submit, profile_picture_url)
        .await
    {
        Ok(onboarding_request) => Ok(HttpResponse::Created().json(ApiResponse::success(
            OnboardingResponse {
                request: onboarding_request,
            },
            "Onboarding request submitted",
        ))),
        Err(e) => {
            tracing::error!("Error creating onboarding request: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit onboarding request",
                )),
            )
        }
    }
}
