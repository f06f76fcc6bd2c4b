use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path};

use super::FileService;
use crate::config::AppConfig;
use crate::errors::HRSystemError;
use crate::models::{ApiResponse, ErrorCode};

fn content_type_for(file_name: &str) -> &'static str {
    match Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

pub async fn serve_upload(
    _service: &FileService,
    file_name: String,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 只接受单段文件名，任何路径穿越成分直接 404
    let name_path = Path::new(&file_name);
    let is_plain_name = name_path.components().count() == 1
        && matches!(name_path.components().next(), Some(Component::Normal(_)));
    if !is_plain_name || file_name.contains("..") {
        return Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::FileNotFound, "File not found")));
    }

    let config = AppConfig::get();
    let file_path = Path::new(&config.upload.dir).join(&file_name);

    if !file_path.is_file() {
        return Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::FileNotFound, "File not found")));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", HRSystemError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to read file",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", HRSystemError::file_operation("Failed to read file"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to read file",
            )),
        );
    }

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type_for(&file_name)))
        .body(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.webp"), "image/webp");
        assert_eq!(content_type_for("a"), "application/octet-stream");
    }
}
