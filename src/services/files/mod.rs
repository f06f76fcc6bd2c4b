pub mod serve;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct FileService;

impl FileService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 提供上传目录下的公开文件（头像）
    pub async fn serve_upload(
        &self,
        file_name: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        serve::serve_upload(self, file_name, request).await
    }
}
