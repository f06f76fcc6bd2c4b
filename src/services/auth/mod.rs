pub mod profile;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 当前登录者的员工档案
    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
    }
}
