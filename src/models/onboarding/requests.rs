use serde::Deserialize;
use ts_rs::TS;

// 入职申请的表单字段部分
//
// 实际请求是 multipart（含可选头像文件），文本字段在服务层
// 逐个读出后填充到这里再统一校验。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub struct SubmitOnboardingRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub is_lead: bool,
    pub manager_name: Option<String>,
}

// 入职申请列表查询参数（默认只看 pending）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub struct OnboardingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<super::entities::OnboardingStatus>,
}
