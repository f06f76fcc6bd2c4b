use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

// JWT Claims 结构体
//
// 令牌由外部身份提供方签发（共享密钥），本服务只做校验，不负责签发。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject（员工 ID）
    pub role: String, // 身份提供方侧的角色标签
    pub exp: usize,   // Expiration time (时间戳)
    pub iat: usize,   // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 验证 JWT token，返回 Claims
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn issue(sub: &str, secret: &str, exp_offset: i64) -> String {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            role: "member".to_string(),
            exp: (now.timestamp() + exp_offset) as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let secret = AppConfig::get().jwt.secret.clone();
        let token = issue("emp-001", &secret, 3600);
        let claims = JwtUtils::verify_token(&token).unwrap();
        assert_eq!(claims.sub, "emp-001");
        assert_eq!(claims.role, "member");
    }

    #[test]
    fn test_verify_expired_token() {
        let secret = AppConfig::get().jwt.secret.clone();
        let token = issue("emp-001", &secret, -3600);
        assert!(JwtUtils::verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let _ = AppConfig::get();
        let token = issue("emp-001", "some-other-secret", 3600);
        assert!(JwtUtils::verify_token(&token).is_err());
    }
}
