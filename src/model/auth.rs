use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpDto {
    pub otp: String,
}

/// Acknowledges that a one-time password was mailed. The code itself is
/// only ever delivered by mail.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OtpSentDto {
    pub email: String,
}
