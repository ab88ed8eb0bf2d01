//! Login, token refresh and one-time password flows.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        auth::{LoginDto, OtpSentDto},
        user::UserDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        service::{
            mail::{Mail, Mailer},
            token::TokenService,
        },
        util::password::{generate_otp, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mailer: &'a dyn Mailer,
    company_name: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `tokens` - Access token signer
    /// - `mailer` - Delivers OTP mails
    /// - `company_name` - Signature used in mails
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        mailer: &'a dyn Mailer,
        company_name: &'a str,
    ) -> Self {
        Self {
            db,
            tokens,
            mailer,
            company_name,
        }
    }

    /// Checks credentials and issues an access token.
    ///
    /// The token is also recorded on the user row as the last issued token.
    ///
    /// # Arguments
    /// - `payload` - Email in any case and plain password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user with `accessToken` set
    /// - `Err(AuthError::UserNotFound)` - No user has this email
    /// - `Err(AuthError::WrongPassword)` - Password does not match
    pub async fn login(&self, payload: LoginDto) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);
        let email = payload.email.trim().to_lowercase();

        let Some(user) = repo.find_by_email(&email).await? else {
            return Err(AuthError::UserNotFound(email).into());
        };

        if !verify_password(&payload.password, &user.password) {
            return Err(AuthError::WrongPassword(email).into());
        }

        self.issue_token(user).await
    }

    /// Issues a fresh access token for an authenticated user.
    pub async fn refresh(&self, user: entity::user::Model) -> Result<UserDto, AppError> {
        self.issue_token(user).await
    }

    async fn issue_token(&self, user: entity::user::Model) -> Result<UserDto, AppError> {
        let token = self.tokens.issue(&user)?;

        let user = UserRepository::new(self.db)
            .set_access_token(user.id, token.clone())
            .await?;

        tracing::debug!("Issued access token for user {}", user.id);

        Ok(UserDto::from(user).with_access_token(token))
    }

    /// Mails a fresh one-time password and stores it on the user.
    ///
    /// The code is stored only once the mail was accepted, so a failed
    /// delivery leaves any previous code in place.
    ///
    /// # Returns
    /// - `Ok(OtpSentDto)` - The address the code went to
    /// - `Err(AuthError::UserNotFound)` - No user has this email
    /// - `Err(AppError::MailErr)` - Delivery failed
    pub async fn send_otp(&self, email: &str) -> Result<OtpSentDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::UserNotFound(email.to_string()).into());
        };

        let otp = generate_otp();
        self.mailer
            .send(Mail::otp(&user.email, &otp, self.company_name))
            .await?;
        repo.set_otp(user.id, Some(otp)).await?;

        Ok(OtpSentDto { email: user.email })
    }

    /// Checks a submitted one-time password and clears it on success.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user, OTP cleared
    /// - `Err(AuthError::UserNotFound)` - No user has this email
    /// - `Err(AuthError::InvalidOtp)` - No pending code, or the code differs
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::UserNotFound(email.to_string()).into());
        };

        if user.otp.as_deref() != Some(otp.trim()) {
            return Err(AuthError::InvalidOtp(user.email).into());
        }

        let user = repo.set_otp(user.id, None).await?;

        Ok(UserDto::from(user))
    }
}
