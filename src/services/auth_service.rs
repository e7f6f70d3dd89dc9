use crate::models::{AuthResponse, LoginRequest, Session, SignupRequest, User, UserType};
use crate::services::api_client::{decode, ApiClient};
use crate::services::http::HttpMethod;
use crate::services::ApiError;
use crate::utils::constants::{MSG_INVALID_CREDENTIALS, MSG_INVALID_USER_TYPE, MSG_SIGNUP_FAILED};

/// Login con usuario, contraseña y tipo de usuario
pub async fn perform_login(api: &ApiClient, request: &LoginRequest) -> Result<Session, ApiError> {
    log::info!("🔐 [AUTH] Login de {} ({})", request.username, request.user_type);
    let body = to_body(request)?;
    let value = api
        .request_public(HttpMethod::Post, "/auth/login", Some(&body), MSG_INVALID_CREDENTIALS)
        .await?;
    into_session(value)
}

/// Alta de un usuario nuevo; el backend devuelve ya una sesión
pub async fn perform_signup(api: &ApiClient, request: &SignupRequest) -> Result<Session, ApiError> {
    log::info!("📝 [AUTH] Signup de {} ({})", request.username, request.user_type);
    let body = to_body(request)?;
    let value = api
        .request_public(HttpMethod::Post, "/auth/signup", Some(&body), MSG_SIGNUP_FAILED)
        .await?;
    into_session(value)
}

fn to_body<T: serde::Serialize>(request: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(request)
        .map_err(|e| ApiError::RequestFailed(format!("Serialization error: {}", e)))
}

fn into_session(value: serde_json::Value) -> Result<Session, ApiError> {
    let response: AuthResponse = decode(value)?;

    let raw_type = response
        .user
        .get("userType")
        .and_then(|t| t.as_str())
        .unwrap_or_default();
    if UserType::parse(raw_type).is_none() {
        log::error!("❌ [AUTH] userType desconocido: {:?}", raw_type);
        return Err(ApiError::RequestFailed(MSG_INVALID_USER_TYPE.to_string()));
    }

    let user: User = decode(response.user)?;
    Ok(Session::new(response.token, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, TestHarness};
    use crate::utils::constants::MSG_UNPARSEABLE;

    fn login_request() -> LoginRequest {
        LoginRequest {
            username: "admin1".into(),
            password: "secret1".into(),
            user_type: UserType::Admin,
        }
    }

    #[tokio::test]
    async fn login_returns_session_from_response() {
        let harness = TestHarness::new();
        harness.transport.reply(Reply::json(
            200,
            r#"{"token":"abc","user":{"id":"u1","username":"admin1","email":"a@x","userType":"admin"}}"#,
        ));

        let session = perform_login(&harness.ctx.api, &login_request()).await.unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.user_type, UserType::Admin);

        let sent = harness.transport.last_request().unwrap();
        assert!(sent.url.ends_with("/auth/login"));
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userType"], "admin");
    }

    #[tokio::test]
    async fn unknown_user_type_is_rejected() {
        let harness = TestHarness::new();
        harness.transport.reply(Reply::json(
            200,
            r#"{"token":"abc","user":{"id":"u1","username":"x","userType":"janitor"}}"#,
        ));
        let result = perform_login(&harness.ctx.api, &login_request()).await;
        assert_eq!(result, Err(ApiError::RequestFailed(MSG_INVALID_USER_TYPE.into())));
    }

    #[tokio::test]
    async fn missing_token_is_unparseable() {
        let harness = TestHarness::new();
        harness.transport.reply(Reply::json(200, r#"{"user":{}}"#));
        let result = perform_login(&harness.ctx.api, &login_request()).await;
        assert_eq!(result, Err(ApiError::RequestFailed(MSG_UNPARSEABLE.into())));
    }

    #[tokio::test]
    async fn signup_failure_uses_default_message() {
        let harness = TestHarness::new();
        harness.transport.reply(Reply::json(500, ""));
        let request = SignupRequest {
            username: "new1".into(),
            password: "secret1".into(),
            email: "n@x".into(),
            user_type: UserType::Student,
            roll_number: Some("R-1".into()),
        };
        let result = perform_signup(&harness.ctx.api, &request).await;
        assert_eq!(result, Err(ApiError::RequestFailed(MSG_SIGNUP_FAILED.into())));
    }
}
