//! Bodies of the login, poll, refresh and signup endpoints.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Starts the email login flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Device type the app reports, e.g. `IOS` or `ANDROID`.
    pub device_type: String,
    pub email: String,
}

/// Answer to a login request. Carries no tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    /// Handle to pass to [`PollRequest::polling_id`].
    #[serde(deserialize_with = "null_as_default")]
    pub polling_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
}

/// Checks whether the login email has been confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollRequest {
    pub device_type: String,
    pub email: String,
    #[serde(rename = "request_polling_id")]
    pub polling_id: String,
}

/// Tokens issued once the login has been confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
    #[serde(rename = "access_token_ttl_seconds", deserialize_with = "null_as_default")]
    pub access_token_ttl: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub startup_data: StartupData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokensRequest {
    pub refresh_token: String,
}

/// New tokens. The user id is not repeated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshTokensResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
    #[serde(rename = "access_token_ttl_seconds", deserialize_with = "null_as_default")]
    pub access_token_ttl: i64,
}

/// Creates a new account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub country_id: String,
    pub device_type: String,
    pub email: String,
    pub name: String,
    pub newsletter_opt_in: bool,
    pub push_notification_opt_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignupResponse {
    #[serde(rename = "login_response", deserialize_with = "null_as_default")]
    pub login: Login,
}

/// Tokens of a freshly created account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Login {
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
    #[serde(rename = "access_token_ttl_seconds", deserialize_with = "null_as_default")]
    pub access_token_ttl: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub startup_data: StartupData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StartupData {
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_request_uses_wire_name_for_polling_id() {
        let request = PollRequest {
            device_type: "IOS".to_string(),
            email: "some@email.com".to_string(),
            polling_id: "polling_id".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["request_polling_id"], "polling_id");
    }

    #[test]
    fn test_signup_response_nested_login() {
        let response: SignupResponse = serde_json::from_str(
            r#"{
                "login_response": {
                    "access_token": "a",
                    "refresh_token": "r",
                    "access_token_ttl_seconds": 172800,
                    "startup_data": {"user": {"user_id": "7"}}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(response.login.access_token, "a");
        assert_eq!(response.login.access_token_ttl, 172800);
        assert_eq!(response.login.startup_data.user.user_id, "7");
    }

    #[test]
    fn test_missing_fields_default() {
        let response: PollResponse =
            serde_json::from_str(r#"{"access_token": "a"}"#).unwrap();
        assert_eq!(response.access_token, "a");
        assert_eq!(response.startup_data.user.user_id, "");
    }
}
