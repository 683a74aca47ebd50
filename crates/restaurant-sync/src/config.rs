//! Backend Configuration
//!
//! Settings document produced by the managed backend's tooling
//! (Amplify-style exports), parsed once at start-up and handed to the
//! gateway constructor.

use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How requests to the GraphQL endpoint are authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationType {
    ApiKey,
    AmazonCognitoUserPools,
}

/// Backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(rename = "aws_project_region", default)]
    pub project_region: String,
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    pub graphql_endpoint: String,
    #[serde(rename = "aws_appsync_region", default)]
    pub region: String,
    #[serde(rename = "aws_appsync_authenticationType")]
    pub authentication_type: AuthenticationType,
    #[serde(rename = "aws_appsync_apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(rename = "aws_user_pools_web_client_id", default, skip_serializing_if = "Option::is_none")]
    pub user_pool_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth: Option<HostedUi>,
}

/// Hosted sign-in page of the user pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedUi {
    pub domain: String,
    /// Comma-separated; the first entry is used
    #[serde(rename = "redirectSignIn")]
    pub redirect_sign_in: String,
    #[serde(default = "default_scope")]
    pub scope: Vec<String>,
}

fn default_scope() -> Vec<String> {
    vec!["openid".to_string()]
}

impl BackendConfig {
    /// Parse and check a settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BackendConfig = serde_json::from_str(json)?;
        if config.graphql_endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if config.authentication_type == AuthenticationType::ApiKey
            && config.api_key.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(config)
    }

    /// Credentials that need no sign-in, if the config carries any
    pub fn static_credentials(&self) -> Option<Credentials> {
        match self.authentication_type {
            AuthenticationType::ApiKey => self.api_key.clone().map(Credentials::ApiKey),
            AuthenticationType::AmazonCognitoUserPools => None,
        }
    }

    /// Hosted UI login URL returning an id-token in the redirect fragment
    pub fn hosted_sign_in_url(&self) -> Option<String> {
        let oauth = self.oauth.as_ref()?;
        let client_id = self.user_pool_client_id.as_deref()?;
        let redirect = oauth.redirect_sign_in.split(',').next()?.trim();
        let encode = |value: &str| utf8_percent_encode(value, NON_ALPHANUMERIC).to_string();

        Some(format!(
            "https://{}/login?client_id={}&response_type=token&scope={}&redirect_uri={}",
            oauth.domain,
            encode(client_id),
            encode(&oauth.scope.join(" ")),
            encode(redirect),
        ))
    }
}

/// Pull `id_token` out of a hosted-UI redirect fragment
/// (`#id_token=..&access_token=..&token_type=Bearer`).
pub fn id_token_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "id_token")
        .map(|(_, value)| value.to_string())
        .filter(|token| !token.is_empty())
}

/// Secret attached to every gateway request
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as `x-api-key`
    ApiKey(String),
    /// Session id-token from the sign-in flow, sent as `Authorization`
    SessionToken(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(..)"),
            Credentials::SessionToken(_) => f.write_str("SessionToken(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_KEY_CONFIG: &str = r#"{
        "aws_project_region": "us-east-1",
        "aws_appsync_graphqlEndpoint": "https://example.appsync-api.us-east-1.amazonaws.com/graphql",
        "aws_appsync_region": "us-east-1",
        "aws_appsync_authenticationType": "API_KEY",
        "aws_appsync_apiKey": "da2-test"
    }"#;

    #[test]
    fn test_parse_api_key_config() {
        let config = BackendConfig::from_json(API_KEY_CONFIG).expect("config should parse");
        assert_eq!(config.authentication_type, AuthenticationType::ApiKey);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(
            config.static_credentials(),
            Some(Credentials::ApiKey("da2-test".to_string()))
        );
    }

    #[test]
    fn test_user_pool_config_has_no_static_credentials() {
        let json = r#"{
            "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
            "aws_appsync_authenticationType": "AMAZON_COGNITO_USER_POOLS"
        }"#;
        let config = BackendConfig::from_json(json).unwrap();
        assert!(config.static_credentials().is_none());
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let json = r#"{
            "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
            "aws_appsync_authenticationType": "API_KEY"
        }"#;
        assert!(matches!(BackendConfig::from_json(json), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let json = r#"{
            "aws_appsync_graphqlEndpoint": " ",
            "aws_appsync_authenticationType": "AMAZON_COGNITO_USER_POOLS"
        }"#;
        assert!(matches!(BackendConfig::from_json(json), Err(ConfigError::MissingEndpoint)));
    }

    #[test]
    fn test_hosted_sign_in_url() {
        let json = r#"{
            "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
            "aws_appsync_authenticationType": "AMAZON_COGNITO_USER_POOLS",
            "aws_user_pools_web_client_id": "client123",
            "oauth": {
                "domain": "board.auth.us-east-1.amazoncognito.com",
                "redirectSignIn": "http://localhost:8080/,https://board.example.com/",
                "scope": ["openid", "email"]
            }
        }"#;
        let config = BackendConfig::from_json(json).unwrap();
        assert_eq!(
            config.hosted_sign_in_url().as_deref(),
            Some(
                "https://board.auth.us-east-1.amazoncognito.com/login?client_id=client123\
                 &response_type=token&scope=openid%20email&redirect_uri=http%3A%2F%2Flocalhost%3A8080%2F"
            )
        );
    }

    #[test]
    fn test_hosted_sign_in_needs_client_id() {
        let json = r#"{
            "aws_appsync_graphqlEndpoint": "https://example.com/graphql",
            "aws_appsync_authenticationType": "AMAZON_COGNITO_USER_POOLS",
            "oauth": { "domain": "d", "redirectSignIn": "http://localhost/" }
        }"#;
        assert!(BackendConfig::from_json(json).unwrap().hosted_sign_in_url().is_none());
    }

    #[test]
    fn test_id_token_from_fragment() {
        assert_eq!(
            id_token_from_fragment("#access_token=aaa&id_token=eyJ.x.y&token_type=Bearer"),
            Some("eyJ.x.y".to_string())
        );
        assert_eq!(id_token_from_fragment("#access_token=aaa"), None);
        assert_eq!(id_token_from_fragment("#id_token="), None);
        assert_eq!(id_token_from_fragment(""), None);
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::SessionToken("secret-jwt".to_string());
        assert_eq!(format!("{:?}", creds), "SessionToken(..)");
    }
}
