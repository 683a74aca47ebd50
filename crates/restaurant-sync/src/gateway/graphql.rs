//! GraphQL gateway over HTTP.
//!
//! Posts `listRestaurants`, `createRestaurant` and `deleteRestaurant`
//! documents to the managed backend's endpoint using [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::RestaurantGateway;
use crate::config::{BackendConfig, Credentials};
use crate::error::RemoteError;
use crate::model::{Draft, Restaurant, RestaurantId};

const LIST_RESTAURANTS: &str = "query ListRestaurants {
  listRestaurants {
    items { id name description city }
  }
}";

const CREATE_RESTAURANT: &str = "mutation CreateRestaurant($input: CreateRestaurantInput!) {
  createRestaurant(input: $input) { id name description city }
}";

const DELETE_RESTAURANT: &str = "mutation DeleteRestaurant($input: DeleteRestaurantInput!) {
  deleteRestaurant(input: $input) { id }
}";

/// HTTP client for the restaurant GraphQL API.
pub struct GraphQlGateway {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

// ========================
// Wire Envelopes
// ========================

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Deserialize)]
struct ListRestaurantsData {
    #[serde(rename = "listRestaurants")]
    list_restaurants: Option<RestaurantConnection>,
}

#[derive(Deserialize)]
struct RestaurantConnection {
    items: Vec<Restaurant>,
}

#[derive(Deserialize)]
struct CreateRestaurantData {
    #[serde(rename = "createRestaurant")]
    create_restaurant: Option<Restaurant>,
}

#[derive(Deserialize)]
struct DeleteRestaurantData {
    #[serde(rename = "deleteRestaurant")]
    delete_restaurant: Option<DeletedRestaurant>,
}

#[derive(Deserialize)]
struct DeletedRestaurant {
    #[allow(dead_code)]
    id: RestaurantId,
}

/// Unwrap a GraphQL response body into its `data` payload.
///
/// Any entry in `errors` fails the whole call, even when partial data
/// came back.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RemoteError> {
    let response: GraphQlResponse<T> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(RemoteError::new(messages.join("; ")));
    }

    response
        .data
        .ok_or_else(|| RemoteError::new("response carried no data"))
}

impl GraphQlGateway {
    pub fn new(config: &BackendConfig, credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.graphql_endpoint.clone(),
            credentials,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, RemoteError> {
        log::debug!("[GATEWAY] {} -> {}", operation, self.endpoint);

        let request = self.client.post(&self.endpoint);
        let request = match &self.credentials {
            Credentials::ApiKey(key) => request.header("x-api-key", key),
            Credentials::SessionToken(token) => request.header("Authorization", token),
        };

        let response = request
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RemoteError::new(format!("{} returned {}: {}", operation, status.as_u16(), body)));
        }

        decode(&body)
    }
}

#[async_trait(?Send)]
impl RestaurantGateway for GraphQlGateway {
    async fn list_all(&self) -> Result<Vec<Restaurant>, RemoteError> {
        let data: ListRestaurantsData = self
            .execute("listRestaurants", LIST_RESTAURANTS, serde_json::Value::Null)
            .await?;
        data.list_restaurants
            .map(|connection| connection.items)
            .ok_or_else(|| RemoteError::new("listRestaurants returned null"))
    }

    async fn create_one(&self, draft: &Draft) -> Result<Restaurant, RemoteError> {
        let data: CreateRestaurantData = self
            .execute("createRestaurant", CREATE_RESTAURANT, json!({ "input": draft }))
            .await?;
        data.create_restaurant
            .ok_or_else(|| RemoteError::new("createRestaurant returned null"))
    }

    async fn delete_one(&self, id: &RestaurantId) -> Result<(), RemoteError> {
        let data: DeleteRestaurantData = self
            .execute("deleteRestaurant", DELETE_RESTAURANT, json!({ "input": { "id": id } }))
            .await?;
        data.delete_restaurant
            .map(|_| ())
            .ok_or_else(|| RemoteError::new(format!("deleteRestaurant({}) returned null", id)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;
    use crate::config::AuthenticationType;

    /// Serve one HTTP request with a canned response, handing back the raw
    /// request text.
    fn serve_once(status: &str, body: &str) -> (BackendConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let config = config_for(&format!("http://{}/graphql", listener.local_addr().unwrap()));
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).expect("write response");
            String::from_utf8_lossy(&raw).to_lowercase()
        });
        (config, handle)
    }

    /// Headers read and `content-length` bytes of body received
    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(end) = text.find("\r\n\r\n") else {
            return false;
        };
        let length = text[..end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= end + 4 + length
    }

    fn config_for(endpoint: &str) -> BackendConfig {
        BackendConfig {
            project_region: "us-east-1".to_string(),
            graphql_endpoint: endpoint.to_string(),
            region: "us-east-1".to_string(),
            authentication_type: AuthenticationType::ApiKey,
            api_key: Some("secret".to_string()),
            user_pool_client_id: None,
            oauth: None,
        }
    }

    #[tokio::test]
    async fn test_api_key_sent_as_x_api_key() {
        let body = r#"{"data":{"listRestaurants":{"items":[{"id":"1","name":"A","description":"d","city":"c"}]}}}"#;
        let (config, server) = serve_once("200 OK", body);
        let gateway = GraphQlGateway::new(&config, Credentials::ApiKey("secret".to_string()));

        let restaurants = gateway.list_all().await.expect("list failed");
        let request = server.join().unwrap();

        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].name, "A");
        assert!(request.starts_with("post /graphql"));
        assert!(request.contains("x-api-key: secret"));
        assert!(!request.contains("authorization:"));
    }

    #[tokio::test]
    async fn test_session_token_sent_as_authorization() {
        let body = r#"{"data":{"deleteRestaurant":{"id":"1"}}}"#;
        let (config, server) = serve_once("200 OK", body);
        let gateway = GraphQlGateway::new(&config, Credentials::SessionToken("jwt".to_string()));

        gateway
            .delete_one(&RestaurantId::new("1").unwrap())
            .await
            .expect("delete failed");
        let request = server.join().unwrap();

        assert!(request.contains("authorization: jwt"));
        assert!(!request.contains("x-api-key:"));
        assert!(request.contains(r#""input":{"id":"1"}"#));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (config, server) = serve_once("401 Unauthorized", r#"{"message":"expired"}"#);
        let gateway = GraphQlGateway::new(&config, Credentials::SessionToken("stale".to_string()));

        let err = gateway.create_one(&Draft::new("B", "d2", "c2")).await.unwrap_err();
        server.join().unwrap();

        assert!(err.message().starts_with("createRestaurant returned 401"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_error() {
        let endpoint = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/graphql", listener.local_addr().unwrap())
        };
        let gateway = GraphQlGateway::new(&config_for(&endpoint), Credentials::ApiKey("secret".to_string()));

        assert!(gateway.list_all().await.is_err());
    }

    #[test]
    fn test_decode_list_in_server_order() {
        let body = r#"{"data":{"listRestaurants":{"items":[
            {"id":"2","name":"B","description":"d2","city":"c2"},
            {"id":"1","name":"A","description":"d","city":"c"}
        ]}}}"#;
        let data: ListRestaurantsData = decode(body).unwrap();
        let items = data.list_restaurants.unwrap().items;
        let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_decode_errors_fail_whole_call() {
        let body = r#"{"data":null,"errors":[{"message":"Unauthorized"},{"message":"Denied"}]}"#;
        let err = decode::<ListRestaurantsData>(body).err().unwrap();
        assert_eq!(err.message(), "Unauthorized; Denied");
    }

    #[test]
    fn test_decode_missing_data_is_error() {
        let err = decode::<CreateRestaurantData>(r#"{"errors":[]}"#).err().unwrap();
        assert_eq!(err.message(), "response carried no data");
    }

    #[test]
    fn test_decode_empty_id_is_error() {
        let body = r#"{"data":{"createRestaurant":{"id":"","name":"A","description":"d","city":"c"}}}"#;
        assert!(decode::<CreateRestaurantData>(body).is_err());
    }

    #[test]
    fn test_create_variables_shape() {
        let draft = Draft::new("B", "d2", "c2");
        let request = GraphQlRequest {
            query: CREATE_RESTAURANT,
            variables: json!({ "input": &draft }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["variables"]["input"], json!({"name":"B","description":"d2","city":"c2"}));
        assert!(value["query"].as_str().unwrap().contains("createRestaurant(input: $input)"));
    }
}
