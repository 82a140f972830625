//! HTTP client for the remote room service.
//!
//! Rooms live under the owner's collection:
//!
//! ```text
//! GET  {base_url}/properties/{id}/rooms    -> [{"id": .., "name": ..}, ..]
//! GET  {base_url}/changeovers/{id}/rooms
//! POST {base_url}/{scope}/{id}/rooms       {"name": ..} -> {"id": .., "name": ..}
//! ```
//!
//! Requests carry no timeout and are never retried; a hung request leaves the
//! field waiting until it settles.

use crate::error::{Result, RoomError};
use crate::owner::OwnerId;
use crate::room::Room;
use crate::service::RoomService;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Where the room service lives and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL, e.g. `https://api.example.com/v1`. A trailing slash is ignored.
    pub base_url: String,
    /// Bearer token sent with every request, if any.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Collection URL for `owner`'s rooms.
    ///
    /// The owner id is pushed as a single percent-encoded path segment, so
    /// `/`, `?` and `#` inside it stay part of the id.
    pub fn rooms_url(&self, owner: &OwnerId) -> Result<Url> {
        let id = owner.id();
        if id.is_empty() || id == "." || id == ".." {
            return Err(RoomError::InvalidOwner(id.to_string()));
        }
        let mut url =
            Url::parse(&self.base_url).map_err(|e| RoomError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RoomError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(owner.scope())
            .push(id)
            .push("rooms");
        Ok(url)
    }
}

impl From<reqwest::Error> for RoomError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpRequest(e.to_string())
    }
}

#[derive(Serialize)]
struct NewRoom<'a> {
    name: &'a str,
}

/// [`RoomService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRoomService {
    client: Client,
    config: ServiceConfig,
}

impl HttpRoomService {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing client (connection pool, default headers).
    pub fn with_client(client: Client, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

/// Turn a response into `T`, mapping non-2xx statuses and bad bodies to errors.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(RoomError::Status {
            status: status.as_u16(),
            message: body,
        });
    }
    serde_json::from_str(&body).map_err(|e| RoomError::ResponseParse(e.to_string()))
}

#[async_trait(?Send)]
impl RoomService for HttpRoomService {
    async fn fetch_rooms(&self, owner: &OwnerId) -> Result<Vec<Room>> {
        let url = self.config.rooms_url(owner)?;
        log::debug!("GET {}", url);
        let response = self.authorize(self.client.get(url)).send().await?;
        let rooms: Vec<Room> = decode(response).await?;
        log::info!("Fetched {} rooms for {}", rooms.len(), owner);
        Ok(rooms)
    }

    async fn create_room(&self, owner: &OwnerId, name: &str) -> Result<Room> {
        let url = self.config.rooms_url(owner)?;
        log::debug!("POST {} name={:?}", url, name);
        let response = self
            .authorize(self.client.post(url))
            .json(&NewRoom { name })
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_url_per_owner_kind() {
        let config = ServiceConfig::new("https://rooms.example.com/api");
        assert_eq!(
            config.rooms_url(&OwnerId::property("42")).unwrap().as_str(),
            "https://rooms.example.com/api/properties/42/rooms"
        );
        assert_eq!(
            config
                .rooms_url(&OwnerId::changeover("7c1e-44"))
                .unwrap()
                .as_str(),
            "https://rooms.example.com/api/changeovers/7c1e-44/rooms"
        );
    }

    #[test]
    fn test_rooms_url_ignores_trailing_slash() {
        let config = ServiceConfig::new("http://localhost:8080/");
        assert_eq!(
            config.rooms_url(&OwnerId::property("1")).unwrap().as_str(),
            "http://localhost:8080/properties/1/rooms"
        );
    }

    #[test]
    fn test_owner_id_cannot_escape_rooms_path() {
        let config = ServiceConfig::new("https://rooms.example.com/api");
        let url = config
            .rooms_url(&OwnerId::property("12/../../admin?x=1#"))
            .unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert!(url.path().starts_with("/api/properties/"));
        assert!(url.path().ends_with("/rooms"));
        let segments: Vec<_> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 4);
        assert!(!segments[2].contains('/'));
        assert!(!segments[2].contains('?'));
    }

    #[test]
    fn test_dot_owner_ids_are_rejected() {
        let config = ServiceConfig::new("https://rooms.example.com/api");
        for id in ["", ".", ".."] {
            let err = config.rooms_url(&OwnerId::property(id)).unwrap_err();
            assert!(matches!(err, RoomError::InvalidOwner(_)), "{id:?}");
        }
    }

    #[test]
    fn test_bad_base_url_is_an_error() {
        let config = ServiceConfig::new("not a url");
        let err = config.rooms_url(&OwnerId::property("1")).unwrap_err();
        assert!(matches!(err, RoomError::InvalidUrl(_)));
    }

    #[test]
    fn test_config_deserializes_without_api_key() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost"}"#).unwrap();
        assert_eq!(config, ServiceConfig::new("http://localhost"));

        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost", "api_key": "k"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_new_room_body() {
        let body = serde_json::to_string(&NewRoom { name: "Shed" }).unwrap();
        assert_eq!(body, r#"{"name":"Shed"}"#);
    }
}
