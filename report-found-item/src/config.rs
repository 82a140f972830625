//! Build-time and page-level configuration.
//!
//! Values are baked in at compile time through environment variables:
//!
//! | Variable          | Meaning                                        |
//! |-------------------|------------------------------------------------|
//! | `LF_API_BASE_URL` | Room service base URL; unset runs offline      |
//! | `LF_API_KEY`      | Bearer token for the room service              |
//! | `LF_OWNER_ID`     | Property or changeover id rooms belong to      |
//! | `LF_OWNER_KIND`   | `property` or `changeover`; unset infers it    |
//!
//! The embedding page can override the owner with `?property=<id>`,
//! `?changeover=<id>` or `?owner=<id>` (kind inferred).

use anyhow::{bail, ensure};
use lf_rooms::http::ServiceConfig;
use lf_rooms::OwnerId;

/// Owner used when nothing else is configured.
const DEFAULT_OWNER_ID: &str = "demo-changeover";

/// Rooms seeded into the offline service.
pub const DEMO_ROOMS: &[&str] = &["Kitchen", "Living Room", "Master Bedroom", "Bathroom", "Garage"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub owner: OwnerId,
    /// Remote room service; `None` runs against in-memory demo rooms.
    pub service: Option<ServiceConfig>,
}

impl AppConfig {
    pub fn from_build_env() -> anyhow::Result<Self> {
        Self::from_values(
            option_env!("LF_OWNER_ID"),
            option_env!("LF_OWNER_KIND"),
            option_env!("LF_API_BASE_URL"),
            option_env!("LF_API_KEY"),
        )
    }

    pub fn from_values(
        owner_id: Option<&str>,
        owner_kind: Option<&str>,
        base_url: Option<&str>,
        api_key: Option<&str>,
    ) -> anyhow::Result<Self> {
        let owner = parse_owner(owner_id.unwrap_or(DEFAULT_OWNER_ID), owner_kind)?;
        let service = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| {
                let config = ServiceConfig::new(url);
                match api_key.map(str::trim) {
                    Some(key) if !key.is_empty() => config.with_api_key(key),
                    _ => config,
                }
            });
        Ok(Self { owner, service })
    }

    /// Replace the owner when the page supplied one.
    pub fn with_owner(mut self, owner: Option<OwnerId>) -> Self {
        if let Some(owner) = owner {
            self.owner = owner;
        }
        self
    }
}

/// Build an owner from an id and an optional explicit kind.
pub fn parse_owner(id: &str, kind: Option<&str>) -> anyhow::Result<OwnerId> {
    let id = id.trim();
    ensure!(!id.is_empty(), "owner id must not be empty");
    let kind = kind.map(|k| k.trim().to_ascii_lowercase());
    match kind.as_deref() {
        None | Some("") => Ok(id.parse()?),
        Some("property") => Ok(OwnerId::property(id)),
        Some("changeover") => Ok(OwnerId::changeover(id)),
        Some(other) => bail!("unknown owner kind {other:?}, expected \"property\" or \"changeover\""),
    }
}

/// Owner from page query parameters, looked up through `get`.
pub fn owner_from_params(get: impl Fn(&str) -> Option<String>) -> Option<OwnerId> {
    let value = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    if let Some(id) = value("property") {
        return Some(OwnerId::property(id));
    }
    if let Some(id) = value("changeover") {
        return Some(OwnerId::changeover(id));
    }
    value("owner").map(|id| OwnerId::infer(&id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_run_offline() {
        let config = AppConfig::from_values(None, None, None, None).unwrap();
        assert_eq!(config.owner, OwnerId::changeover(DEFAULT_OWNER_ID));
        assert!(config.service.is_none());
    }

    #[test]
    fn test_blank_base_url_is_offline() {
        let config = AppConfig::from_values(Some("12"), None, Some("  "), Some("key")).unwrap();
        assert!(config.service.is_none());
        assert_eq!(config.owner, OwnerId::property("12"));
    }

    #[test]
    fn test_service_config_with_key() {
        let config =
            AppConfig::from_values(Some("12"), None, Some("https://api.test/v1"), Some(" tok "))
                .unwrap();
        let service = config.service.unwrap();
        assert_eq!(service.base_url, "https://api.test/v1");
        assert_eq!(service.api_key.as_deref(), Some("tok"));
    }

    #[test]
    fn test_explicit_kind_wins_over_separator() {
        let owner = parse_owner("12-34", Some("Property")).unwrap();
        assert_eq!(owner, OwnerId::property("12-34"));
        let owner = parse_owner("1234", Some("changeover")).unwrap();
        assert_eq!(owner, OwnerId::changeover("1234"));
    }

    #[test]
    fn test_bad_owner_values_are_errors() {
        assert!(parse_owner("  ", None).is_err());
        let err = parse_owner("12", Some("house")).unwrap_err();
        assert!(err.to_string().contains("house"));
    }

    #[test]
    fn test_owner_from_params() {
        let query = params(&[("property", " 77 ")]);
        assert_eq!(
            owner_from_params(|key| query.get(key).cloned()),
            Some(OwnerId::property("77"))
        );

        let query = params(&[("changeover", "ab-cd")]);
        assert_eq!(
            owner_from_params(|key| query.get(key).cloned()),
            Some(OwnerId::changeover("ab-cd"))
        );

        let query = params(&[("owner", "ab-cd")]);
        assert_eq!(
            owner_from_params(|key| query.get(key).cloned()),
            Some(OwnerId::changeover("ab-cd"))
        );

        let query = params(&[("property", ""), ("other", "1")]);
        assert_eq!(owner_from_params(|key| query.get(key).cloned()), None);
    }

    #[test]
    fn test_with_owner_only_overrides_when_present() {
        let config = AppConfig::from_values(Some("5"), None, None, None).unwrap();
        let same = config.clone().with_owner(None);
        assert_eq!(same, config);
        let moved = config.with_owner(Some(OwnerId::changeover("x-y")));
        assert_eq!(moved.owner, OwnerId::changeover("x-y"));
    }
}
