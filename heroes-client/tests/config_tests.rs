// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use heroes_client::config::{ENV_BASE_URL, ENV_HEROES_PATH, ENV_TIMEOUT_MS};
use heroes_client::ClientConfig;
use heroes_core::HeroError;
use std::collections::HashMap;
use std::time::Duration;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn default_points_at_the_development_server() -> anyhow::Result<()> {
    let config = ClientConfig::default();

    assert_eq!(config.base_url().as_str(), "http://localhost:4200/");
    assert_eq!(config.heroes_path(), "api/heroes");
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert_eq!(
        config.collection_url()?.as_str(),
        "http://localhost:4200/api/heroes"
    );
    Ok(())
}

#[test]
fn derived_urls_follow_the_collection() -> anyhow::Result<()> {
    let config = ClientConfig::default().with_base_url("http://heroes.test/app/".parse()?);

    assert_eq!(
        config.collection_url()?.as_str(),
        "http://heroes.test/app/api/heroes"
    );
    assert_eq!(
        config.item_url(12)?.as_str(),
        "http://heroes.test/app/api/heroes/12"
    );
    assert_eq!(
        config.search_url("yi heng")?.as_str(),
        "http://heroes.test/app/api/heroes/?name=yi+heng"
    );
    Ok(())
}

#[test]
fn heroes_path_slashes_are_normalized() -> anyhow::Result<()> {
    let config = ClientConfig::default()
        .with_base_url("http://heroes.test".parse()?)
        .with_heroes_path("/v2/heroes/");

    assert_eq!(
        config.collection_url()?.as_str(),
        "http://heroes.test/v2/heroes"
    );
    Ok(())
}

#[test]
fn base_url_that_cannot_carry_a_path_is_a_config_error() -> anyhow::Result<()> {
    let config = ClientConfig::default().with_base_url("mailto:heroes@example.com".parse()?);

    let error = config.collection_url().unwrap_err();

    assert!(matches!(error, HeroError::Config { .. }));
    Ok(())
}

#[test]
fn lookup_overrides_defaults() -> anyhow::Result<()> {
    let config = ClientConfig::from_lookup(lookup(&[
        (ENV_BASE_URL, "http://heroes.test:8080/"),
        (ENV_HEROES_PATH, "api/v1/heroes"),
        (ENV_TIMEOUT_MS, "1500"),
    ]))?;

    assert_eq!(
        config.collection_url()?.as_str(),
        "http://heroes.test:8080/api/v1/heroes"
    );
    assert_eq!(config.timeout(), Duration::from_millis(1500));
    Ok(())
}

#[test]
fn lookup_without_variables_yields_defaults() -> anyhow::Result<()> {
    let config = ClientConfig::from_lookup(|_| None)?;

    assert_eq!(config, ClientConfig::default());
    Ok(())
}

#[test]
fn unparsable_variables_are_config_errors() {
    let bad_url = ClientConfig::from_lookup(lookup(&[(ENV_BASE_URL, "not a url")]));
    let bad_timeout = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_MS, "soon")]));

    assert!(matches!(bad_url, Err(HeroError::Config { .. })));
    assert!(matches!(bad_timeout, Err(HeroError::Config { .. })));
}

#[test]
fn deserializes_with_millisecond_timeout_and_defaults() -> anyhow::Result<()> {
    let config: ClientConfig = serde_json::from_str(
        r#"{ "base_url": "http://heroes.test/", "timeout_ms": 250 }"#,
    )?;

    assert_eq!(config.base_url().as_str(), "http://heroes.test/");
    assert_eq!(config.heroes_path(), "api/heroes");
    assert_eq!(config.timeout(), Duration::from_millis(250));
    Ok(())
}

#[test]
fn deserialize_rejects_unknown_fields() {
    let result = serde_json::from_str::<ClientConfig>(r#"{ "timeout": 250 }"#);

    assert!(result.is_err());
}
