//! Registry behaviour over the JSON file store.

mod support;

use std::fs;
use std::sync::Arc;

use basoka::adapter::outbound::json::JsonFileStore;
use basoka::application::registry::ServerRegistry;
use basoka::error::{Error, RegistryError, StoreError};
use basoka::port::RegistryStore;
use basoka::testkit::control::ScriptedControl;
use support::registry::open_file_registry;
use tempfile::TempDir;

#[tokio::test]
async fn add_list_status_delete_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    let agent = Arc::new(ScriptedControl::new());
    let registry = open_file_registry(&path, Arc::clone(&agent));

    registry.add("db1", "10.0.0.5:5432").unwrap();

    let listed: Vec<_> = registry
        .list()
        .into_iter()
        .map(|record| (record.name.to_string(), record.address.to_string()))
        .collect();
    assert_eq!(listed, vec![("db1".to_string(), "10.0.0.5:5432".to_string())]);

    assert!(registry.status("db1").await.unwrap());
    assert_eq!(agent.calls(), vec![("probe", "10.0.0.5:5432".to_string())]);

    registry.delete("db1").unwrap();
    assert!(matches!(
        registry.get("db1"),
        Err(RegistryError::NotFound(ref name)) if name == "db1"
    ));
}

#[test]
fn records_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");

    {
        let registry = open_file_registry(&path, Arc::new(ScriptedControl::new()));
        registry.add("web", "10.0.0.7:8080").unwrap();
        registry.add("db1", "10.0.0.5:5432").unwrap();
        registry.delete("web").unwrap();
    }

    let reopened = open_file_registry(&path, Arc::new(ScriptedControl::new()));

    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get("db1").unwrap().address.as_str(), "10.0.0.5:5432");
    assert!(reopened.get("web").is_err());
}

#[test]
fn add_is_durable_before_returning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    let registry = open_file_registry(&path, Arc::new(ScriptedControl::new()));

    registry.add("db1", "10.0.0.5:5432").unwrap();

    let stored = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn missing_registry_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("servers.json");

    let registry = open_file_registry(&path, Arc::new(ScriptedControl::new()));

    assert!(registry.is_empty());
    assert!(path.exists());
}

#[test]
fn legacy_entries_are_rewritten_in_flat_form() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    fs::write(
        &path,
        r#"{"db1": {"address": "10.0.0.5:5432", "running": true}}"#,
    )
    .unwrap();

    let registry = open_file_registry(&path, Arc::new(ScriptedControl::new()));
    registry.add("web", "10.0.0.7:8080").unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({"db1": "10.0.0.5:5432", "web": "10.0.0.7:8080"})
    );
}

#[test]
fn corrupt_registry_file_refuses_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    fs::write(&path, "{ not json").unwrap();

    let result = ServerRegistry::open(
        Arc::new(JsonFileStore::new(&path)),
        Arc::new(ScriptedControl::new()),
        std::time::Duration::from_secs(1),
    );

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn lifecycle_on_missing_server_is_not_found() {
    let dir = TempDir::new().unwrap();
    let registry = open_file_registry(
        &dir.path().join("servers.json"),
        Arc::new(ScriptedControl::new()),
    );

    for result in [
        registry.start("ghost").await,
        registry.stop("ghost").await,
    ] {
        assert!(matches!(
            result,
            Err(Error::Registry(RegistryError::NotFound(_)))
        ));
    }
    assert!(matches!(
        registry.is_running("ghost").await,
        Err(Error::Registry(RegistryError::NotFound(_)))
    ));
}
