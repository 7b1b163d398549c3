use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use basoka::adapter::outbound::json::JsonFileStore;
use basoka::application::registry::ServerRegistry;
use basoka::testkit::control::ScriptedControl;

/// Registry over the JSON file at `path`, with a short call timeout.
pub fn open_file_registry(path: &Path, agent: Arc<ScriptedControl>) -> ServerRegistry {
    let store = Arc::new(JsonFileStore::new(path));
    ServerRegistry::open(store, agent, Duration::from_millis(250)).expect("open registry")
}
