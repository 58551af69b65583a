pub(super) const CONFIG_KEY: &str = "finnews.bootstrap.v1";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw JSON overrides for `BootstrapConfig`, if any were saved.
pub(super) fn config_overrides() -> Option<String> {
    local_storage().and_then(|s| s.get_item(CONFIG_KEY).ok().flatten())
}
