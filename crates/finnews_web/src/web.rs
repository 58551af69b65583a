use finnews_bootstrap::prelude::*;
use leptos::prelude::*;

mod app;
mod host;
mod storage;
mod strict_mode;

use app::App;
use host::DomHost;
use strict_mode::Strict;

/// Page-load entry: logging, config, then a single bootstrap attempt.
///
/// Never panics on a missing mount; the outcome is reported to the console.
pub fn start() {
    console_error_panic_hook::set_once();

    let overrides = storage::config_overrides();
    let (cfg, rejected) = BootstrapConfig::from_overrides(overrides.as_deref());

    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(cfg.log_level.to_level());
    if let Some(e) = rejected {
        log::warn!("ignoring {}: {e}", storage::CONFIG_KEY);
    }

    let Some(host) = DomHost::from_window() else {
        log::error!("no window/document; app not mounted");
        return;
    };

    let strict = cfg.strict;
    let res = bootstrap(&host, &cfg, move |target| {
        Ok(mount_to(target.into_element(), move || {
            view! {
                <Strict mode=strict>
                    <App />
                </Strict>
            }
        }))
    });

    match res {
        Ok(mounted) => mounted.handle.forget(),
        Err(e) if e.already_logged() => log::debug!("bootstrap aborted: {e}"),
        Err(e) => log::error!("bootstrap failed: {e}"),
    }
}
