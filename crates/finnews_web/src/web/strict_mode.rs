use finnews_bootstrap::config::StrictMode;
use finnews_bootstrap::strict::{self, Pass};
use leptos::prelude::*;

/// Development-time wrapper around the app tree.
///
/// When `mode` is active the children are built once under a throwaway owner
/// that is cleaned up right away, then built again for real. Signals, effects
/// and `on_cleanup` hooks created during construction therefore run twice.
/// The mounted output is the same as rendering the children directly.
#[component]
pub(super) fn Strict(mode: StrictMode, children: ChildrenFn) -> impl IntoView {
    let probe_owner = Owner::new();
    let (view, report) = strict::invoke(
        mode,
        |pass| match pass {
            Pass::Probe => probe_owner.with(|| children()),
            Pass::Final => children(),
        },
        |probe| {
            drop(probe);
            probe_owner.cleanup();
        },
    );
    log::debug!("strict mode {mode:?}: {} build(s)", report.builds);
    view
}
