//! Strict-mode double invocation.
//!
//! When strict mode is active the tree builder runs twice. The first result
//! ([`Pass::Probe`]) is handed to `discard` (the web shell builds it under a
//! throwaway reactive owner and disposes that owner), the second
//! ([`Pass::Final`]) is what gets mounted. Output is unchanged.

use crate::config::StrictMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Probe,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictReport {
    pub active: bool,
    pub builds: u32,
}

pub fn invoke<T>(
    mode: StrictMode,
    mut build: impl FnMut(Pass) -> T,
    discard: impl FnOnce(T),
) -> (T, StrictReport) {
    let active = mode.is_active();
    let mut builds = 0;
    if active {
        let probe = build(Pass::Probe);
        builds += 1;
        discard(probe);
        log::debug!("strict mode: discarded probe build");
    }
    let out = build(Pass::Final);
    builds += 1;
    (out, StrictReport { active, builds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn render_hello(_: Pass) -> String {
        "<span>hello</span>".to_string()
    }

    #[test]
    fn wrapper_is_transparent() {
        let direct = render_hello(Pass::Final);
        for mode in [StrictMode::Off, StrictMode::Development, StrictMode::Always] {
            let (out, _) = invoke(mode, render_hello, drop);
            assert_eq!(out, direct);
        }
    }

    #[test]
    fn active_mode_builds_twice_and_discards_first() {
        let calls = Cell::new(0u32);
        let discarded = Cell::new(None);
        let (out, report) = invoke(
            StrictMode::Always,
            |pass| {
                calls.set(calls.get() + 1);
                (pass, calls.get())
            },
            |first| discarded.set(Some(first)),
        );
        assert_eq!(report, StrictReport { active: true, builds: 2 });
        assert_eq!(discarded.get(), Some((Pass::Probe, 1)));
        assert_eq!(out, (Pass::Final, 2));
    }

    #[test]
    fn off_builds_once() {
        let calls = Cell::new(0u32);
        let (_, report) = invoke(
            StrictMode::Off,
            |pass| {
                assert_eq!(pass, Pass::Final);
                calls.set(calls.get() + 1)
            },
            |_| panic!("nothing to discard"),
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(report.builds, 1);
        assert!(!report.active);
    }
}
