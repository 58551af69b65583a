//! Mount point resolution.

use crate::config::{BootstrapConfig, MissingMountPolicy};
use crate::error::BootstrapError;

/// The document as seen by the bootstrap.
pub trait MountHost {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Creates `<div id={id}>`, attaches it to the document and returns it.
    fn create_fallback(&self, id: &str) -> Result<Self::Element, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountKind {
    Existing,
    Fallback,
}

/// A mount element that is known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountTarget<E> {
    Existing(E),
    Fallback(E),
}

impl<E> MountTarget<E> {
    pub fn kind(&self) -> MountKind {
        match self {
            MountTarget::Existing(_) => MountKind::Existing,
            MountTarget::Fallback(_) => MountKind::Fallback,
        }
    }

    pub fn element(&self) -> &E {
        match self {
            MountTarget::Existing(e) | MountTarget::Fallback(e) => e,
        }
    }

    pub fn into_element(self) -> E {
        match self {
            MountTarget::Existing(e) | MountTarget::Fallback(e) => e,
        }
    }
}

/// Looks the mount element up once and applies the missing-mount policy.
///
/// An absent element is reported with exactly one error-level record.
pub fn resolve_mount<H: MountHost>(
    host: &H,
    cfg: &BootstrapConfig,
) -> Result<MountTarget<H::Element>, BootstrapError> {
    let id = cfg.mount_id.as_str();
    if let Some(el) = host.element_by_id(id) {
        log::debug!("mount #{id} found");
        return Ok(MountTarget::Existing(el));
    }

    log::error!("Root element #{id} not found");

    match cfg.on_missing {
        MissingMountPolicy::Abort => Err(BootstrapError::MountMissing { id: id.to_string() }),
        MissingMountPolicy::Fallback => {
            let el = host
                .create_fallback(id)
                .map_err(|reason| BootstrapError::FallbackFailed {
                    id: id.to_string(),
                    reason,
                })?;
            log::warn!("mounting into fallback container #{id}");
            Ok(MountTarget::Fallback(el))
        }
    }
}
