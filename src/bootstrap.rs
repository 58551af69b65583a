use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::mount::{resolve_mount, MountHost, MountKind, MountTarget};

/// A rendered application and the handle the framework gave back for it.
#[derive(Debug)]
pub struct Mounted<R> {
    pub kind: MountKind,
    pub handle: R,
}

/// Resolves the mount point and hands it to `render`.
///
/// `render` only ever sees a present element. When the mount is missing and
/// the policy is abort, `render` is not called and the error (already logged)
/// is returned.
pub fn bootstrap<H, R>(
    host: &H,
    cfg: &BootstrapConfig,
    render: impl FnOnce(MountTarget<H::Element>) -> Result<R, String>,
) -> Result<Mounted<R>, BootstrapError>
where
    H: MountHost,
{
    cfg.validate()?;

    let target = resolve_mount(host, cfg)?;
    let kind = target.kind();
    let handle = render(target).map_err(BootstrapError::Render)?;

    log::info!("mounted app into #{} ({kind:?})", cfg.mount_id);
    Ok(Mounted { kind, handle })
}
