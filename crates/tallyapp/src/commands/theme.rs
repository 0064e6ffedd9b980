use crate::commands::helpers::theme;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::backend::StorageBackend;
use tracing::warn;

/// The stored theme. Absent or unrecognised values fall back to the default.
pub fn current<B: StorageBackend>(backend: &B) -> Result<Theme> {
    let Some(raw) = theme(backend).get()? else {
        return Ok(Theme::default());
    };
    Ok(raw.parse().unwrap_or_else(|err: String| {
        warn!(error = %err, "ignoring stored theme");
        Theme::default()
    }))
}

pub fn get<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    Ok(CmdResult::default().with_theme(current(backend)?))
}

pub fn set<B: StorageBackend>(backend: &B, value: Theme) -> Result<CmdResult> {
    theme(backend).set(value.as_str())?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Theme set to {}", value)));
    Ok(result.with_theme(value))
}

pub fn toggle<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    set(backend, current(backend)?.toggled())
}
