use crate::commands::helpers::{choices, preset};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::picker::{find_preset, presets};
use crate::store::backend::StorageBackend;

/// All built-in presets, plus a note about the one currently loaded.
pub fn list<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(current) = preset(backend).get()? {
        result.add_message(CmdMessage::info(format!("Current preset: {}", current)));
    }
    Ok(result.with_presets(presets()))
}

/// Overwrite the saved choices with a preset and remember its name.
pub fn use_preset<B: StorageBackend>(backend: &B, name: &str) -> Result<CmdResult> {
    let chosen = find_preset(name)
        .ok_or_else(|| TallyError::InvalidInput(format!("Unknown preset: {}", name.trim())))?;

    choices(backend).save(&chosen.choices)?;
    preset(backend).set(chosen.name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Loaded preset: {}", chosen.name)));
    Ok(result.with_choices(chosen.choices.clone()).with_presets(vec![chosen]))
}
