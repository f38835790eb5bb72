//! Global (non-session) preferences. Currently just the theme.

use std::rc::Rc;

use banter_types::theme::Theme;

use crate::keys;
use crate::ports::StoragePort;

/// Read the persisted theme; anything missing or unrecognized is Light.
pub async fn load_theme(storage: &Rc<dyn StoragePort>) -> Theme {
    match storage.get(keys::THEME_KEY).await {
        Ok(Some(bytes)) => Theme::parse(&String::from_utf8_lossy(&bytes)),
        _ => Theme::default(),
    }
}

/// Persist the theme. Best-effort.
pub async fn save_theme(storage: &Rc<dyn StoragePort>, theme: Theme) {
    if let Err(e) = storage.set(keys::THEME_KEY, theme.as_str().as_bytes()).await {
        log::warn!("Failed to persist theme: {}", e);
    }
}
