use crate::{
    error, info,
    management::{Theme, ThemeStore},
    success,
};

pub fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse()
}

/// Shows, sets, or cycles the persisted theme preference.
pub async fn theme(value: Option<Theme>, toggle: bool) {
    let store = ThemeStore::new();

    if toggle {
        match store.toggle().await {
            Ok(next) => success!("Theme set to {}.", next),
            Err(e) => error!("Failed to persist theme: {:?}", e),
        }
        return;
    }

    match value {
        Some(theme) => match store.set(theme).await {
            Ok(()) => success!("Theme set to {}.", theme),
            Err(e) => error!("Failed to persist theme: {:?}", e),
        },
        None => info!("Theme: {}", store.load().await),
    }
}
