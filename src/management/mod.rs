mod prefs;
mod session;
mod token;

pub use prefs::Theme;
pub use prefs::ThemeStore;
pub use prefs::ViewMode;
pub use prefs::ViewModeStore;
pub use session::Session;
pub use token::StoreError;
pub use token::TokenStore;
