#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read settings file {path}: {reason}")]
    SettingsRead { path: String, reason: String },

    #[error(transparent)]
    Settings(#[from] labs_core::settings::SettingsError),
}
