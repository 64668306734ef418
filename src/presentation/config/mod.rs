mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AppSettings, ImageSearchSettings, IntakeSettings, LoggingSettings, RateLimitSettings,
    RenderingSettings, ServerSettings, Settings, StorageProvider, StorageSettings,
    SummarizerProvider, SummarizerSettings,
};
