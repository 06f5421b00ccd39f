mod profile;
pub use profile::ProfileView;

mod history;
pub use history::HistoryView;

mod settings;
pub use settings::SettingsView;
