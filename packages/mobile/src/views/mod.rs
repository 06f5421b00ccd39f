mod profile;
pub use profile::Profile;

mod history;
pub use history::History;

mod settings;
pub use settings::Settings;

mod back_link;
use back_link::BackLink;
