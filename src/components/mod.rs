//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod navigation;
pub mod profile;
pub mod quit_dialog;
pub mod settings;
pub mod splash;
pub mod text_input;
pub mod upload;
pub mod video_player;

pub use help_dialog::HelpDialog;
pub use home::HomeComponent;
pub use layout::calculate_main_layout;
pub use navigation::{draw_navigation, NavRenderContext, BRAND};
pub use profile::ProfileComponent;
pub use quit_dialog::QuitDialog;
pub use settings::SettingsComponent;
pub use splash::SplashComponent;
pub use upload::UploadComponent;
pub use video_player::{PlayerRenderContext, VideoPlayerComponent};
