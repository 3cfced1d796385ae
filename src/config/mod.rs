mod app;

pub use app::ApplicationConfig;
pub use app::ApplicationConfigEndpoints;
pub use app::ApplicationConfigHttp;
pub use app::ApplicationConfigLogger;
pub use app::ApplicationConfigOAuth;
