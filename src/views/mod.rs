pub mod auth;
pub mod avatar;
pub mod chat;
pub mod customize;
pub mod dashboard;
pub mod home;
pub mod legal;
pub mod shared;

pub use auth::{SignInView, SignUpView};
pub use avatar::Avatar;
pub use chat::ChatView;
pub use customize::CustomizeView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use legal::{LegalDocument, LegalView};
