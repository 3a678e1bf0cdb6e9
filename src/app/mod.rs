pub mod session;
pub mod shell;

pub use session::SiteSession;
