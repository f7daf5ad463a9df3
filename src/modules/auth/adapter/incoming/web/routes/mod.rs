pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;

pub use login::login_handler;
pub use logout::logout_handler;
pub use me::me_handler;
pub use refresh::refresh_handler;
