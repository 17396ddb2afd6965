//! Authentication handlers.

mod login;
mod refresh_token;
mod register;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use refresh_token::RefreshTokenHandler;
pub use register::{RegisterCommand, RegisterHandler};
