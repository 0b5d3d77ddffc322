pub mod alert;
pub mod contact;
pub mod user;

pub use alert::*;
pub use contact::*;
pub use user::*;
