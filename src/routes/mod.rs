mod health_check;
mod home;
mod waitlist;

pub use health_check::*;
pub use home::*;
pub use waitlist::*;
