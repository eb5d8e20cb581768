mod account;
mod booking;
mod hall;
mod invoice;
mod subscription;

pub use self::account::*;
pub use self::booking::*;
pub use self::hall::*;
pub use self::invoice::*;
pub use self::subscription::*;
