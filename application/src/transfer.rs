mod booking;
mod comment;
mod item;
mod item_request;
mod user;

pub use self::{booking::*, comment::*, item::*, item_request::*, user::*};
