mod booking;
mod comment;
mod common;
mod item;
mod item_request;
mod user;

pub use self::{booking::*, comment::*, common::*, item::*, item_request::*, user::*};
