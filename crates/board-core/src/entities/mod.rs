//! Domain entities - core business objects

mod category;
mod part;
mod post;
mod user;

pub use category::Category;
pub use part::Part;
pub use post::{NewPost, Post};
pub use user::User;
