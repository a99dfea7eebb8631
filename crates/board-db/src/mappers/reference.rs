//! Reference entity mappers

use board_core::entities::{Category, Part, User};
use board_core::value_objects::{CategoryId, PartId, UserId};

use crate::models::{CategoryModel, PartModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            nickname: model.nickname,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category::new(CategoryId::new(model.id), model.name)
    }
}

impl From<PartModel> for Part {
    fn from(model: PartModel) -> Self {
        Part::new(PartId::new(model.id), model.name)
    }
}
