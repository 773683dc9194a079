mod book;
mod category;
mod cover;
mod row;

pub use self::book::{Book, BookId};
pub use self::category::{Category, CategoryId};
pub use self::cover::Cover;
pub use self::row::{BookRow, CategoryRow};
