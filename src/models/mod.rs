pub mod account;
pub mod article;
pub mod category;
pub mod reporter;
pub mod tag;

pub use account::{Account, AccountId};
pub use article::{Article, ArticleId, ArticleStatus};
pub use category::{Category, CategoryId};
pub use reporter::{Reporter, ReporterId};
pub use tag::{Tag, TagId};
