mod account_repository;
mod article_repository;
mod category_repository;
mod reporter_repository;
mod tag_repository;

pub use account_repository::AccountRepository;
pub use article_repository::{ArticleRepository, ArticleScope};
pub use category_repository::CategoryRepository;
pub use reporter_repository::ReporterRepository;
pub use tag_repository::TagRepository;
