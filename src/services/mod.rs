pub mod admin;
pub mod browse;
pub mod presenter;
pub mod publishing;

pub use admin::{AdminService, ArticleFilter};
pub use browse::{BrowseLimits, BrowseService, Page};
pub use presenter::{ArticleCard, Presenter};
pub use publishing::PublishingService;
