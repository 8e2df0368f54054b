mod create;
mod edit;
mod list;
mod view;

pub use create::HeroCreatePage;
pub use edit::HeroEditPage;
pub use list::{HeroAction, HeroListPage, PageDirection, ResultsRange};
pub use view::HeroViewPage;
