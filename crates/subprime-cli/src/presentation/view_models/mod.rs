pub mod common;
pub mod content;
pub mod page;
pub mod pages;
pub mod result;

pub use common::{ConsoleStyle, Guidance, StatusBadge, StatusLevel};
pub use content::ContentCheckViewModel;
pub use page::{ChromeViewModel, NavItem, NavigationViewModel, PageViewModel, SubNavViewModel};
pub use pages::{OptionListing, PageListViewModel, PageListing};
pub use result::CommandResultViewModel;

use std::fmt;

/// View models that know how to present themselves on the console
pub trait CreateView {
    fn create_view<'a>(&'a self, style: ConsoleStyle) -> Box<dyn fmt::Display + 'a>;
}
