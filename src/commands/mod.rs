pub mod list;
pub mod pages;
pub mod show;

pub use list::ListCommand;
pub use pages::PagesCommand;
pub use show::ShowCommand;
