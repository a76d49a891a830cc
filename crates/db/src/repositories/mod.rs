pub mod theme_repo;

pub use theme_repo::ThemeRepo;
