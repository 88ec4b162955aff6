//! Page Components

mod dashboard;
mod ingredients;
mod recipes;

pub use dashboard::Dashboard;
pub use ingredients::Ingredients;
pub use recipes::Recipes;
