//! UI Components
//!
//! Reusable Leptos components for the pantry pages.

pub mod ingredient_card;
pub mod ingredient_form;
pub mod loading;
pub mod nav;
pub mod recipe_card;
pub mod recipe_modal;

pub use ingredient_card::IngredientCard;
pub use ingredient_form::IngredientForm;
pub use loading::Loading;
pub use nav::Nav;
pub use recipe_card::{IngredientTags, RecipeCard};
pub use recipe_modal::RecipeModal;
