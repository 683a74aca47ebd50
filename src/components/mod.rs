//! UI Components
//!
//! Leptos components for the restaurant board.

mod auth_gate;
mod header;
mod restaurant_form;
mod restaurant_list;
mod restaurant_row;
mod footer;

pub use auth_gate::AuthGate;
pub use header::Header;
pub use restaurant_form::RestaurantForm;
pub use restaurant_list::RestaurantList;
pub use restaurant_row::RestaurantRow;
pub use footer::Footer;
