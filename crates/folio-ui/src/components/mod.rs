//! Reusable UI components for the portfolio page

mod button;
mod card;
mod input;
mod section;

pub use button::*;
pub use card::*;
pub use input::*;
pub use section::*;
