//! Page-level components wired to the runtime.

mod contact_form;
mod hero;
mod navbar;

pub use contact_form::ContactForm;
pub use hero::Hero;
pub use navbar::Navbar;
