mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::SignupIntent;
pub use reducer::SignupReducer;
pub use state::{FormFocus, SignupFormState, PLACEHOLDER};
