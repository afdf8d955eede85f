mod state;
pub mod view;

pub use state::SuccessState;
