mod case;
mod gender;

pub use case::{Case, IntoCase};
pub use gender::Gender;
