pub mod model;
pub mod state;
pub mod viewmodel;

pub use model::{add, subtract};
pub use state::CalcState;
pub use viewmodel::{Subscriber, ViewModel};
