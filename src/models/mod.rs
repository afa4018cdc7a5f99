pub mod index;
pub mod observation;
pub mod sentiment;
