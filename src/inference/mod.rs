pub mod rules;

pub use rules::{explain, infer, infer_at, Inference, MoodRule};
