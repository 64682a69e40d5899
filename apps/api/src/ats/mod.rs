// ATS compatibility scoring: keyword presets, heuristic scorer, HTTP handler.

pub mod handlers;
pub mod keywords;
pub mod scorer;
