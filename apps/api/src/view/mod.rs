// Canonical browser view: one server-rendered page driven by the ViewState machine.
// Normalization turns the API's ScoreReport into the rubric-keyed ScoreCard it renders.

pub mod handlers;
pub mod normalize;
pub mod state;
pub mod templates;
