//! Week 1 Tutorials
//!
//! One self-contained demo per topic.

mod jsx_example;
mod components_and_props;
mod state_and_lifecycle;
mod event_handling;
mod rendering_logic;

pub use jsx_example::JsxExample;
pub use components_and_props::ComponentsAndProps;
pub use state_and_lifecycle::StateAndLifecycle;
pub use event_handling::EventHandling;
pub use rendering_logic::RenderingLogic;
