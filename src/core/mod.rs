mod driver;
mod flow;
mod generator;
mod output;
mod reducer;
mod step;
mod transducer;

pub use driver::{reduce, reduce2, reduce3};
pub use flow::Flow;
pub use generator::{generator, FnGenerator, Generator, Sink};
pub use output::{out, Output};
pub use reducer::Reducer;
pub use step::{step_fn, Step, StepFn};
pub use transducer::{identity, Compose, Identity, Transducer, Wrap};
