mod chain;
mod from;
mod lines;
mod range;

pub use chain::{chain, Chain};
pub use from::{from, from2, from3, Iter, Zip2, Zip3};
pub use lines::{read_lines, Lines};
pub use range::{iota, range, range_to, Iota, Span};
