mod bools;
mod copy_to;
mod fold;
mod for_each;
mod fork;
mod into;
mod partition;

pub use bools::{all_of, any_of, none_of, AllOf, AnyOf, NoneOf};
pub use copy_to::{copy_to, CopyTo, Slots};
pub use fold::{
    accumulate, count, discard, sum, to_reducer, Accumulate, Count, Discard, Sum,
};
pub use for_each::{for_each, for_each_indexed, ForEach, ForEachIndexed};
pub use fork::{fork, Branches, ForkStep};
pub use into::{into, push_back, Push, PushBack};
pub use partition::{partition, PartitionStep};
