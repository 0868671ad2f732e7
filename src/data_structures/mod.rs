pub mod path_stack;
pub mod priority_queue;

pub use path_stack::PathStack;
pub use priority_queue::MinHeap;
