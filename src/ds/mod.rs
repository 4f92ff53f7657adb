pub mod bst;
pub mod graph;
pub mod hash_table;
pub mod linked_list;
pub mod ring_queue;
pub mod stack;

pub use bst::BinarySearchTree;
pub use graph::{Edge, Graph};
pub use hash_table::{HashTable, TableDiagnostics};
pub use linked_list::{LinkedList, NodeId};
pub use ring_queue::RingQueue;
pub use stack::Stack;
