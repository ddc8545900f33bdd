mod node_arena;
pub(crate) use node_arena::{NIL, Node, NodeArena};
