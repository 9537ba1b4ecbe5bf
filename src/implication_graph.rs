use std::collections::HashMap;

/*
A struct identifying one assignment event: the variable, the value it took and
the decision level it was assigned at. Node identity in the implication graph.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssignmentEvent {
    pub variable: i32,
    pub value: bool,
    pub decision_level: i32,
}

/*
An enum naming a node of the implication graph: either an assignment event or
the conflict sentinel. At most one conflict node exists at a time; it is
created when a clause is falsified and deleted as soon as the conflict has
been analysed.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Assignment(AssignmentEvent),
    Conflict,
}

/*
A single graph node with its incident edges, stored as neighbour labels.
*/
#[derive(Clone, Debug, Default)]
struct Node {
    predecessors: Vec<NodeLabel>,
    successors: Vec<NodeLabel>,
}

/*
A struct that represents the implication graph: a directed acyclic graph over
assignment events. An edge cause -> implied records that the cause assignment
helped force the implied one. Nodes are created when a variable is assigned
and deleted when the assignment is undone; deleting a node removes its
incident edges on both sides.
*/
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: HashMap<NodeLabel, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: HashMap::new() }
    }

    pub fn contains(&self, label: &NodeLabel) -> bool {
        return self.nodes.contains_key(label);
    }

    /*
    A function to add a node. Adding a node that already exists is a bug in
    the caller's bookkeeping.
    */
    pub fn add_node(&mut self, label: NodeLabel) {
        let previous = self.nodes.insert(label, Node::default());
        assert!(previous.is_none(), "implication graph node {:?} already exists", label);
    }

    /*
    A function to delete a node together with every edge touching it. Deleting
    an absent node is a no-op, matching the idempotence of undoing an
    assignment twice.
    */
    pub fn delete_node(&mut self, label: &NodeLabel) {
        let node = match self.nodes.remove(label) {
            Some(node) => node,
            None => return,
        };
        for predecessor in &node.predecessors {
            if let Some(other) = self.nodes.get_mut(predecessor) {
                other.successors.retain(|successor| successor != label);
            }
        }
        for successor in &node.successors {
            if let Some(other) = self.nodes.get_mut(successor) {
                other.predecessors.retain(|predecessor| predecessor != label);
            }
        }
    }

    /*
    A function to add the edge from -> to. Both endpoints must exist already;
    duplicate edges collapse into one.
    */
    pub fn connect(&mut self, from: &NodeLabel, to: &NodeLabel) {
        assert!(self.contains(from), "implication graph edge from missing node {:?}", from);
        assert!(self.contains(to), "implication graph edge to missing node {:?}", to);
        let source = self.nodes.get_mut(from).expect("edge source node vanished");
        if !source.successors.contains(to) {
            source.successors.push(*to);
        }
        let target = self.nodes.get_mut(to).expect("edge target node vanished");
        if !target.predecessors.contains(from) {
            target.predecessors.push(*from);
        }
    }

    /*
    The labels of the nodes with an edge into the given node. An implied
    assignment has at least one predecessor, a decision has none.
    */
    pub fn predecessors(&self, label: &NodeLabel) -> Vec<NodeLabel> {
        match self.nodes.get(label) {
            Some(node) => node.predecessors.clone(),
            None => Vec::new(),
        }
    }

    /*
    The labels of the nodes this node has an edge into.
    */
    pub fn successors(&self, label: &NodeLabel) -> Vec<NodeLabel> {
        match self.nodes.get(label) {
            Some(node) => node.successors.clone(),
            None => Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn node_count(&self) -> usize {
        return self.nodes.len();
    }
}
