//! Kind-indexed dispatch of traversal events.
//!
//! A [`Dispatcher`] collects handlers, [`Dispatcher::build`] resolves them
//! against the schema once, and the resulting [`DispatchTable`] answers
//! every event with a slice index.
//!
//! Handlers registered on an abstract kind act as the default behavior of
//! every kind below it. When an event asks for ancestor behavior, the nearest
//! such handler runs together with the kind's own:
//!
//! ```text
//! enter:  own.enter      → ancestor.enter
//! leave:  ancestor.leave → own.leave
//! ```

use std::sync::Arc;

use super::{EdgeEvent, NodeEvent, Visitor};
use crate::error::AsgError;
use crate::graph::Graph;
use crate::schema::{EdgeKind, NodeKind, Schema};

pub type NodeHandler<S> = fn(&mut S, &NodeEvent<'_>) -> Result<(), AsgError>;
pub type EdgeHandler<S> = fn(&mut S, &EdgeEvent<'_>) -> Result<(), AsgError>;
pub type SessionHandler<S> = fn(&mut S, &Graph) -> Result<(), AsgError>;

/// Enter and leave handlers registered together.
#[derive(Clone, Copy)]
pub struct HandlerPair<H> {
    pub enter: H,
    pub leave: H,
}

/// Builder of a [`DispatchTable`].
pub struct Dispatcher<S> {
    kinds: Vec<Option<HandlerPair<NodeHandler<S>>>>,
    containment: Option<HandlerPair<EdgeHandler<S>>>,
    reference: Option<HandlerPair<EdgeHandler<S>>>,
    begin: Option<SessionHandler<S>>,
    finish: Option<SessionHandler<S>>,
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Dispatcher<S> {
    pub fn new() -> Self {
        Self {
            kinds: vec![None; NodeKind::COUNT],
            containment: None,
            reference: None,
            begin: None,
            finish: None,
        }
    }

    /// Register the handler pair of one kind, replacing any earlier one.
    pub fn on_kind(mut self, kind: NodeKind, enter: NodeHandler<S>, leave: NodeHandler<S>) -> Self {
        self.kinds[kind.index()] = Some(HandlerPair { enter, leave });
        self
    }

    /// Register the same handler pair for several kinds.
    pub fn on_kinds(
        mut self,
        kinds: impl IntoIterator<Item = NodeKind>,
        enter: NodeHandler<S>,
        leave: NodeHandler<S>,
    ) -> Self {
        for kind in kinds {
            self.kinds[kind.index()] = Some(HandlerPair { enter, leave });
        }
        self
    }

    /// Register the handlers for every slot of one edge kind.
    pub fn on_edge(mut self, kind: EdgeKind, enter: EdgeHandler<S>, leave: EdgeHandler<S>) -> Self {
        let pair = Some(HandlerPair { enter, leave });
        match kind {
            EdgeKind::Containment => self.containment = pair,
            EdgeKind::Reference => self.reference = pair,
        }
        self
    }

    pub fn on_begin(mut self, handler: SessionHandler<S>) -> Self {
        self.begin = Some(handler);
        self
    }

    pub fn on_finish(mut self, handler: SessionHandler<S>) -> Self {
        self.finish = Some(handler);
        self
    }

    /// Resolve ancestor defaults against `schema`.
    pub fn build(self, schema: &Schema) -> DispatchTable<S> {
        let ancestor = schema
            .kinds()
            .map(|kind| {
                schema
                    .ancestors(kind)
                    .iter()
                    .rev()
                    .find_map(|&a| self.kinds[a.index()].map(|pair| (a, pair)))
            })
            .collect();

        tracing::trace!(
            registered = self.kinds.iter().filter(|k| k.is_some()).count(),
            "built dispatch table"
        );

        DispatchTable {
            kinds: self.kinds.into_boxed_slice(),
            ancestor,
            containment: self.containment,
            reference: self.reference,
            begin: self.begin,
            finish: self.finish,
        }
    }
}

/// Resolved handler table; every lookup is a slice index.
pub struct DispatchTable<S> {
    kinds: Box<[Option<HandlerPair<NodeHandler<S>>>]>,
    ancestor: Box<[Option<(NodeKind, HandlerPair<NodeHandler<S>>)>]>,
    containment: Option<HandlerPair<EdgeHandler<S>>>,
    reference: Option<HandlerPair<EdgeHandler<S>>>,
    begin: Option<SessionHandler<S>>,
    finish: Option<SessionHandler<S>>,
}

impl<S> DispatchTable<S> {
    pub fn is_registered(&self, kind: NodeKind) -> bool {
        self.handlers(kind).is_some()
    }

    /// Nearest ancestor of `kind` with a registered default behavior.
    pub fn ancestor_behavior(&self, kind: NodeKind) -> Option<NodeKind> {
        self.ancestor.get(kind.index()).copied().flatten().map(|(a, _)| a)
    }

    fn handlers(&self, kind: NodeKind) -> Option<HandlerPair<NodeHandler<S>>> {
        self.kinds.get(kind.index()).copied().flatten()
    }

    fn ancestor_handlers(&self, kind: NodeKind) -> Option<HandlerPair<NodeHandler<S>>> {
        self.ancestor.get(kind.index()).copied().flatten().map(|(_, pair)| pair)
    }

    fn edge_handlers(&self, kind: EdgeKind) -> Option<HandlerPair<EdgeHandler<S>>> {
        match kind {
            EdgeKind::Containment => self.containment,
            EdgeKind::Reference => self.reference,
        }
    }

    pub fn enter(&self, state: &mut S, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        let kind = event.kind();
        let own = self
            .handlers(kind)
            .ok_or(AsgError::UnregisteredKind { kind })?;
        (own.enter)(state, event)?;
        if call_ancestor {
            if let Some(default) = self.ancestor_handlers(kind) {
                (default.enter)(state, event)?;
            }
        }
        Ok(())
    }

    pub fn leave(&self, state: &mut S, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        let kind = event.kind();
        let own = self
            .handlers(kind)
            .ok_or(AsgError::UnregisteredKind { kind })?;
        if call_ancestor {
            if let Some(default) = self.ancestor_handlers(kind) {
                (default.leave)(state, event)?;
            }
        }
        (own.leave)(state, event)
    }

    /// Unregistered edge kinds are ignored.
    pub fn enter_edge(&self, state: &mut S, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        match self.edge_handlers(event.slot.kind) {
            Some(pair) => (pair.enter)(state, event),
            None => Ok(()),
        }
    }

    pub fn leave_edge(&self, state: &mut S, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        match self.edge_handlers(event.slot.kind) {
            Some(pair) => (pair.leave)(state, event),
            None => Ok(()),
        }
    }

    pub fn begin(&self, state: &mut S, graph: &Graph) -> Result<(), AsgError> {
        self.begin.map_or(Ok(()), |handler| handler(state, graph))
    }

    pub fn finish(&self, state: &mut S, graph: &Graph) -> Result<(), AsgError> {
        self.finish.map_or(Ok(()), |handler| handler(state, graph))
    }
}

/// A [`Visitor`] made of a shared dispatch table and per-run state.
pub struct Dispatched<S> {
    state: S,
    table: Arc<DispatchTable<S>>,
}

impl<S> Dispatched<S> {
    pub fn new(state: S, table: Arc<DispatchTable<S>>) -> Self {
        Self { state, table }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn table(&self) -> &Arc<DispatchTable<S>> {
        &self.table
    }
}

impl<S> Visitor for Dispatched<S> {
    fn begin_visit(&mut self, graph: &Graph) -> Result<(), AsgError> {
        self.table.begin(&mut self.state, graph)
    }

    fn finish_visit(&mut self, graph: &Graph) -> Result<(), AsgError> {
        self.table.finish(&mut self.state, graph)
    }

    fn visit(&mut self, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        self.table.enter(&mut self.state, event, call_ancestor)
    }

    fn visit_end(&mut self, event: &NodeEvent<'_>, call_ancestor: bool) -> Result<(), AsgError> {
        self.table.leave(&mut self.state, event, call_ancestor)
    }

    fn visit_edge(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        self.table.enter_edge(&mut self.state, event)
    }

    fn visit_edge_end(&mut self, event: &EdgeEvent<'_>) -> Result<(), AsgError> {
        self.table.leave_edge(&mut self.state, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::NodeId;
    use crate::graph::Node;

    #[derive(Default)]
    struct Log(Vec<String>);

    fn own_enter(log: &mut Log, ev: &NodeEvent<'_>) -> Result<(), AsgError> {
        log.0.push(format!("enter {}", ev.kind()));
        Ok(())
    }

    fn own_leave(log: &mut Log, ev: &NodeEvent<'_>) -> Result<(), AsgError> {
        log.0.push(format!("leave {}", ev.kind()));
        Ok(())
    }

    fn default_enter(log: &mut Log, _ev: &NodeEvent<'_>) -> Result<(), AsgError> {
        log.0.push("default enter".into());
        Ok(())
    }

    fn default_leave(log: &mut Log, _ev: &NodeEvent<'_>) -> Result<(), AsgError> {
        log.0.push("default leave".into());
        Ok(())
    }

    fn block_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Node::new(1, NodeKind::BlockSyntax)).unwrap();
        graph
    }

    #[test]
    fn test_ancestor_behavior_nests_around_own() {
        let schema = Schema::csharp();
        let table = Dispatcher::<Log>::new()
            .on_kinds(schema.concrete_kinds(), own_enter, own_leave)
            .on_kind(NodeKind::Positioned, default_enter, default_leave)
            .build(schema);
        assert_eq!(table.ancestor_behavior(NodeKind::BlockSyntax), Some(NodeKind::Positioned));

        let graph = block_graph();
        let ev = NodeEvent {
            graph: &graph,
            node: graph.get_node(NodeId(1)).unwrap(),
            depth: 0,
        };
        let mut log = Log::default();
        table.enter(&mut log, &ev, true).unwrap();
        table.leave(&mut log, &ev, true).unwrap();
        assert_eq!(
            log.0,
            [
                "enter BlockSyntax",
                "default enter",
                "default leave",
                "leave BlockSyntax"
            ]
        );

        let mut log = Log::default();
        table.enter(&mut log, &ev, false).unwrap();
        table.leave(&mut log, &ev, false).unwrap();
        assert_eq!(log.0, ["enter BlockSyntax", "leave BlockSyntax"]);
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let schema = Schema::csharp();
        let table = Dispatcher::<Log>::new()
            .on_kind(NodeKind::Base, default_enter, default_leave)
            .on_kind(NodeKind::StatementSyntax, own_enter, own_leave)
            .build(schema);
        assert_eq!(
            table.ancestor_behavior(NodeKind::BlockSyntax),
            Some(NodeKind::StatementSyntax)
        );
        assert_eq!(
            table.ancestor_behavior(NodeKind::LiteralExpressionSyntax),
            Some(NodeKind::Base)
        );
        assert_eq!(table.ancestor_behavior(NodeKind::Base), None);
    }

    #[test]
    fn test_unregistered_kind_is_an_error() {
        let schema = Schema::csharp();
        let table = Dispatcher::<Log>::new()
            .on_kind(NodeKind::IfStatementSyntax, own_enter, own_leave)
            .build(schema);
        assert!(!table.is_registered(NodeKind::BlockSyntax));

        let graph = block_graph();
        let ev = NodeEvent {
            graph: &graph,
            node: graph.get_node(NodeId(1)).unwrap(),
            depth: 0,
        };
        let mut log = Log::default();
        let err = table.enter(&mut log, &ev, true).unwrap_err();
        assert!(matches!(
            err,
            AsgError::UnregisteredKind {
                kind: NodeKind::BlockSyntax
            }
        ));
        assert!(log.0.is_empty());
    }

    #[test]
    fn test_dispatched_routes_edges_by_kind() {
        fn on_ref(log: &mut Log, ev: &EdgeEvent<'_>) -> Result<(), AsgError> {
            log.0.push(format!("ref {}", ev.slot.name));
            Ok(())
        }

        let schema = Schema::csharp();
        let table = Dispatcher::<Log>::new()
            .on_edge(EdgeKind::Reference, on_ref, on_ref)
            .build(schema);
        let mut visitor = Dispatched::new(Log::default(), Arc::new(table));

        let mut graph = Graph::new();
        graph.add_node(Node::new(1, NodeKind::InvocationExpressionSyntax)).unwrap();
        graph.add_node(Node::new(2, NodeKind::MethodDeclarationSyntax)).unwrap();
        graph.add_node(Node::new(3, NodeKind::IdentifierNameSyntax)).unwrap();
        let source = graph.get_node(NodeId(1)).unwrap();

        let call = schema.slot(NodeKind::InvocationExpressionSyntax, "MethodCall").unwrap();
        let expr = schema.slot(NodeKind::InvocationExpressionSyntax, "Expression").unwrap();
        for (slot, target) in [(call, NodeId(2)), (expr, NodeId(3))] {
            let ev = EdgeEvent {
                graph: &graph,
                source,
                slot,
                target,
                depth: 1,
            };
            visitor.visit_edge(&ev).unwrap();
            visitor.visit_edge_end(&ev).unwrap();
        }
        assert_eq!(visitor.into_state().0, ["ref MethodCall", "ref MethodCall"]);
    }
}
