//! Portion graph construction from the object model.
//!
//! Building is a fixed pass sequence against an immutable model snapshot:
//! member nodes first, so every in-class symbol has a stable id, then the
//! three edge-inference passes. A model the analyzer could not fully
//! resolve yields an incomplete but valid graph, never an error.

use crate::edge::ConnectionKind;
use crate::graph::PortionGraph;
use crate::node::NodeKind;
use classmap_model::{Classifier, ModelData, ModelType};
use tracing::{debug, warn};

impl PortionGraph {
    /// Rebuilds the graph for one class.
    ///
    /// Discards all prior nodes and connections, then repopulates from the
    /// model: attributes and operations in declaration order, followed by
    /// base-member reference, attribute-usage, and intra-class call edges.
    /// A name that is unknown to the model, or that names a non-class
    /// type, leaves the graph empty; that is a successful no-op.
    pub fn clear_and_add_class(&mut self, model: &ModelData, class_name: &str) {
        self.clear();

        let Some(cls) = model.find_type(class_name).and_then(ModelType::as_class) else {
            debug!(class = class_name, "not a known class, graph left empty");
            return;
        };

        self.add_class_members(cls);
        self.add_external_refs(model, cls);
        self.add_attribute_connections(cls);
        self.add_call_connections(model, cls);

        debug!(
            class = class_name,
            nodes = self.node_count(),
            connections = self.connection_count(),
            "portion graph built"
        );
    }

    /// Seeds nodes for the class's own members, fixing their ids before
    /// any edge inference runs.
    fn add_class_members(&mut self, cls: &Classifier) {
        for attr in cls.attributes() {
            self.get_or_create(attr.name(), NodeKind::Attribute);
        }
        for oper in cls.operations() {
            self.get_or_create(oper.name(), NodeKind::Operation);
        }
    }

    /// Materializes calls into base classes as external-reference nodes,
    /// each supplying the operation that makes the call.
    fn add_external_refs(&mut self, model: &ModelData, cls: &Classifier) {
        for oper in cls.operations() {
            for stmt in oper.statements() {
                if !stmt.has_base_class_member_ref() {
                    continue;
                }
                let Some(call) = stmt.as_call() else {
                    continue;
                };
                // A same-named local operation shadows the base member; the
                // call pass covers it instead.
                // TODO: an overridden base method sharing its name with an
                // unrelated local operation is indistinguishable here and
                // never gets an external node.
                if self.find(call.name(), NodeKind::Operation).is_some() {
                    continue;
                }
                let Some(external) = model.resolve_class(call.target()) else {
                    continue;
                };
                if external.name().is_empty() {
                    continue;
                }
                let supplier = self.get_or_create(external.name(), NodeKind::ExternalRef);
                let Some(consumer) = self.find(oper.name(), NodeKind::Operation) else {
                    continue;
                };
                self.connect(supplier, consumer, ConnectionKind::BaseMemberRef);
            }
        }
    }

    /// Connects each attribute to every operation whose statements use it.
    fn add_attribute_connections(&mut self, cls: &Classifier) {
        for attr in cls.attributes() {
            let Some(supplier) = self.find(attr.name(), NodeKind::Attribute) else {
                continue;
            };
            for oper in cls.operations() {
                if !oper.statements().attr_used(attr.name()) {
                    continue;
                }
                let Some(consumer) = self.find(oper.name(), NodeKind::Operation) else {
                    continue;
                };
                self.connect(supplier, consumer, ConnectionKind::AttributeUse);
            }
        }
    }

    /// Connects operations calling other operations of the same class,
    /// callee supplying caller.
    fn add_call_connections(&mut self, model: &ModelData, cls: &Classifier) {
        for oper in cls.operations() {
            let Some(consumer) = self.find(oper.name(), NodeKind::Operation) else {
                continue;
            };
            for stmt in oper.statements() {
                let Some(call) = stmt.as_call() else {
                    continue;
                };
                // Calls leaving the class belong to the external-reference
                // pass.
                match model.resolve_class(call.target()) {
                    Some(target) if target.name() == cls.name() => {}
                    _ => continue,
                }
                // Best effort: first operation matching the name, parameter
                // signatures ignored.
                match cls.operation_by_name(call.name()) {
                    Some(callee) => {
                        let Some(supplier) = self.find(callee.name(), NodeKind::Operation) else {
                            continue;
                        };
                        self.connect(supplier, consumer, ConnectionKind::Call);
                    }
                    None => {
                        // Operator overloads and other unmodeled callables
                        // land here; the edge is dropped and the build goes
                        // on.
                        warn!(
                            class = cls.name(),
                            caller = oper.name(),
                            callee = call.name(),
                            "call targets this class but matches no operation"
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::edge::ConnectionKind;
    use crate::graph::PortionGraph;
    use crate::node::NodeKind;
    use classmap_model::{Classifier, DataType, ModelData, ModelType, Operation, Statement};

    fn engine_model() -> ModelData {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(
                Classifier::new("Engine")
                    .with_attribute("rpm")
                    .with_attribute("temp")
                    .with_operation(
                        Operation::new("start")
                            .with_statement(Statement::var_ref("rpm", "int"))
                            .with_statement(Statement::call("ignite", "Engine")),
                    )
                    .with_operation(
                        Operation::new("ignite").with_statement(Statement::var_ref("temp", "int")),
                    )
                    .with_operation(
                        Operation::new("stop")
                            .with_statement(Statement::base_call("shutdown", "Machine")),
                    ),
            ))
            .unwrap();
        model
            .add_type(ModelType::Class(
                Classifier::new("Machine").with_operation(Operation::new("shutdown")),
            ))
            .unwrap();
        model
            .add_type(ModelType::DataType(DataType::new("int")))
            .unwrap();
        model
    }

    #[test]
    fn test_unknown_class_is_noop() {
        let model = engine_model();
        let mut graph = PortionGraph::new();

        graph.clear_and_add_class(&model, "Gearbox");
        assert!(graph.is_empty());
        assert_eq!(graph.connection_count(), 0);

        // A non-class type is the same no-op.
        graph.clear_and_add_class(&model, "int");
        assert!(graph.is_empty());
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_members_seed_before_externals() {
        let model = engine_model();
        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Engine");

        let entries: Vec<(&str, NodeKind)> = graph
            .nodes()
            .map(|n| (n.name.as_str(), n.kind))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("rpm", NodeKind::Attribute),
                ("temp", NodeKind::Attribute),
                ("start", NodeKind::Operation),
                ("ignite", NodeKind::Operation),
                ("stop", NodeKind::Operation),
                ("Machine", NodeKind::ExternalRef),
            ]
        );
    }

    #[test]
    fn test_edge_kinds_follow_pass_order() {
        let model = engine_model();
        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Engine");

        let kinds: Vec<ConnectionKind> = graph.connections().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConnectionKind::BaseMemberRef,
                ConnectionKind::AttributeUse,
                ConnectionKind::AttributeUse,
                ConnectionKind::Call,
            ]
        );
    }

    #[test]
    fn test_base_ref_shadowed_by_local_operation() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(
                Classifier::new("Derived")
                    .with_operation(Operation::new("helper"))
                    .with_operation(
                        Operation::new("run")
                            .with_statement(Statement::base_call("helper", "Base")),
                    ),
            ))
            .unwrap();
        model
            .add_type(ModelType::Class(
                Classifier::new("Base").with_operation(Operation::new("helper")),
            ))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Derived");

        assert!(graph.find("Base", NodeKind::ExternalRef).is_none());
        assert!(graph
            .connections()
            .iter()
            .all(|c| c.kind != ConnectionKind::BaseMemberRef));
    }

    #[test]
    fn test_unresolved_base_target_skipped() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Derived").with_operation(
                Operation::new("run").with_statement(Statement::base_call("helper", "Ghost")),
            )))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Derived");

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_empty_external_class_name_skipped() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Derived").with_operation(
                Operation::new("run").with_statement(Statement::base_call("helper", "")),
            )))
            .unwrap();
        // An anonymous classifier the analyzer failed to name.
        model
            .add_type(ModelType::Class(Classifier::new("")))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Derived");

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_repeated_base_refs_share_node_but_not_edges() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Derived").with_operation(
                Operation::new("run")
                    .with_statement(Statement::base_call("helper", "Base"))
                    .with_statement(Statement::base_call("log", "Base")),
            )))
            .unwrap();
        model
            .add_type(ModelType::Class(
                Classifier::new("Base")
                    .with_operation(Operation::new("helper"))
                    .with_operation(Operation::new("log")),
            ))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Derived");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.connection_count(), 2);

        let base = graph.find("Base", NodeKind::ExternalRef).unwrap();
        assert!(graph
            .connections()
            .iter()
            .all(|c| c.supplier == base.index()));
    }

    #[test]
    fn test_unresolvable_local_callee_drops_edge_only() {
        let mut model = ModelData::new();
        // "operator+" is not among Engine's operations; the analyzer still
        // records the call as targeting Engine.
        model
            .add_type(ModelType::Class(
                Classifier::new("Engine")
                    .with_attribute("rpm")
                    .with_operation(
                        Operation::new("start")
                            .with_statement(Statement::call("operator+", "Engine"))
                            .with_statement(Statement::var_ref("rpm", "int")),
                    ),
            ))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Engine");

        // The attribute edge survives; only the broken call edge is absent.
        assert_eq!(graph.node_count(), 2);
        let conns = graph.connections();
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].kind, ConnectionKind::AttributeUse);
    }

    #[test]
    fn test_cross_class_call_makes_no_call_edge() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(Classifier::new("Engine").with_operation(
                Operation::new("start").with_statement(Statement::call("spin", "Turbine")),
            )))
            .unwrap();
        model
            .add_type(ModelType::Class(
                Classifier::new("Turbine").with_operation(Operation::new("spin")),
            ))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Engine");

        // Not a base-member reference either, so nothing is recorded.
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_overloaded_operations_collapse_to_one_node() {
        let mut model = ModelData::new();
        model
            .add_type(ModelType::Class(
                Classifier::new("Engine")
                    .with_operation(Operation::new("set"))
                    .with_operation(Operation::new("set"))
                    .with_operation(
                        Operation::new("start").with_statement(Statement::call("set", "Engine")),
                    ),
            ))
            .unwrap();

        let mut graph = PortionGraph::new();
        graph.clear_and_add_class(&model, "Engine");

        assert_eq!(graph.node_count(), 2);

        let set = graph.find("set", NodeKind::Operation).unwrap();
        let start = graph.find("start", NodeKind::Operation).unwrap();
        let conns = graph.connections();
        assert_eq!(conns.len(), 1);
        assert_eq!(
            (conns[0].supplier, conns[0].consumer),
            (set.index(), start.index())
        );
    }
}
