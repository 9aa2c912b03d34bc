use crate::{
    bpmn::{DATA_OBJECT, DATA_STORE_REFERENCE, ElementKind, GatewayType, Symbol},
    diagram::Diagram,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Structural metrics of a document. Every field is always present and zero by default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_processes: usize,
    /// Processes plus every element inside them
    pub total_elements: usize,
    pub total_tasks: usize,
    /// Task count per XML local name, e.g. `userTask`
    pub task_types: BTreeMap<String, usize>,
    pub total_gateways: usize,
    pub total_gateways_by_type: GatewayCounts,
    /// Start, end, intermediate and boundary events
    pub total_events: usize,
    pub total_start_events: usize,
    pub total_end_events: usize,
    pub total_intermediate_events: usize,
    pub total_boundary_events: usize,
    pub total_subprocesses: usize,
    pub total_other_elements: usize,
    pub total_sequence_flows: usize,
    pub total_message_flows: usize,
    /// Sequence flows plus message flows
    pub total_flows: usize,
    pub total_lanes: usize,
    pub total_data_objects: usize,
    pub total_data_stores: usize,
    pub orphaned_flows: usize,
    /// Flow nodes other than end events without an outgoing flow
    pub elements_without_outgoing_flow: usize,
    /// Flow nodes without an incoming flow. Start events, boundary events and
    /// event sub processes are expected to have none and are not counted.
    pub elements_without_incoming_flow: usize,
    pub unreachable_elements: usize,
    pub max_fan_out: usize,
    pub max_fan_in: usize,
    pub has_error_handling: bool,
    pub has_compensation: bool,
    pub complexity_score: usize,
}

impl Stats {
    /// Elements taking part in the sequence flow graph.
    pub fn flow_nodes(&self) -> usize {
        self.total_elements - self.total_processes - self.total_other_elements
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayCounts {
    pub exclusive: usize,
    pub parallel: usize,
    pub inclusive: usize,
    pub event_based: usize,
    pub complex: usize,
}

pub fn collect(diagram: &Diagram) -> Stats {
    let gateways = GatewayCounts {
        exclusive: diagram.count(ElementKind::Gateway(GatewayType::Exclusive)),
        parallel: diagram.count(ElementKind::Gateway(GatewayType::Parallel)),
        inclusive: diagram.count(ElementKind::Gateway(GatewayType::Inclusive)),
        event_based: diagram.count(ElementKind::Gateway(GatewayType::EventBased)),
        complex: diagram.count(ElementKind::Gateway(GatewayType::Complex)),
    };

    let mut stats = Stats {
        total_processes: diagram.processes().len(),
        total_tasks: diagram.count(ElementKind::Task),
        total_gateways: gateways.exclusive
            + gateways.parallel
            + gateways.inclusive
            + gateways.event_based
            + gateways.complex,
        total_gateways_by_type: gateways,
        total_start_events: diagram.count(ElementKind::StartEvent),
        total_end_events: diagram.count(ElementKind::EndEvent),
        total_intermediate_events: diagram.count(ElementKind::IntermediateEvent),
        total_boundary_events: diagram.count(ElementKind::BoundaryEvent),
        total_subprocesses: diagram.count(ElementKind::SubProcess),
        total_other_elements: diagram.count(ElementKind::Other),
        total_sequence_flows: diagram.flows().count(),
        total_message_flows: diagram.document().message_flows,
        total_lanes: diagram.processes().iter().map(|p| p.process().lanes).sum(),
        orphaned_flows: diagram.dangling().count(),
        max_fan_out: diagram.max_fan_out(),
        max_fan_in: diagram.max_fan_in(),
        ..Default::default()
    };
    stats.total_flows = stats.total_sequence_flows + stats.total_message_flows;
    stats.total_events = stats.total_start_events
        + stats.total_end_events
        + stats.total_intermediate_events
        + stats.total_boundary_events;

    for element in diagram.elements() {
        stats.total_elements += 1;
        match element.kind {
            ElementKind::Task => {
                *stats
                    .task_types
                    .entry(element.local_name.clone())
                    .or_default() += 1;
            }
            ElementKind::Other if element.local_name == DATA_OBJECT => {
                stats.total_data_objects += 1
            }
            ElementKind::Other if element.local_name == DATA_STORE_REFERENCE => {
                stats.total_data_stores += 1
            }
            _ => {}
        }
        match element.symbol {
            Some(Symbol::Error) => stats.has_error_handling = true,
            Some(Symbol::Compensation) => stats.has_compensation = true,
            _ => {}
        }
        if element.kind == ElementKind::BoundaryEvent {
            stats.has_error_handling = true;
        }
    }
    stats.total_elements += stats.total_processes;

    for index in diagram.processes() {
        for element in index.process().elements.iter().filter(|e| e.is_flow_node()) {
            if element.kind != ElementKind::EndEvent && index.fan_out(&element.id) == 0 {
                stats.elements_without_outgoing_flow += 1;
            }
            let expects_incoming = !matches!(
                element.kind,
                ElementKind::StartEvent | ElementKind::BoundaryEvent
            ) && !element.is_event_sub_process();
            if expects_incoming && index.fan_in(&element.id) == 0 {
                stats.elements_without_incoming_flow += 1;
            }
        }
        stats.unreachable_elements += index.unreachable().len();
    }

    stats.complexity_score = complexity(&stats);
    stats
}

fn complexity(stats: &Stats) -> usize {
    stats.total_tasks
        + stats.total_gateways * 2
        + stats.total_events
        + stats.total_subprocesses * 5
        + stats.total_lanes * 2
        + stats.total_flows / 2
}
