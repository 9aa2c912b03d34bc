use super::{Rule, RuleContext};
use crate::{
    Error,
    bpmn::{ATTR_DEFAULT, ElementKind, GatewayType, ProcessElement},
    diagram::ProcessIndex,
};

type Outcome = Result<Option<String>, Error>;

pub(super) const RULES: &[Rule] = &[
    Rule { name: "no-process", check: no_process },
    Rule { name: "missing-start-event", check: missing_start_event },
    Rule { name: "missing-end-event", check: missing_end_event },
    Rule { name: "dead-end-task", check: dead_end_task },
    Rule { name: "orphaned-flow", check: orphaned_flow },
    Rule { name: "redundant-gateway", check: redundant_gateway },
    Rule { name: "unconditioned-branches", check: unconditioned_branches },
    Rule { name: "missing-error-handling", check: missing_error_handling },
    Rule { name: "trivial-model", check: trivial_model },
    Rule { name: "unreachable-element", check: unreachable_element },
    Rule { name: "complex-gateway", check: complex_gateway },
    Rule { name: "event-gateway-targets", check: event_gateway_targets },
    Rule { name: "missing-gateways", check: missing_gateways },
    Rule { name: "missing-sequence-flows", check: missing_sequence_flows },
    Rule { name: "missing-lanes", check: missing_lanes },
    Rule { name: "complexity", check: complexity },
    Rule { name: "missing-message-flows", check: missing_message_flows },
    Rule { name: "missing-data", check: missing_data },
    Rule { name: "missing-subprocesses", check: missing_subprocesses },
];

fn no_process(context: &RuleContext<'_>) -> Outcome {
    Ok((context.stats.total_processes == 0).then(|| {
        "No processes found in the BPMN model. Add a process definition describing the flow."
            .to_string()
    }))
}

fn missing_start_event(context: &RuleContext<'_>) -> Outcome {
    let processes = processes_where(context, |index| index.count(ElementKind::StartEvent) == 0);
    Ok((!processes.is_empty()).then(|| {
        format!(
            "Add a start event to {} so the flow has a clear entry point.",
            named("process", "processes", &processes)
        )
    }))
}

fn missing_end_event(context: &RuleContext<'_>) -> Outcome {
    let processes = processes_where(context, |index| index.count(ElementKind::EndEvent) == 0);
    Ok((!processes.is_empty()).then(|| {
        format!(
            "Add an end event to {} so every path has an explicit outcome.",
            named("process", "processes", &processes)
        )
    }))
}

fn dead_end_task(context: &RuleContext<'_>) -> Outcome {
    let tasks = elements_where(context, |index, element| {
        element.kind == ElementKind::Task && index.fan_out(&element.id) == 0
    });
    Ok((!tasks.is_empty()).then(|| {
        format!(
            "Connect {} to the rest of the flow or follow them with an end event; they have no outgoing sequence flow.",
            named("task", "tasks", &tasks)
        )
    }))
}

fn orphaned_flow(context: &RuleContext<'_>) -> Outcome {
    if context.stats.orphaned_flows == 0 {
        return Ok(None);
    }
    let flows: Vec<String> = context
        .diagram
        .dangling()
        .map(ToString::to_string)
        .collect();
    Ok(Some(format!(
        "Fix dangling sequenceFlow references: {}.",
        flows.join(", ")
    )))
}

fn redundant_gateway(context: &RuleContext<'_>) -> Outcome {
    let flag_merging = context.thresholds.flag_merging_gateways;
    let gateways = elements_where(context, |index, element| {
        element.kind.is_gateway()
            && index.fan_out(&element.id) <= 1
            && (flag_merging || index.fan_in(&element.id) <= 1)
    });
    Ok((!gateways.is_empty()).then(|| {
        format!(
            "Consider removing {}: with at most one outgoing flow they add no branching.",
            named("gateway", "gateways", &gateways)
        )
    }))
}

// Structural only: condition expressions are not evaluated.
fn unconditioned_branches(context: &RuleContext<'_>) -> Outcome {
    let gateways = elements_where(context, |index, element| {
        matches!(
            element.kind,
            ElementKind::Gateway(GatewayType::Exclusive | GatewayType::Inclusive)
        ) && index.fan_out(&element.id) > 1
            && element.attribute(ATTR_DEFAULT).is_none()
            && !index.outgoing(&element.id).any(|flow| flow.has_condition)
    });
    Ok((!gateways.is_empty()).then(|| {
        format!(
            "Review the branch conditions of {}: no outgoing flow has a condition or is marked as default.",
            named("gateway", "gateways", &gateways)
        )
    }))
}

fn missing_error_handling(context: &RuleContext<'_>) -> Outcome {
    Ok((!context.stats.has_error_handling).then(|| {
        "Add error handling: no error event or boundary event was found. Attach boundary events to activities that can fail."
            .to_string()
    }))
}

fn trivial_model(context: &RuleContext<'_>) -> Outcome {
    let flow_nodes = context.stats.flow_nodes();
    Ok((flow_nodes < context.thresholds.min_elements).then(|| {
        format!(
            "The model has only {flow_nodes} flow elements and may be too trivial for meaningful process automation."
        )
    }))
}

fn unreachable_element(context: &RuleContext<'_>) -> Outcome {
    let elements: Vec<&str> = context
        .diagram
        .processes()
        .iter()
        .flat_map(ProcessIndex::unreachable)
        .map(|element| element.id.as_str())
        .collect();
    Ok((!elements.is_empty()).then(|| {
        format!(
            "{} cannot be reached from any start event. Connect or remove unreachable elements.",
            capitalize(&named("element", "elements", &elements))
        )
    }))
}

fn complex_gateway(context: &RuleContext<'_>) -> Outcome {
    Ok((context.stats.total_gateways_by_type.complex > 0).then(|| {
        "Complex gateways detected. Consider simplifying them with exclusive or inclusive gateways where possible."
            .to_string()
    }))
}

// Event based gateways may only lead to catch events or receive tasks.
fn event_gateway_targets(context: &RuleContext<'_>) -> Outcome {
    let mut offending = Vec::new();
    for index in context.diagram.processes() {
        for gateway in index.of_kind(ElementKind::Gateway(GatewayType::EventBased)) {
            for flow in index.outgoing(&gateway.id) {
                let target = index.require(&flow.target_ref)?;
                if !matches!(
                    target.local_name.as_str(),
                    "intermediateCatchEvent" | "receiveTask"
                ) {
                    offending.push(target.id.as_str());
                }
            }
        }
    }
    Ok((!offending.is_empty()).then(|| {
        format!(
            "Event based gateways must lead to intermediate catch events or receive tasks; check {}.",
            named("target", "targets", &offending)
        )
    }))
}

fn missing_gateways(context: &RuleContext<'_>) -> Outcome {
    let stats = context.stats;
    Ok((stats.total_gateways == 0
        && stats.total_tasks > context.thresholds.gateway_task_threshold)
        .then(|| {
            "Consider using gateways to model decision points and parallel execution for better process clarity."
                .to_string()
        }))
}

fn missing_sequence_flows(context: &RuleContext<'_>) -> Outcome {
    let stats = context.stats;
    Ok((stats.total_sequence_flows == 0 && stats.total_tasks > 0).then(|| {
        "No sequence flows found. Connect the tasks with sequence flows.".to_string()
    }))
}

fn missing_lanes(context: &RuleContext<'_>) -> Outcome {
    let stats = context.stats;
    Ok((stats.total_lanes == 0 && stats.total_tasks > context.thresholds.lane_task_threshold)
        .then(|| {
            "Consider adding lanes to organize activities by roles or organizational units."
                .to_string()
        }))
}

fn complexity(context: &RuleContext<'_>) -> Outcome {
    let score = context.stats.complexity_score;
    let thresholds = context.thresholds;
    Ok(if score > thresholds.max_complexity {
        Some(format!(
            "High complexity score ({score}). Consider breaking the process down into smaller sub processes."
        ))
    } else if score < thresholds.min_complexity {
        Some("Very simple process. Ensure all necessary business logic is captured.".into())
    } else {
        None
    })
}

fn missing_message_flows(context: &RuleContext<'_>) -> Outcome {
    let stats = context.stats;
    Ok((stats.total_processes > 1 && stats.total_message_flows == 0).then(|| {
        "For multi-process models, consider message flows for inter-process communication."
            .to_string()
    }))
}

fn missing_data(context: &RuleContext<'_>) -> Outcome {
    let stats = context.stats;
    Ok((stats.total_data_objects == 0 && stats.total_data_stores == 0 && stats.total_tasks > 0)
        .then(|| {
            "No data objects or data stores found. Consider modeling the data flow for better process documentation."
                .to_string()
        }))
}

fn missing_subprocesses(context: &RuleContext<'_>) -> Outcome {
    let stats = context.stats;
    Ok((stats.total_subprocesses == 0
        && stats.complexity_score > context.thresholds.subprocess_complexity)
        .then(|| {
            "Consider extracting complex sections into sub processes to improve readability and reuse."
                .to_string()
        }))
}

fn processes_where<'a>(
    context: &RuleContext<'a>,
    predicate: impl Fn(&ProcessIndex<'a>) -> bool,
) -> Vec<&'a str> {
    context
        .diagram
        .processes()
        .iter()
        .filter(|index| predicate(index))
        .map(|index| index.process().id.as_str())
        .collect()
}

fn elements_where<'a>(
    context: &RuleContext<'a>,
    predicate: impl Fn(&ProcessIndex<'a>, &ProcessElement) -> bool,
) -> Vec<&'a str> {
    context
        .diagram
        .processes()
        .iter()
        .flat_map(|index| {
            index
                .process()
                .elements
                .iter()
                .filter(|element| predicate(index, element))
                .map(|element| element.id.as_str())
                .collect::<Vec<_>>()
        })
        .collect()
}

// "task Task_1" or "tasks Task_1, Task_2"
fn named(singular: &str, plural: &str, ids: &[&str]) -> String {
    match ids {
        [id] => format!("{singular} {id}"),
        _ => format!("{plural} {}", ids.join(", ")),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
