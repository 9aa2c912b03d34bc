pub mod reader;

use crate::{
    Error,
    bpmn::{
        ATTR_ATTACHED_TO_REF, AnalysisDocument, ElementKind, Process, ProcessElement,
        SequenceFlow,
    },
};
use log::debug;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

/// Structural index over a whole document. One [`ProcessIndex`] per process.
#[derive(Debug)]
pub struct Diagram<'a> {
    document: &'a AnalysisDocument,
    processes: Vec<ProcessIndex<'a>>,
}

impl<'a> Diagram<'a> {
    pub fn new(document: &'a AnalysisDocument) -> Self {
        #[cfg(feature = "parallel")]
        let processes = {
            use rayon::prelude::*;
            document.processes.par_iter().map(ProcessIndex::new).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let processes = document.processes.iter().map(ProcessIndex::new).collect();

        Self {
            document,
            processes,
        }
    }

    pub fn document(&self) -> &'a AnalysisDocument {
        self.document
    }

    pub fn processes(&self) -> &[ProcessIndex<'a>] {
        &self.processes
    }

    pub fn elements(&self) -> impl Iterator<Item = &'a ProcessElement> + '_ {
        self.processes
            .iter()
            .flat_map(|index| index.process.elements.iter())
    }

    pub fn flows(&self) -> impl Iterator<Item = &'a SequenceFlow> + '_ {
        self.processes
            .iter()
            .flat_map(|index| index.process.flows.iter())
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.processes.iter().map(|index| index.count(kind)).sum()
    }

    pub fn dangling(&self) -> impl Iterator<Item = &DanglingFlow<'a>> {
        self.processes.iter().flat_map(|index| index.dangling.iter())
    }

    pub fn max_fan_out(&self) -> usize {
        self.processes
            .iter()
            .map(ProcessIndex::max_fan_out)
            .max()
            .unwrap_or_default()
    }

    pub fn max_fan_in(&self) -> usize {
        self.processes
            .iter()
            .map(ProcessIndex::max_fan_in)
            .max()
            .unwrap_or_default()
    }
}

/// Which end of a sequence flow points at an unknown element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
    Both,
}

#[derive(Debug)]
pub struct DanglingFlow<'a> {
    pub flow: &'a SequenceFlow,
    pub missing: Endpoint,
}

impl Display for DanglingFlow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let SequenceFlow {
            id,
            source_ref,
            target_ref,
            ..
        } = self.flow;
        match self.missing {
            Endpoint::Source => write!(f, "{id} (unknown source {source_ref:?})"),
            Endpoint::Target => write!(f, "{id} (unknown target {target_ref:?})"),
            Endpoint::Both => write!(
                f,
                "{id} (unknown source {source_ref:?} and target {target_ref:?})"
            ),
        }
    }
}

#[derive(Debug)]
pub struct ProcessIndex<'a> {
    process: &'a Process,
    by_id: HashMap<&'a str, usize>,
    by_kind: HashMap<ElementKind, Vec<usize>>,
    // Flow indexes keyed by element id
    outgoing: HashMap<&'a str, Vec<usize>>,
    incoming: HashMap<&'a str, Vec<usize>>,
    // Host activity -> attached boundary events
    boundaries: HashMap<usize, Vec<usize>>,
    // Sub process -> nested elements
    children: HashMap<usize, Vec<usize>>,
    reachability: Vec<(usize, HashSet<usize>)>,
    reachable: HashSet<usize>,
    dangling: Vec<DanglingFlow<'a>>,
}

impl<'a> ProcessIndex<'a> {
    pub fn new(process: &'a Process) -> Self {
        let by_id: HashMap<&str, usize> = process
            .elements
            .iter()
            .enumerate()
            .map(|(index, element)| (element.id.as_str(), index))
            .collect();

        let mut by_kind: HashMap<ElementKind, Vec<usize>> = HashMap::new();
        let mut boundaries: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
        for (index, element) in process.elements.iter().enumerate() {
            by_kind.entry(element.kind).or_default().push(index);
            if let Some(host) = element
                .attribute(ATTR_ATTACHED_TO_REF)
                .and_then(|host| by_id.get(host))
            {
                boundaries.entry(*host).or_default().push(index);
            }
            if let Some(parent) = element.parent.as_deref().and_then(|p| by_id.get(p)) {
                children.entry(*parent).or_default().push(index);
            }
        }

        let mut outgoing: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut dangling = Vec::new();
        for (index, flow) in process.flows.iter().enumerate() {
            outgoing.entry(flow.source_ref.as_str()).or_default().push(index);
            incoming.entry(flow.target_ref.as_str()).or_default().push(index);

            let missing = match (
                by_id.contains_key(flow.source_ref.as_str()),
                by_id.contains_key(flow.target_ref.as_str()),
            ) {
                (true, true) => continue,
                (false, true) => Endpoint::Source,
                (true, false) => Endpoint::Target,
                (false, false) => Endpoint::Both,
            };
            let dangling_flow = DanglingFlow { flow, missing };
            debug!("Dangling flow in {}: {dangling_flow}", process.id);
            dangling.push(dangling_flow);
        }

        let mut index = Self {
            process,
            by_id,
            by_kind,
            outgoing,
            incoming,
            boundaries,
            children,
            reachability: Default::default(),
            reachable: Default::default(),
            dangling,
        };
        index.reachability = index
            .entry_points()
            .map(|start| (start, index.reach(start)))
            .collect();
        index.reachable = index
            .reachability
            .iter()
            .flat_map(|(_, reached)| reached.iter().copied())
            .collect();
        index
    }

    pub fn process(&self) -> &'a Process {
        self.process
    }

    pub fn element(&self, id: &str) -> Option<&'a ProcessElement> {
        let process = self.process;
        self.by_id.get(id).map(|index| &process.elements[*index])
    }

    /// Like [`ProcessIndex::element`] but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<&'a ProcessElement, Error> {
        self.element(id)
            .ok_or_else(|| Error::MissingElement(id.into()))
    }

    pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &'a ProcessElement> + '_ {
        let process = self.process;
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(move |index| &process.elements[*index])
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &'a SequenceFlow> + '_ {
        let process = self.process;
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .map(move |index| &process.flows[*index])
    }

    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &'a SequenceFlow> + '_ {
        let process = self.process;
        self.incoming
            .get(id)
            .into_iter()
            .flatten()
            .map(move |index| &process.flows[*index])
    }

    pub fn fan_out(&self, id: &str) -> usize {
        self.outgoing.get(id).map_or(0, Vec::len)
    }

    pub fn fan_in(&self, id: &str) -> usize {
        self.incoming.get(id).map_or(0, Vec::len)
    }

    pub fn max_fan_out(&self) -> usize {
        self.process
            .elements
            .iter()
            .map(|element| self.fan_out(&element.id))
            .max()
            .unwrap_or_default()
    }

    pub fn max_fan_in(&self) -> usize {
        self.process
            .elements
            .iter()
            .map(|element| self.fan_in(&element.id))
            .max()
            .unwrap_or_default()
    }

    pub fn boundaries(&self, host_id: &str) -> impl Iterator<Item = &'a ProcessElement> + '_ {
        let process = self.process;
        self.by_id
            .get(host_id)
            .and_then(|host| self.boundaries.get(host))
            .into_iter()
            .flatten()
            .map(move |index| &process.elements[*index])
    }

    pub fn dangling(&self) -> &[DanglingFlow<'a>] {
        &self.dangling
    }

    /// Elements reachable from an entry point, the entry point included.
    /// Entry points are top level start events and event sub processes.
    pub fn reachable_from(&self, id: &str) -> Option<impl Iterator<Item = &'a ProcessElement>> {
        let process = self.process;
        let start = self.by_id.get(id)?;
        self.reachability
            .iter()
            .find(|(entry, _)| entry == start)
            .map(move |(_, reached)| reached.iter().map(move |index| &process.elements[*index]))
    }

    /// Flow nodes no entry point can reach. Empty when the process has no entry point.
    pub fn unreachable(&self) -> Vec<&'a ProcessElement> {
        if self.reachability.is_empty() {
            return Vec::new();
        }
        self.process
            .elements
            .iter()
            .enumerate()
            .filter(|(index, element)| element.is_flow_node() && !self.reachable.contains(index))
            .map(|(_, element)| element)
            .collect()
    }

    fn entry_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.process
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| {
                (element.kind == ElementKind::StartEvent && element.parent.is_none())
                    || element.is_event_sub_process()
            })
            .map(|(index, _)| index)
    }

    // Depth first with an explicit stack. Loops are fine, visited nodes are skipped.
    fn reach(&self, start: usize) -> HashSet<usize> {
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        while let Some(index) = stack.pop() {
            if visited.insert(index) {
                stack.extend(
                    self.successors(index)
                        .filter(|next| !visited.contains(next)),
                );
            }
        }
        visited
    }

    // Targets of outgoing flows, attached boundary events and the start events of a sub process.
    fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let element = &self.process.elements[index];
        let targets = self
            .outgoing
            .get(element.id.as_str())
            .into_iter()
            .flatten()
            .filter_map(|flow| {
                self.by_id
                    .get(self.process.flows[*flow].target_ref.as_str())
                    .copied()
            });
        let boundaries = self.boundaries.get(&index).into_iter().flatten().copied();
        let nested = self
            .children
            .get(&index)
            .into_iter()
            .flatten()
            .copied()
            .filter(|child| self.process.elements[*child].kind == ElementKind::StartEvent);
        targets.chain(boundaries).chain(nested)
    }
}
