use crate::error::Error;
use std::{collections::BTreeMap, fmt::Display, path::Path, str::FromStr};

pub const BPMN_NS: &str = "http://www.omg.org/spec/BPMN/20100524/MODEL";

// Local names in the BPMN namespace
pub(crate) const DEFINITIONS: &[u8] = b"definitions";
pub(crate) const PROCESS: &[u8] = b"process";
pub(crate) const COLLABORATION: &[u8] = b"collaboration";
pub(crate) const SEQUENCE_FLOW: &[u8] = b"sequenceFlow";
pub(crate) const MESSAGE_FLOW: &[u8] = b"messageFlow";
pub(crate) const CONDITION_EXPRESSION: &[u8] = b"conditionExpression";
pub(crate) const LANE: &[u8] = b"lane";
pub(crate) const INCOMING: &[u8] = b"incoming";
pub(crate) const OUTGOING: &[u8] = b"outgoing";
pub(crate) const EVENT_DEFINITION_SUFFIX: &[u8] = b"EventDefinition";
pub(crate) const DATA_OBJECT: &str = "dataObject";
pub(crate) const DATA_STORE_REFERENCE: &str = "dataStoreReference";

// Attributes
pub(crate) const ATTR_ID: &[u8] = b"id";
pub(crate) const ATTR_NAME: &[u8] = b"name";
pub(crate) const ATTR_SOURCE_REF: &[u8] = b"sourceRef";
pub(crate) const ATTR_TARGET_REF: &[u8] = b"targetRef";
pub(crate) const ATTR_IS_EXECUTABLE: &[u8] = b"isExecutable";
pub(crate) const ATTR_TARGET_NAMESPACE: &[u8] = b"targetNamespace";
pub(crate) const ATTR_DEFAULT: &str = "default";
pub(crate) const ATTR_ATTACHED_TO_REF: &str = "attachedToRef";
pub(crate) const ATTR_TRIGGERED_BY_EVENT: &str = "triggeredByEvent";

/// Parsed BPMN document. Immutable once read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisDocument {
    pub target_namespace: Option<String>,
    pub processes: Vec<Process>,
    /// Message flows declared in collaborations
    pub message_flows: usize,
}

impl AnalysisDocument {
    /// Read and parse a BPMN file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        std::fs::read_to_string(path)?.parse()
    }
}

impl FromStr for AnalysisDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::diagram::reader::read_bpmn(s)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Process {
    pub id: String,
    pub name: Option<String>,
    pub is_executable: bool,
    pub elements: Vec<ProcessElement>,
    pub flows: Vec<SequenceFlow>,
    /// Lanes found anywhere below the process, nested lane sets included
    pub lanes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessElement {
    pub id: String,
    pub kind: ElementKind,
    pub name: Option<String>,
    /// XML local name, e.g. `userTask`. Keeps the subtype of collapsed kinds.
    pub local_name: String,
    pub attributes: BTreeMap<String, String>,
    /// First event definition found below an event
    pub symbol: Option<Symbol>,
    /// Enclosing sub process id. None for top level elements.
    pub parent: Option<String>,
}

impl ProcessElement {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn name_or_id(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Everything except `Other` takes part in the sequence flow graph.
    pub fn is_flow_node(&self) -> bool {
        self.kind != ElementKind::Other
    }

    pub fn is_event_sub_process(&self) -> bool {
        self.kind == ElementKind::SubProcess
            && self.attribute(ATTR_TRIGGERED_BY_EVENT) == Some("true")
    }
}

impl Display for ProcessElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name_or_id(), self.local_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceFlow {
    pub id: String,
    pub name: Option<String>,
    pub source_ref: String,
    pub target_ref: String,
    /// A `conditionExpression` child is present
    pub has_condition: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    StartEvent,
    EndEvent,
    IntermediateEvent,
    BoundaryEvent,
    Task,
    SubProcess,
    Gateway(GatewayType),
    Other,
}

impl ElementKind {
    pub fn is_event(&self) -> bool {
        matches!(
            self,
            ElementKind::StartEvent
                | ElementKind::EndEvent
                | ElementKind::IntermediateEvent
                | ElementKind::BoundaryEvent
        )
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self, ElementKind::Gateway(_))
    }
}

impl From<&[u8]> for ElementKind {
    fn from(local_name: &[u8]) -> Self {
        match local_name {
            b"startEvent" => ElementKind::StartEvent,
            b"endEvent" => ElementKind::EndEvent,
            b"intermediateCatchEvent" | b"intermediateThrowEvent" => {
                ElementKind::IntermediateEvent
            }
            b"boundaryEvent" => ElementKind::BoundaryEvent,
            b"task" | b"userTask" | b"serviceTask" | b"scriptTask" | b"manualTask"
            | b"businessRuleTask" | b"sendTask" | b"receiveTask" | b"callActivity" => {
                ElementKind::Task
            }
            b"subProcess" | b"transaction" | b"adHocSubProcess" => ElementKind::SubProcess,
            b"exclusiveGateway" => ElementKind::Gateway(GatewayType::Exclusive),
            b"parallelGateway" => ElementKind::Gateway(GatewayType::Parallel),
            b"inclusiveGateway" => ElementKind::Gateway(GatewayType::Inclusive),
            b"eventBasedGateway" => ElementKind::Gateway(GatewayType::EventBased),
            b"complexGateway" => ElementKind::Gateway(GatewayType::Complex),
            _ => ElementKind::Other,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Gateway(gateway_type) => write!(f, "{gateway_type}Gateway"),
            _ => std::fmt::Debug::fmt(&self, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GatewayType {
    Exclusive,
    Parallel,
    Inclusive,
    EventBased,
    Complex,
}

impl Display for GatewayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

/// Event definition marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cancel,
    Compensation,
    Conditional,
    Error,
    Escalation,
    Link,
    Message,
    Signal,
    Terminate,
    Timer,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

impl TryFrom<&[u8]> for Symbol {
    type Error = ();

    // Takes the local name of an event definition, e.g. `errorEventDefinition`
    fn try_from(value: &[u8]) -> Result<Self, ()> {
        let prefix = value
            .strip_suffix(EVENT_DEFINITION_SUFFIX)
            .ok_or(())?;
        Ok(match prefix {
            b"cancel" => Symbol::Cancel,
            b"compensate" => Symbol::Compensation,
            b"conditional" => Symbol::Conditional,
            b"error" => Symbol::Error,
            b"escalation" => Symbol::Escalation,
            b"link" => Symbol::Link,
            b"message" => Symbol::Message,
            b"signal" => Symbol::Signal,
            b"terminate" => Symbol::Terminate,
            b"timer" => Symbol::Timer,
            _ => return Err(()),
        })
    }
}
