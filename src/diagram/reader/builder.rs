use crate::{
    bpmn::*,
    error::{Error, UNMATCHED_END_TAG},
};
use log::debug;
use std::collections::{BTreeMap, HashSet};

// Element names are resolved against the BPMN namespace before they reach the builder.
//
// scopes: [
//            Definitions,
//            Process,          // elements and flows land in the open process
//            SubProcess(3),    // children get parent = elements[3].id
//            Element(7),       // event definitions, lanes and the rest below a node
//        ]
//

#[derive(Debug, Clone, Copy)]
enum Scope {
    Definitions,
    Collaboration,
    Process,
    SubProcess(usize),
    Element(usize),
    Flow(usize),
    Ignored,
}

#[derive(Default)]
struct ProcessBuilder {
    process: Process,
    ids: HashSet<String>,
}

impl ProcessBuilder {
    fn claim(&mut self, id: &str) -> Result<(), Error> {
        if !self.ids.insert(id.to_string()) {
            return Err(Error::DuplicateId {
                process: self.process.id.clone(),
                id: id.into(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct DocumentBuilder {
    document: AnalysisDocument,
    process: Option<ProcessBuilder>,
    scopes: Vec<Scope>,
    seen_bpmn: bool,
}

impl DocumentBuilder {
    pub(super) fn depth(&self) -> usize {
        self.scopes.len()
    }

    // Non BPMN elements and everything below them are skipped.
    pub(super) fn open_foreign(&mut self) {
        self.scopes.push(Scope::Ignored);
    }

    pub(super) fn open(
        &mut self,
        local_name: &[u8],
        mut attributes: BTreeMap<String, String>,
    ) -> Result<(), Error> {
        let root = self.scopes.is_empty();
        let scope = match (self.scopes.last().copied(), local_name) {
            // BPMN wrapped in foreign elements still counts
            (None | Some(Scope::Ignored), DEFINITIONS) if self.process.is_none() => {
                self.document.target_namespace = take(&mut attributes, ATTR_TARGET_NAMESPACE);
                Scope::Definitions
            }
            (None | Some(Scope::Definitions), PROCESS) => self.start_process(attributes)?,
            (Some(Scope::Ignored), PROCESS) if self.process.is_none() => {
                self.start_process(attributes)?
            }
            (Some(Scope::Ignored), _) => Scope::Ignored,
            (Some(Scope::Definitions), COLLABORATION) => Scope::Collaboration,
            (Some(Scope::Collaboration), MESSAGE_FLOW) => {
                self.document.message_flows += 1;
                Scope::Ignored
            }
            (Some(Scope::Process | Scope::SubProcess(_)), SEQUENCE_FLOW) => {
                self.add_flow(attributes)?
            }
            // Flow references of the sub process itself
            (Some(Scope::SubProcess(_)), INCOMING | OUTGOING) => Scope::Ignored,
            (Some(Scope::Process), _) => self.add_element(local_name, attributes, None)?,
            (Some(Scope::SubProcess(parent)), _) => {
                self.add_element(local_name, attributes, Some(parent))?
            }
            (Some(Scope::Element(index)), _) => {
                self.update_element(index, local_name);
                Scope::Element(index)
            }
            (Some(Scope::Flow(index)), CONDITION_EXPRESSION) => {
                if let Some(flow) = self.process_mut().and_then(|p| p.flows.get_mut(index)) {
                    flow.has_condition = true;
                }
                Scope::Ignored
            }
            _ => Scope::Ignored,
        };
        self.seen_bpmn |= root || !matches!(scope, Scope::Ignored);
        self.scopes.push(scope);
        Ok(())
    }

    pub(super) fn close(&mut self) -> Result<(), Error> {
        match self.scopes.pop() {
            Some(Scope::Process) => {
                if let Some(ProcessBuilder { process, .. }) = self.process.take() {
                    debug!(
                        "Read process {} with {} elements and {} flows",
                        process.id,
                        process.elements.len(),
                        process.flows.len()
                    );
                    self.document.processes.push(process);
                }
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(Error::MalformedXml(UNMATCHED_END_TAG.into())),
        }
    }

    pub(super) fn finish(self) -> Result<AnalysisDocument, Error> {
        if !self.seen_bpmn {
            return Err(Error::NotBpmn);
        }
        Ok(self.document)
    }

    fn process_mut(&mut self) -> Option<&mut Process> {
        self.process.as_mut().map(|builder| &mut builder.process)
    }

    fn start_process(&mut self, mut attributes: BTreeMap<String, String>) -> Result<Scope, Error> {
        let id = take_id(&mut attributes).ok_or_else(|| Error::MissingId("process".into()))?;
        let mut builder = ProcessBuilder {
            process: Process {
                name: take(&mut attributes, ATTR_NAME),
                is_executable: take(&mut attributes, ATTR_IS_EXECUTABLE)
                    .is_some_and(|value| value == "true"),
                id: id.clone(),
                ..Default::default()
            },
            ..Default::default()
        };
        builder.claim(&id)?;
        self.process = Some(builder);
        Ok(Scope::Process)
    }

    fn add_flow(&mut self, mut attributes: BTreeMap<String, String>) -> Result<Scope, Error> {
        let Some(builder) = self.process.as_mut() else {
            return Ok(Scope::Ignored);
        };
        let id = take_id(&mut attributes)
            .ok_or_else(|| Error::MissingId(String::from_utf8_lossy(SEQUENCE_FLOW).into()))?;
        builder.claim(&id)?;

        let flows = &mut builder.process.flows;
        flows.push(SequenceFlow {
            id,
            name: take(&mut attributes, ATTR_NAME),
            source_ref: take(&mut attributes, ATTR_SOURCE_REF).unwrap_or_default(),
            target_ref: take(&mut attributes, ATTR_TARGET_REF).unwrap_or_default(),
            has_condition: false,
        });
        Ok(Scope::Flow(flows.len() - 1))
    }

    fn add_element(
        &mut self,
        local_name: &[u8],
        mut attributes: BTreeMap<String, String>,
        parent: Option<usize>,
    ) -> Result<Scope, Error> {
        let Some(builder) = self.process.as_mut() else {
            return Ok(Scope::Ignored);
        };
        let kind = ElementKind::from(local_name);
        let local_name = String::from_utf8_lossy(local_name).into_owned();
        let index = builder.process.elements.len();

        let id = match take_id(&mut attributes) {
            Some(id) => {
                builder.claim(&id)?;
                id
            }
            // An XML id can never contain '#'
            None if kind == ElementKind::Other => format!("#{local_name}:{index}"),
            None => return Err(Error::MissingId(local_name)),
        };

        if local_name.as_bytes() == LANE {
            builder.process.lanes += 1;
        }

        let parent = parent
            .and_then(|parent| builder.process.elements.get(parent))
            .map(|parent| parent.id.clone());

        builder.process.elements.push(ProcessElement {
            id,
            kind,
            name: take(&mut attributes, ATTR_NAME),
            local_name,
            attributes,
            symbol: None,
            parent,
        });

        Ok(match kind {
            ElementKind::SubProcess => Scope::SubProcess(index),
            _ => Scope::Element(index),
        })
    }

    fn update_element(&mut self, index: usize, local_name: &[u8]) {
        let Some(process) = self.process_mut() else {
            return;
        };
        if local_name == LANE {
            process.lanes += 1;
        }
        if let Some(element) = process.elements.get_mut(index)
            && element.kind.is_event()
            && element.symbol.is_none()
        {
            element.symbol = Symbol::try_from(local_name).ok();
        }
    }
}

fn take(attributes: &mut BTreeMap<String, String>, key: &[u8]) -> Option<String> {
    attributes.remove(String::from_utf8_lossy(key).as_ref())
}

fn take_id(attributes: &mut BTreeMap<String, String>) -> Option<String> {
    take(attributes, ATTR_ID).filter(|id| !id.is_empty())
}
