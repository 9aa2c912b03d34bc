// BPMN documents shared by the unit tests.

pub(crate) const SIMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn2:definitions xmlns:bpmn2="http://www.omg.org/spec/BPMN/20100524/MODEL"
                   xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
                   xmlns:dc="http://www.omg.org/spec/DD/20100524/DC"
                   targetNamespace="http://bpmn.io/schema/bpmn">
  <bpmn2:process id="Process_1" isExecutable="true">
    <bpmn2:startEvent id="StartEvent_1"/>
    <bpmn2:task id="Task_1" name="Task 1"/>
    <bpmn2:endEvent id="EndEvent_1"/>
    <bpmn2:sequenceFlow id="Flow_1" sourceRef="StartEvent_1" targetRef="Task_1"/>
    <bpmn2:sequenceFlow id="Flow_2" sourceRef="Task_1" targetRef="EndEvent_1"/>
  </bpmn2:process>
</bpmn2:definitions>
"#;

pub(crate) const DEFAULT_NAMESPACE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL"
             targetNamespace="http://bpmn.io/schema/bpmn">
  <process id="Process_1" isExecutable="true">
    <startEvent id="StartEvent_1"/>
    <task id="Task_1" name="Task 1"/>
    <endEvent id="EndEvent_1"/>
    <sequenceFlow id="Flow_1" sourceRef="StartEvent_1" targetRef="Task_1"/>
    <sequenceFlow id="Flow_2" sourceRef="Task_1" targetRef="EndEvent_1"/>
  </process>
</definitions>
"#;

pub(crate) const COMPLEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn2:definitions xmlns:bpmn2="http://www.omg.org/spec/BPMN/20100524/MODEL"
                   targetNamespace="http://bpmn.io/schema/bpmn">
  <bpmn2:process id="Process_1" isExecutable="true">
    <bpmn2:startEvent id="StartEvent_1"/>
    <bpmn2:task id="Task_1" name="Task 1"/>
    <bpmn2:exclusiveGateway id="Gateway_1"/>
    <bpmn2:task id="Task_2" name="Task 2"/>
    <bpmn2:task id="Task_3" name="Task 3"/>
    <bpmn2:parallelGateway id="Gateway_2"/>
    <bpmn2:subProcess id="SubProcess_1"/>
    <bpmn2:endEvent id="EndEvent_1">
      <bpmn2:errorEventDefinition id="ErrorEvent_1"/>
    </bpmn2:endEvent>
    <bpmn2:sequenceFlow id="Flow_1" sourceRef="StartEvent_1" targetRef="Task_1"/>
    <bpmn2:sequenceFlow id="Flow_2" sourceRef="Task_1" targetRef="Gateway_1"/>
    <bpmn2:sequenceFlow id="Flow_3" sourceRef="Gateway_1" targetRef="Task_2"/>
    <bpmn2:sequenceFlow id="Flow_4" sourceRef="Gateway_1" targetRef="Task_3"/>
    <bpmn2:sequenceFlow id="Flow_5" sourceRef="Task_2" targetRef="Gateway_2"/>
    <bpmn2:sequenceFlow id="Flow_6" sourceRef="Task_3" targetRef="Gateway_2"/>
    <bpmn2:sequenceFlow id="Flow_7" sourceRef="Gateway_2" targetRef="SubProcess_1"/>
    <bpmn2:sequenceFlow id="Flow_8" sourceRef="SubProcess_1" targetRef="EndEvent_1"/>
  </bpmn2:process>
</bpmn2:definitions>
"#;

pub(crate) const ORPHANED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="Process_1">
    <bpmn:startEvent id="StartEvent_1"/>
    <bpmn:task id="Task_1"/>
    <bpmn:endEvent id="EndEvent_1"/>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="StartEvent_1" targetRef="Task_1"/>
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Task_1" targetRef="EndEvent_1"/>
    <bpmn:sequenceFlow id="Flow_Broken" sourceRef="Task_1" targetRef="Task_Missing"/>
  </bpmn:process>
</bpmn:definitions>
"#;

pub(crate) const EMPTY_PROCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="Process_Empty"/>
</bpmn:definitions>
"#;

// Retry loop: Work -> Check -> (Work | Done)
pub(crate) const LOOP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="Process_Loop">
    <bpmn:startEvent id="Start"/>
    <bpmn:serviceTask id="Work" name="Work"/>
    <bpmn:exclusiveGateway id="Check" default="Flow_Retry"/>
    <bpmn:endEvent id="Done"/>
    <bpmn:task id="Island" name="Island"/>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="Start" targetRef="Work"/>
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Work" targetRef="Check"/>
    <bpmn:sequenceFlow id="Flow_Retry" sourceRef="Check" targetRef="Work"/>
    <bpmn:sequenceFlow id="Flow_Done" sourceRef="Check" targetRef="Done">
      <bpmn:conditionExpression>${ok}</bpmn:conditionExpression>
    </bpmn:sequenceFlow>
  </bpmn:process>
</bpmn:definitions>
"#;

pub(crate) const CONDITIONAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="Process_1">
    <bpmn:startEvent id="Start"/>
    <bpmn:exclusiveGateway id="Approved" name="Approved?" default="Flow_No"/>
    <bpmn:inclusiveGateway id="Notify"/>
    <bpmn:task id="Ship"/>
    <bpmn:task id="Reject"/>
    <bpmn:task id="Mail"/>
    <bpmn:task id="Sms"/>
    <bpmn:endEvent id="End"/>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="Start" targetRef="Approved"/>
    <bpmn:sequenceFlow id="Flow_Yes" sourceRef="Approved" targetRef="Ship">
      <bpmn:conditionExpression xsi:type="bpmn:tFormalExpression"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">${approved}</bpmn:conditionExpression>
    </bpmn:sequenceFlow>
    <bpmn:sequenceFlow id="Flow_No" sourceRef="Approved" targetRef="Reject"/>
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Ship" targetRef="Notify"/>
    <bpmn:sequenceFlow id="Flow_3" sourceRef="Notify" targetRef="Mail"/>
    <bpmn:sequenceFlow id="Flow_4" sourceRef="Notify" targetRef="Sms"/>
    <bpmn:sequenceFlow id="Flow_5" sourceRef="Mail" targetRef="End"/>
    <bpmn:sequenceFlow id="Flow_6" sourceRef="Sms" targetRef="End"/>
    <bpmn:sequenceFlow id="Flow_7" sourceRef="Reject" targetRef="End"/>
  </bpmn:process>
</bpmn:definitions>
"#;

pub(crate) const ERROR_HANDLING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="Process_1">
    <bpmn:startEvent id="Start"/>
    <bpmn:userTask id="Review" name="Review"/>
    <bpmn:boundaryEvent id="Review_Failed" attachedToRef="Review">
      <bpmn:errorEventDefinition/>
    </bpmn:boundaryEvent>
    <bpmn:task id="Escalate"/>
    <bpmn:endEvent id="End"/>
    <bpmn:endEvent id="End_Failed"/>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="Start" targetRef="Review"/>
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Review" targetRef="End"/>
    <bpmn:sequenceFlow id="Flow_3" sourceRef="Review_Failed" targetRef="Escalate"/>
    <bpmn:sequenceFlow id="Flow_4" sourceRef="Escalate" targetRef="End_Failed"/>
  </bpmn:process>
</bpmn:definitions>
"#;

pub(crate) const SUB_PROCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="Process_1">
    <bpmn:startEvent id="Start"/>
    <bpmn:subProcess id="Sub">
      <bpmn:startEvent id="Sub_Start"/>
      <bpmn:task id="Sub_Task"/>
      <bpmn:endEvent id="Sub_End"/>
      <bpmn:sequenceFlow id="Sub_Flow_1" sourceRef="Sub_Start" targetRef="Sub_Task"/>
      <bpmn:sequenceFlow id="Sub_Flow_2" sourceRef="Sub_Task" targetRef="Sub_End"/>
    </bpmn:subProcess>
    <bpmn:endEvent id="End"/>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="Start" targetRef="Sub"/>
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Sub" targetRef="End"/>
  </bpmn:process>
</bpmn:definitions>
"#;

pub(crate) const COLLABORATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:collaboration id="Collaboration_1">
    <bpmn:participant id="Customer" processRef="Process_Customer"/>
    <bpmn:participant id="Shop" processRef="Process_Shop"/>
    <bpmn:messageFlow id="Order" sourceRef="Send_Order" targetRef="Shop_Start"/>
  </bpmn:collaboration>
  <bpmn:process id="Process_Customer">
    <bpmn:laneSet id="LaneSet_1">
      <bpmn:lane id="Lane_Buyer" name="Buyer">
        <bpmn:childLaneSet id="LaneSet_2">
          <bpmn:lane id="Lane_Private"/>
          <bpmn:lane id="Lane_Business"/>
        </bpmn:childLaneSet>
      </bpmn:lane>
    </bpmn:laneSet>
    <bpmn:dataObject id="Cart"/>
    <bpmn:startEvent id="Customer_Start"/>
    <bpmn:sendTask id="Send_Order"/>
    <bpmn:endEvent id="Customer_End"/>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="Customer_Start" targetRef="Send_Order"/>
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Send_Order" targetRef="Customer_End"/>
  </bpmn:process>
  <bpmn:process id="Process_Shop">
    <bpmn:startEvent id="Shop_Start">
      <bpmn:messageEventDefinition/>
    </bpmn:startEvent>
    <bpmn:receiveTask id="Receive"/>
    <bpmn:endEvent id="Shop_End"/>
    <bpmn:sequenceFlow id="Flow_3" sourceRef="Shop_Start" targetRef="Receive"/>
    <bpmn:sequenceFlow id="Flow_4" sourceRef="Receive" targetRef="Shop_End"/>
  </bpmn:process>
</bpmn:definitions>
"#;

pub(crate) const WITH_DIAGRAM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL"
             xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
             xmlns:dc="http://www.omg.org/spec/DD/20100524/DC"
             xmlns:camunda="http://camunda.org/schema/1.0/bpmn">
  <process id="Process_1" isExecutable="false">
    <startEvent id="Start"/>
    <userTask id="Approve" camunda:assignee="demo">
      <incoming>Flow_1</incoming>
      <outgoing>Flow_2</outgoing>
    </userTask>
    <endEvent id="End"/>
    <sequenceFlow id="Flow_1" sourceRef="Start" targetRef="Approve"/>
    <sequenceFlow id="Flow_2" sourceRef="Approve" targetRef="End"/>
  </process>
  <bpmndi:BPMNDiagram id="Diagram_1">
    <bpmndi:BPMNPlane id="Plane_1" bpmnElement="Process_1">
      <bpmndi:BPMNShape id="Start_di" bpmnElement="Start">
        <dc:Bounds x="100" y="100" width="36" height="36"/>
      </bpmndi:BPMNShape>
    </bpmndi:BPMNPlane>
  </bpmndi:BPMNDiagram>
</definitions>
"#;
