//! End-to-end tests for machines built from declarative documents.

use statebound::{config, model_binding, share, ConfigError, FsmBuilder, FsmError, Model};

const FSM_DOC: &str = "
    start_state: s1
    states:
        - s1
        - name: s2
          on_enter: on_callback
    transitions:
        - action: a1
          from_state: s1
          to_state: s2
        - action: a2
          from_state: s1
          to_state: s1
";

#[derive(Default)]
struct DummyModel {
    state: Option<String>,
    cb_count: u32,
}

impl DummyModel {
    fn on_callback(&mut self) {
        self.cb_count += 1;
    }
}

model_binding! {
    DummyModel {
        state: state,
        callbacks: [on_callback],
    }
}

#[test]
fn yaml_machine_binds_model_and_fires_callbacks() {
    let model = share(DummyModel::default());
    let mut fsm = FsmBuilder::new()
        .model(model.clone())
        .document(config::from_yaml(FSM_DOC).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();

    assert_eq!(model.borrow().current_state(), Some("s1"));
    assert_eq!(model.borrow().cb_count, 0);

    fsm.perform("a1").unwrap();
    assert_eq!(model.borrow().current_state(), Some("s2"));
    assert_eq!(model.borrow().cb_count, 1);
}

#[test]
fn json_machine_is_equivalent() {
    let doc = config::from_json(
        r#"{
            "start_state": "s1",
            "states": [
                "s1",
                { "name": "s2", "on_enter": "on_callback" }
            ],
            "transitions": [
                { "action": "a1", "from_state": "s1", "to_state": "s2" }
            ]
        }"#,
    )
    .unwrap();

    let model = share(DummyModel::default());
    let mut fsm = FsmBuilder::new()
        .model(model.clone())
        .document(doc)
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();

    fsm.perform("a1").unwrap();
    assert_eq!(model.borrow().cb_count, 1);
}

#[test]
fn self_loop_action_keeps_the_state() {
    let mut fsm = FsmBuilder::new()
        .document(config::from_yaml(FSM_DOC).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();

    assert!(fsm.is_state("s1"));
    fsm.perform("a2").unwrap();
    assert!(fsm.is_state("s1"));
}

#[test]
fn standalone_machine_runs_without_an_external_model() {
    let mut fsm = FsmBuilder::new()
        .document(config::from_yaml(FSM_DOC).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();

    assert_eq!(fsm.actions(), ["a1", "a2"]);
    fsm.perform("a1").unwrap();
    assert!(fsm.is_state("s2"));
}

#[test]
fn declared_actions_round_trip_through_the_machine() {
    let fsm = FsmBuilder::new()
        .document(config::from_yaml(FSM_DOC).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();

    assert_eq!(fsm.actions_for("s1"), ["a1", "a2"]);
    assert_eq!(fsm.actions_for("s2"), Vec::<String>::new());
}

#[test]
fn machine_loads_from_a_document_file() {
    let path = std::env::temp_dir().join("statebound_document_test.yaml");
    std::fs::write(&path, FSM_DOC).unwrap();

    let fsm = FsmBuilder::new()
        .document(config::from_yaml_file(&path).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();
    assert!(fsm.is_state("s1"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn machine_loads_from_a_json_file() {
    let path = std::env::temp_dir().join("statebound_document_test.json");
    std::fs::write(
        &path,
        r#"{
            "start_state": "s1",
            "states": ["s1"],
            "transitions": [
                { "action": "a1", "from_state": "s1", "to_state": "s1" }
            ]
        }"#,
    )
    .unwrap();

    let fsm = FsmBuilder::new()
        .document(config::from_json_file(&path).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();
    assert_eq!(fsm.actions(), ["a1"]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn empty_state_list_is_rejected() {
    let doc = config::from_json(
        r#"{ "start_state": "s1", "states": [], "transitions": [
            { "action": "a1", "from_state": "s1", "to_state": "s1" }
        ] }"#,
    )
    .unwrap();
    let err = FsmBuilder::new().document(doc).unwrap_err();
    assert!(matches!(err, FsmError::InvalidData(_)));
}

#[test]
fn empty_transition_list_is_rejected() {
    let doc = config::from_json(
        r#"{ "start_state": "s1", "states": ["s1"], "transitions": [] }"#,
    )
    .unwrap();
    let err = FsmBuilder::new().document(doc).unwrap_err();
    assert!(matches!(err, FsmError::InvalidData(_)));
}

#[test]
fn no_data_at_all_is_its_own_error() {
    assert!(matches!(config::from_yaml(""), Err(ConfigError::NoData)));
    assert!(matches!(
        config::from_value(serde_json::Value::Null),
        Err(ConfigError::NoData)
    ));
}

#[test]
fn structured_data_extends_a_built_machine() {
    let mut fsm = FsmBuilder::new()
        .document(config::from_yaml(FSM_DOC).unwrap())
        .unwrap()
        .feedback(false)
        .build()
        .unwrap();

    fsm.add_transition(serde_json::json!({
        "action": "a3",
        "from_state": "s2",
        "to_state": "s1",
    }))
    .unwrap();
    assert_eq!(fsm.actions_for("s2"), ["a3"]);

    let err = fsm
        .add_transition(serde_json::json!({ "action": "a4" }))
        .unwrap_err();
    assert!(matches!(err, FsmError::InvalidData(_)));
}
