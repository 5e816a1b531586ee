use crate::runtime::msg::{Action, ActionSettings, Event, Msg};
use crate::runtime::{Effect, Model, Runtime, RuntimeAction, RuntimeEvent};
use crate::unit_tests::TestEnv;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum CounterField {
    Unloads,
}

/// Counts `Unload` actions. Each one echoes the action back as an effect, followed by an event.
/// A settings reset panics while the model is locked.
#[derive(Clone, Default)]
struct Counter {
    unloads: u32,
}

impl Model<TestEnv> for Counter {
    type Field = CounterField;

    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<CounterField>) {
        match msg {
            Msg::Action(Action::Unload) => {
                self.unloads += 1;
                (
                    vec![
                        Effect::from(Msg::Action(Action::Unload)),
                        Effect::from(Msg::Event(Event::SettingsReset)),
                    ],
                    vec![CounterField::Unloads],
                )
            }
            Msg::Action(Action::Settings(ActionSettings::Reset)) => {
                panic!("counter cannot be reset")
            }
            _ => (vec![], vec![]),
        }
    }
    fn update_field(
        &mut self,
        msg: &Msg,
        _field: &CounterField,
    ) -> (Vec<Effect>, Vec<CounterField>) {
        self.update(msg)
    }
}

fn action(action: Action) -> RuntimeAction<TestEnv, Counter> {
    RuntimeAction {
        field: None,
        action,
    }
}

#[test]
fn effect_resolved_with_action_is_ignored() {
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(Counter::default(), vec![], 1000);
    runtime.dispatch(action(Action::Unload));
    assert_eq!(
        runtime.model().unwrap().unloads,
        1,
        "The echoed action does not reach the model"
    );
    let events = TestEnv::events(&mut rx);
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        RuntimeEvent::NewState(fields) if *fields == vec![CounterField::Unloads]
    ));
    assert!(
        matches!(&events[1], RuntimeEvent::CoreEvent(Event::SettingsReset)),
        "Effects after the ignored action still run"
    );
}

#[test]
fn poisoned_model_drops_actions() {
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(Counter::default(), vec![], 1000);
    let reset = panic::catch_unwind(AssertUnwindSafe(|| {
        runtime.dispatch(action(Action::Settings(ActionSettings::Reset)))
    }));
    assert!(reset.is_err(), "The update panicked with the model locked");
    runtime.dispatch(action(Action::Unload));
    assert!(runtime.model().is_err(), "Model stays poisoned");
    assert!(
        TestEnv::events(&mut rx).is_empty(),
        "Nothing is emitted for the dropped action"
    );
}
