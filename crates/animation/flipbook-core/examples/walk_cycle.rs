use flipbook_core::{
    parse_stored_controller_json, AnimationHost, Config, Controller, FrameRef, StateId,
};

const DOC: &str = r#"{
  "name": "slime",
  "parameters": [{ "name": "hop", "kind": "trigger" }],
  "clips": [
    { "name": "idle", "frames": ["slime/idle_0", "slime/idle_1"], "frameRate": 4 },
    {
      "name": "hop",
      "frames": ["slime/hop_0", "slime/hop_1", "slime/hop_2"],
      "frameRate": 12,
      "loop": false,
      "events": [{ "frame": 2, "actions": ["land"] }]
    }
  ],
  "states": [
    { "name": "idle", "clip": "idle", "transitions": [{ "parameter": "hop", "target": "hop" }] },
    { "name": "hop", "clip": "hop", "transitions": [{ "parameter": "hop", "target": "hop" }] }
  ]
}"#;

struct Printer;

impl AnimationHost for Printer {
    type Error = std::convert::Infallible;

    fn set_current_frame(&mut self, frame: &FrameRef) {
        println!("  show {}", frame.as_str());
    }

    fn invoke_action(&mut self, action: &str) -> Result<(), Self::Error> {
        println!("  action {action}");
        Ok(())
    }

    fn state_changed(&mut self, from: Option<StateId>, to: StateId) {
        println!("state {from:?} -> {to:?}");
    }
}

fn main() -> anyhow::Result<()> {
    let graph = parse_stored_controller_json(DOC)?;
    let mut ctl = Controller::new(graph, Config::default())?;
    let mut host = Printer;

    let dt = 1.0 / 30.0;
    for tick in 0..30 {
        if tick == 10 {
            ctl.set_trigger("hop");
        }
        ctl.update_with(dt, &mut host)?;
    }
    Ok(())
}
