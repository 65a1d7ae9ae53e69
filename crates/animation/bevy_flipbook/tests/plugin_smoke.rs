use bevy::prelude::*;
use bevy_flipbook::{
    AnimatorStateChanged, FlipbookAnimator, FlipbookPlugin, FrameActionEvent, FrameAtlas,
};
use flipbook_core::{Clip, Config, Controller, Parameter, StateGraph, StateId, Transition};

fn mk_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(FlipbookPlugin);
    app
}

/// Slow clips so wall-clock deltas between `app.update()` calls never step a frame.
fn mk_controller() -> Controller {
    let mut g = StateGraph::new();
    let idle = g.add_clip(Clip::new("idle", ["idle_0", "idle_1"], 0.5));
    let jump = g.add_clip(
        Clip::new("jump", ["jump_0", "jump_1"], 0.5)
            .with_loop(false)
            .with_event(0, ["leap"]),
    );
    let go = g.add_parameter(Parameter::trigger("jump"));
    let s_idle = g.add_state("idle", idle);
    let s_jump = g.add_state("jump", jump);
    g.add_transition(s_idle, Transition::on_trigger(go, s_jump))
        .unwrap();
    Controller::new(g, Config::default()).unwrap()
}

fn image(id: u128) -> Handle<Image> {
    Handle::weak_from_u128(id)
}

fn drain<E: Event + Clone>(app: &App) -> Vec<E> {
    let events = app.world().resource::<Events<E>>();
    let mut reader = events.get_reader();
    reader.read(events).cloned().collect()
}

#[test]
fn plugin_inserts_frame_atlas() {
    let app = mk_app();
    // it should insert FrameAtlas when the plugin is added
    assert!(app.world().get_resource::<FrameAtlas>().is_some());
}

/// it should apply the default state's first frame on the first update
#[test]
fn first_update_applies_default_frame() {
    let mut app = mk_app();
    app.world_mut()
        .resource_mut::<FrameAtlas>()
        .insert("idle_0", image(1));
    let e = app
        .world_mut()
        .spawn((FlipbookAnimator::new(mk_controller()), Handle::<Image>::default()))
        .id();

    app.update();

    assert_eq!(app.world().get::<Handle<Image>>(e), Some(&image(1)));
    let changes = drain::<AnimatorStateChanged>(&app);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].entity, e);
    assert_eq!(changes[0].from, None);
}

/// it should switch sprites and emit frame actions after a trigger is set
#[test]
fn trigger_switches_sprite_and_emits_action() {
    let mut app = mk_app();
    {
        let mut atlas = app.world_mut().resource_mut::<FrameAtlas>();
        atlas.insert("idle_0", image(1));
        atlas.insert("jump_0", image(2));
    }
    let e = app
        .world_mut()
        .spawn((FlipbookAnimator::new(mk_controller()), Handle::<Image>::default()))
        .id();
    app.update();

    app.world_mut()
        .get_mut::<FlipbookAnimator>(e)
        .unwrap()
        .0
        .set_trigger("jump");
    app.update();

    assert_eq!(app.world().get::<Handle<Image>>(e), Some(&image(2)));
    let actions = drain::<FrameActionEvent>(&app);
    assert_eq!(
        actions,
        vec![FrameActionEvent {
            entity: e,
            state: StateId(1),
            frame_index: 0,
            action: "leap".into()
        }]
    );
    let last = drain::<AnimatorStateChanged>(&app)
        .last()
        .cloned()
        .expect("state change");
    assert_eq!(last.from.map(|s| s.0), Some(0));
    assert_eq!(last.to.0, 1);
}

/// it should leave the sprite alone when a frame has no atlas entry
#[test]
fn missing_atlas_entry_keeps_current_image() {
    let mut app = mk_app();
    let e = app
        .world_mut()
        .spawn((FlipbookAnimator::new(mk_controller()), image(7)))
        .id();
    app.update();
    assert_eq!(app.world().get::<Handle<Image>>(e), Some(&image(7)));
}

/// it should build an animator from a shared stored-controller fixture
#[test]
fn animator_from_fixture_json() {
    let json = flipbook_test_fixtures::controllers::json("hero").expect("hero fixture");
    let animator = FlipbookAnimator::from_json(&json, Config::default()).expect("parse");
    assert_eq!(animator.0.current_state_name(), "idle");
}

/// it should tag each frame action with the state and frame that produced it
#[test]
fn actions_from_consecutive_states_carry_their_origin() {
    let mut g = StateGraph::new();
    let idle = g.add_clip(Clip::new("idle", ["idle_0"], 0.5).with_event(0, ["settle"]));
    let jump = g.add_clip(Clip::new("jump", ["jump_0"], 0.5).with_event(0, ["leap"]));
    let go = g.add_parameter(Parameter::trigger("jump"));
    let s_idle = g.add_state("idle", idle);
    let s_jump = g.add_state("jump", jump);
    g.add_transition(s_idle, Transition::on_trigger(go, s_jump))
        .unwrap();
    let mut ctl = Controller::new(g, Config::default()).unwrap();
    // both entries are pending when the first tick runs
    ctl.set_trigger("jump");

    let mut app = mk_app();
    let e = app
        .world_mut()
        .spawn((FlipbookAnimator::new(ctl), Handle::<Image>::default()))
        .id();
    app.update();

    let origins: Vec<(StateId, usize, String)> = drain::<FrameActionEvent>(&app)
        .into_iter()
        .filter(|a| a.entity == e)
        .map(|a| (a.state, a.frame_index, a.action))
        .collect();
    assert_eq!(
        origins,
        vec![(s_idle, 0, "settle".to_string()), (s_jump, 0, "leap".to_string())]
    );
}
