//! Scripted session: a breadcrumb and an animated collapser on one stage.
//!
//! Run with `cargo run -p panekit --example walkthrough`; detailed logs go to
//! `walkthrough.log`.

use std::fs::File;

use panekit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("walkthrough.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new();
    let sentinel = doc.insert(NodeSpec::new("DIV").id("UserContent"));
    let stage_el = doc.create_child(sentinel, NodeSpec::new("ARTICLE"))?;
    let group = doc.create_child(stage_el, NodeSpec::new("SECTION"))?;
    let shape = doc.create_child(group, NodeSpec::new("CANVAS"))?;
    let trail_button = doc.insert(NodeSpec::new("BUTTON"));
    let header = doc.insert(NodeSpec::new("H3"));
    let body = doc.insert(
        NodeSpec::new("DIV")
            .overflow(Overflow::Auto)
            .layout_height(180),
    );

    let mut stage = Stage::new(doc);
    let crumb = Breadcrumb::new(
        stage.document(),
        trail_button,
        stage.selection(),
        BreadcrumbConfig::default(),
    )?;
    let panel = Collapser::new(
        stage.document(),
        header,
        body,
        CollapserConfig::from_json(r#"{ "isAnimated": true }"#)?,
    )?
    .on_label_click(|bypass| println!("  label clicked (bypass: {bypass})"));

    let crumb_id = stage.mount(crumb)?;
    let panel_id = stage.mount(panel)?;

    // Host selects a shape; the breadcrumb picks it up on the next frame.
    stage.selection().set(Some(shape));
    stage.flush()?;
    print_trail(&stage, crumb_id);

    // User jumps back to the group.
    let group_uuid = stage.document().get(group)?.uuid;
    stage.dispatch(&Event::Action {
        target: trail_button,
        value: group_uuid.to_string(),
    })?;
    stage.flush()?;
    print_trail(&stage, crumb_id);

    // Collapse with animation, then let the "browser" finish the transition.
    stage.dispatch(&Event::Click { target: header })?;
    stage.flush()?;
    print_panel(&stage, panel_id, body);
    stage.dispatch(&Event::TransitionEnd { target: body })?;
    print_panel(&stage, panel_id, body);

    // Expand again without animation, just this once.
    if let Some((panel, doc)) = stage.component_mut::<Collapser>(panel_id) {
        panel.set_bypass_animation(true);
        panel.toggle(doc)?;
    }
    stage.flush()?;
    print_panel(&stage, panel_id, body);

    Ok(())
}

fn print_trail(stage: &Stage, id: ComponentId) {
    if let Some(crumb) = stage.component::<Breadcrumb>(id) {
        println!("trail: {}", crumb.labels().join(" > "));
    }
}

fn print_panel(stage: &Stage, id: ComponentId, content: NodeKey) {
    let Some(panel) = stage.component::<Collapser>(id) else {
        return;
    };
    let height = stage
        .document()
        .height(content)
        .ok()
        .flatten()
        .unwrap_or_default();
    println!(
        "panel: {:?} height={} animated={}",
        panel.state(),
        height,
        panel.is_animated()
    );
}
