//! Headless walkthrough of the UI core.
//!
//! Stands in for the render-loop collaborator: feeds scripted input
//! snapshots frame by frame and prints what the core did instead of
//! replaying the command list against a real backend.

use mosaic_ui::{
    ButtonConfig, ButtonGroup, InputState, MouseButton, Rect, RegionConfig, UiAction, UiContext,
};

fn print_state(ui: &UiContext, label: &str) {
    let tree = ui.regions().tree();
    let focused: Vec<&str> = tree
        .iter_dfs()
        .filter_map(|id| tree.get(id))
        .filter(|node| node.focused)
        .map(|node| node.name.as_str())
        .collect();

    println!("--- {label}");
    println!("  focused regions: {focused:?}");
    for name in ["Group1", "Group2", "Group3"] {
        if let Some(group) = ui.buttons().group(name) {
            println!("  {name} highlight: {:?}", group.highlighted());
        }
    }
    for message in ui.messages().messages() {
        println!("  log: {message}");
    }
}

fn main() {
    let mut ui = UiContext::new(RegionConfig::default());

    ui.add_group(ButtonGroup::new(
        "Group1",
        vec![
            ButtonConfig::new("Button1", 0.3).with_action(UiAction::deferred(
                UiAction::PostMessage("Callback: Group1-Button1".to_string()),
            )),
            ButtonConfig::new("Button2", 0.5).with_action(UiAction::deferred(
                UiAction::PostMessage("Callback: Group1-Button2".to_string()),
            )),
            ButtonConfig::new("Button3", 0.2)
                .with_action(UiAction::deferred(UiAction::PostMessage(
                    "Callback: Group1-Button3 - changing other groups".to_string(),
                )))
                .with_action(UiAction::SetHighlight {
                    group: "Group2".to_string(),
                    button: "B".to_string(),
                })
                .with_action(UiAction::ClickButton {
                    group: "Group3".to_string(),
                    button: "X".to_string(),
                }),
        ],
    ));
    ui.add_group(ButtonGroup::new(
        "Group2",
        vec![
            ButtonConfig::new("A", 0.4),
            ButtonConfig::new("B", 0.3),
            ButtonConfig::new("C", 0.3),
        ],
    ));
    ui.add_group(ButtonGroup::new(
        "Group3",
        vec![ButtonConfig::new("X", 0.6), ButtonConfig::new("Y", 0.4)],
    ));

    ui.set_highlight("Group1", "Button1");
    ui.set_highlight("Group2", "A");
    ui.set_highlight("Group3", "Y");

    let bounds = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let mut input = InputState::new();

    // Frame 1: idle.
    let commands = ui.frame(bounds, &input);
    println!("frame 1 emitted {} commands", commands.len());
    print_state(&ui, "after idle frame");

    // Frame 2: click a leaf in the region panel.
    input.begin_frame();
    input.set_mouse_pos(300.0, 120.0);
    input.mouse_button_down(MouseButton::Left);
    let _ = ui.frame(bounds, &input);
    input.mouse_button_up(MouseButton::Left);
    print_state(&ui, "after clicking region A1");

    // Frame 3: programmatic cross-group click, drained by the frame.
    input.begin_frame();
    ui.click_button("Group1", "Button3");
    let _ = ui.frame(bounds, &input);
    print_state(&ui, "after programmatic Group1-Button3 click");

    // Reload drops all region focus but leaves buttons and log alone.
    ui.reload_config();
    input.begin_frame();
    let _ = ui.frame(bounds, &input);
    print_state(&ui, "after reload");
}
