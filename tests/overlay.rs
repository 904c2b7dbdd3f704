//! End-to-end plugin tests against the real cairo raster surface.

use anyhow::Result;
use pagemarker::config::Config;
use pagemarker::host::{HostSdk, PageContent, Plugin, SidebarOptions};
use pagemarker::input::{Artifact, Key, KeyPress, PointerButton, Tool};
use pagemarker::ui::ToolbarEvent;
use pagemarker::util::Rect;

#[derive(Default)]
struct NullHost;

impl HostSdk for NullHost {
    fn register_page(&mut self, _path: &str, _content: PageContent) -> Result<()> {
        Ok(())
    }

    fn register_sidebar_entry(
        &mut self,
        _label: &str,
        _path: &str,
        _options: SidebarOptions,
    ) -> Result<()> {
        Ok(())
    }
}

fn active_plugin() -> Plugin {
    let mut host = NullHost;
    let mut plugin = Plugin::init(&mut host, &Config::default(), 400, 300).unwrap();
    assert!(plugin.on_key_press(&KeyPress::plain(Key::F(12))));
    plugin
}

fn drag(plugin: &mut Plugin, from: (i32, i32), to: (i32, i32)) {
    plugin.overlay.on_pointer_press(PointerButton::Left, from.0, from.1);
    plugin.overlay.on_pointer_motion(to.0, to.1);
    plugin.overlay.on_pointer_release(PointerButton::Left, to.0, to.1);
}

#[test]
fn pen_session_commits_a_visible_snapshot() {
    let mut plugin = active_plugin();

    plugin.overlay.on_pointer_press(PointerButton::Left, 20, 20);
    plugin.overlay.on_pointer_motion(120, 80);
    plugin.overlay.on_pointer_motion(200, 150);
    plugin
        .overlay
        .on_pointer_release(PointerButton::Left, 200, 150);

    let [Artifact::Image(image)] = plugin.overlay.artifacts() else {
        panic!("expected exactly one image artifact");
    };
    assert_eq!((image.image.width, image.image.height), (400, 300));
    assert!(!image.image.is_blank(), "the stroke must leave pixels");
}

#[test]
fn commit_clears_the_preview_for_the_next_stroke() {
    let mut plugin = active_plugin();

    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Circle), &mut plugin.overlay);
    drag(&mut plugin, (200, 150), (260, 150));

    // A degenerate follow-up stroke snapshots whatever the surface holds;
    // blank proves the circle preview was cleared by the first commit.
    plugin.overlay.on_pointer_press(PointerButton::Left, 5, 5);
    plugin.overlay.on_pointer_release(PointerButton::Left, 5, 5);

    let artifacts = plugin.overlay.artifacts();
    assert_eq!(artifacts.len(), 2);
    let Artifact::Image(first) = &artifacts[0] else {
        panic!("expected an image");
    };
    let Artifact::Image(second) = &artifacts[1] else {
        panic!("expected an image");
    };
    assert!(!first.image.is_blank());
    assert!(second.image.is_blank());
}

#[test]
fn one_artifact_per_tool_in_a_mixed_session() {
    let mut plugin = active_plugin();

    for tool in [Tool::Pen, Tool::Circle, Tool::Rect, Tool::Blur] {
        plugin
            .toolbar
            .apply(ToolbarEvent::SelectTool(tool), &mut plugin.overlay);
        drag(&mut plugin, (50, 50), (150, 120));
    }

    let kinds: Vec<&str> = plugin
        .overlay
        .artifacts()
        .iter()
        .map(Artifact::kind)
        .collect();
    assert_eq!(kinds, ["image", "image", "image", "redaction"]);
}

#[test]
fn redaction_records_the_normalized_region() {
    let mut plugin = active_plugin();

    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Blur), &mut plugin.overlay);
    drag(&mut plugin, (150, 120), (50, 40));

    let [Artifact::Redaction(redaction)] = plugin.overlay.artifacts() else {
        panic!("expected exactly one redaction");
    };
    assert_eq!(redaction.region, Rect::new(50, 40, 100, 80));
    assert_eq!(redaction.blur_radius, 5.0);
}

#[test]
fn clear_all_empties_the_page() {
    let mut plugin = active_plugin();

    drag(&mut plugin, (10, 10), (100, 100));
    plugin
        .toolbar
        .apply(ToolbarEvent::SelectTool(Tool::Blur), &mut plugin.overlay);
    drag(&mut plugin, (20, 20), (60, 60));
    assert_eq!(plugin.overlay.artifacts().len(), 2);

    plugin
        .toolbar
        .apply(ToolbarEvent::ClearAll, &mut plugin.overlay);
    assert!(plugin.overlay.artifacts().is_empty());

    // Second clear is a harmless no-op
    plugin
        .toolbar
        .apply(ToolbarEvent::ClearAll, &mut plugin.overlay);
    assert!(plugin.overlay.artifacts().is_empty());
}

#[test]
fn resize_applies_to_subsequent_commits() {
    let mut plugin = active_plugin();

    plugin.overlay.on_resize(640, 480);
    assert_eq!(plugin.overlay.surface_size(), (640, 480));

    drag(&mut plugin, (30, 30), (200, 200));
    let [Artifact::Image(image)] = plugin.overlay.artifacts() else {
        panic!("expected exactly one image artifact");
    };
    assert_eq!((image.image.width, image.image.height), (640, 480));
}
