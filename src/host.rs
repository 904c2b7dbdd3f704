//! Host SDK contract and plugin initialization.
//!
//! The overlay is a plugin: the host application owns the page, the real
//! input devices, and the compositing. It hands the plugin a registration
//! capability at startup and forwards events afterwards. Everything the
//! plugin needs from the host is behind the small traits here, so any host
//! (or a test double) can embed it.

use crate::config::{Config, KeyBinding};
use crate::draw::{DrawSurface, RasterSurface};
use crate::input::{KeyPress, OverlayState, ToolConfig};
use crate::ui::{self, Toolbar};
use anyhow::{Context, Result};
use log::{debug, info};
use url::Url;

/// Path the instructions page is registered under.
pub const PLUGIN_PATH: &str = "/pagemarker";
/// Sidebar entry label.
pub const SIDEBAR_LABEL: &str = "Screen Drawing";
/// Sidebar entry icon identifier, in the host's icon-font vocabulary.
pub const SIDEBAR_ICON: &str = "fas fa-pen";

/// Static page content handed to the host for rendering.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub title: String,
    /// Paragraphs of instructional copy
    pub body: Vec<String>,
    /// External links, to be routed through [`open_external`] on click
    pub links: Vec<PageLink>,
}

/// An external link shown on the instructions page.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub label: String,
    pub target: Url,
}

/// Options for a sidebar registration.
#[derive(Debug, Clone, Default)]
pub struct SidebarOptions {
    pub icon: Option<String>,
}

/// Registration hooks the host supplies to the plugin.
///
/// The plugin calls each hook exactly once, during [`Plugin::init`].
pub trait HostSdk {
    fn register_page(&mut self, path: &str, content: PageContent) -> Result<()>;
    fn register_sidebar_entry(
        &mut self,
        label: &str,
        path: &str,
        options: SidebarOptions,
    ) -> Result<()>;
}

/// Optional desktop-bridge capability for opening external links.
///
/// Detected at call time, never required; see [`open_external`].
pub trait DesktopBridge {
    fn open_in_browser(&self, url: &Url) -> Result<()>;
}

/// Opens an external link through the desktop bridge when one is present,
/// falling back to the system URL handler otherwise.
pub fn open_external(bridge: Option<&dyn DesktopBridge>, url: &Url) -> Result<()> {
    match bridge {
        Some(bridge) => {
            debug!("Opening {url} via the desktop bridge");
            bridge.open_in_browser(url)
        }
        None => {
            debug!("No desktop bridge present, opening {url} with the system handler");
            open::that(url.as_str()).with_context(|| format!("Failed to open {url}"))
        }
    }
}

/// The assembled plugin: overlay state machine plus toolbar model, wired to
/// the host through the event methods below.
pub struct Plugin {
    /// The drawing core; the host forwards pointer and resize events to it
    pub overlay: OverlayState,
    /// Floating toolbar model; the host forwards toolbar control events to it
    pub toolbar: Toolbar,
    toggle_binding: KeyBinding,
}

impl Plugin {
    /// Initializes the plugin against a host, with a cairo raster preview
    /// surface sized to the current viewport.
    pub fn init(
        host: &mut dyn HostSdk,
        config: &Config,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<Self> {
        let surface = RasterSurface::new(viewport_width, viewport_height)
            .context("Failed to create the preview surface")?;
        Self::init_with_surface(host, config, Box::new(surface))
    }

    /// Initializes the plugin with a caller-supplied preview surface.
    ///
    /// Registers the instructions page and the sidebar entry, each exactly
    /// once. The overlay starts inactive; the host activates it by
    /// forwarding the toggle hotkey.
    pub fn init_with_surface(
        host: &mut dyn HostSdk,
        config: &Config,
        surface: Box<dyn DrawSurface>,
    ) -> Result<Self> {
        let tool_config = ToolConfig::new(
            config.drawing.default_tool,
            config.drawing.default_color.to_color(),
            config.drawing.default_size,
        );
        let overlay = OverlayState::new(surface, tool_config, config.ui.blur_radius);
        let toolbar = Toolbar::new(config);

        host.register_page(PLUGIN_PATH, ui::instructions_page(config))
            .context("Failed to register the plugin page")?;
        host.register_sidebar_entry(
            SIDEBAR_LABEL,
            PLUGIN_PATH,
            SidebarOptions {
                icon: Some(SIDEBAR_ICON.to_string()),
            },
        )
        .context("Failed to register the sidebar entry")?;

        info!("pagemarker registered at {PLUGIN_PATH}");
        Ok(Self {
            overlay,
            toolbar,
            toggle_binding: config.toggle_binding(),
        })
    }

    /// Handles a global key press.
    ///
    /// Returns true when the key matched the toggle binding and was
    /// consumed; the host must then suppress the key's default action.
    pub fn on_key_press(&mut self, press: &KeyPress) -> bool {
        if self.toggle_binding.matches(press) {
            self.overlay.toggle_mode();
            true
        } else {
            false
        }
    }

    /// The key press that toggles the overlay, for hosts that need to
    /// pre-register the capture.
    pub fn toggle_binding(&self) -> &KeyBinding {
        &self.toggle_binding
    }
}
