// Application layer: host bindings wiring the core to each deployment shape.

pub mod addin;
pub mod panel;

pub use addin::AddinHandlers;
pub use panel::{PanelContext, PanelController, PanelView};
