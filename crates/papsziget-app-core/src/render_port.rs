// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port for presentation layers to hear about state changes without the
//! store depending on any UI toolkit.

/// Re-render hook; implementations are expected to be cheap/best-effort
/// and typically just schedule a repaint.
pub trait RenderPort {
    /// The store's state changed; read it again and redraw.
    fn request_render(&self);
}
