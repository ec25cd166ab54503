// SPDX-License-Identifier: MPL-2.0
//! UI modules: the preview panel component and its shared styling.

pub mod design_tokens;
pub mod preview_panel;
pub mod theme;
