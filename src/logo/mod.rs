//! Site logo with a hover sweep.
//!
//! The mark is an embedded SVG masked by a wide gradient. Hovering slides
//! the mask from 0% to 100% over one second, which reads as a shine moving
//! across the logo. State is an explicit two-state machine driven by
//! pointer events; the host owns the current state and re-renders on change.

use serde::Serialize;

use crate::config::LogoConfig;
use crate::embed::logo::{CssVars, LOGO_CSS, LOGO_SVG, SvgVars};

/// CSS class carried by the wrapper and targeted by the stylesheet.
pub const LOGO_CLASS: &str = "docthemer-logo";

const TRANSITION: &str = "1s ease";

/// Pointer input the logo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Move,
    Down,
    Up,
}

/// Visual state of the logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoVisualState {
    #[default]
    Idle,
    Hovered,
}

impl LogoVisualState {
    /// Next state after `event`. Only enter/leave change anything.
    pub const fn on(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => Self::Hovered,
            PointerEvent::Leave => Self::Idle,
            PointerEvent::Move | PointerEvent::Down | PointerEvent::Up => self,
        }
    }

    /// Fold a sequence of events starting from `self`.
    pub fn replay(self, events: impl IntoIterator<Item = PointerEvent>) -> Self {
        events.into_iter().fold(self, Self::on)
    }

    /// Value of the wrapper's `data-state` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hovered => "hovered",
        }
    }

    const fn mask_position(self) -> &'static str {
        match self {
            Self::Idle => "0%",
            Self::Hovered => "100%",
        }
    }
}

/// Renders the logo markup for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoWidget {
    height: String,
}

impl LogoWidget {
    pub fn new(config: &LogoConfig) -> Self {
        Self {
            height: config.height.clone(),
        }
    }

    /// `<span>` wrapping the SVG mark and its scoped stylesheet.
    pub fn render(&self, state: LogoVisualState) -> String {
        let svg = LOGO_SVG.render(&SvgVars {
            height: self.height.clone(),
        });
        let css = LOGO_CSS.render(&CssVars {
            mask_position: state.mask_position(),
            transition: TRANSITION,
        });

        format!(
            "<span class=\"{LOGO_CLASS}\" data-state=\"{}\">\n{}\n<style>\n{}</style>\n</span>",
            state.as_str(),
            svg.trim_end(),
            css
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PointerEvent::*;

    const ALL_EVENTS: [PointerEvent; 5] = [Enter, Leave, Move, Down, Up];

    #[test]
    fn test_transition_table() {
        for state in [LogoVisualState::Idle, LogoVisualState::Hovered] {
            for event in ALL_EVENTS {
                let expected = match event {
                    Enter => LogoVisualState::Hovered,
                    Leave => LogoVisualState::Idle,
                    _ => state,
                };
                assert_eq!(state.on(event), expected, "{state:?} + {event:?}");
            }
        }
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LogoVisualState::default(), LogoVisualState::Idle);
    }

    #[test]
    fn test_replay() {
        let state = LogoVisualState::default().replay([Move, Enter, Down, Up, Move]);
        assert_eq!(state, LogoVisualState::Hovered);
        assert_eq!(state.replay([Leave, Move]), LogoVisualState::Idle);
        // Repeated enters are idempotent.
        assert_eq!(
            LogoVisualState::Idle.replay([Enter, Enter]),
            LogoVisualState::Hovered
        );
    }

    #[test]
    fn test_render_idle() {
        let widget = LogoWidget::new(&LogoConfig::default());
        let html = widget.render(LogoVisualState::Idle);

        assert!(html.starts_with("<span class=\"docthemer-logo\" data-state=\"idle\">"));
        assert!(html.ends_with("</span>"));
        assert!(html.contains("style=\"height: 1.8rem\""));
        assert!(html.contains("mask-position: 0%;"));
        assert!(html.contains("mask-size: 400%;"));
        assert!(html.contains("transition: mask-position 1s ease"));
        assert!(!html.contains("__"));
    }

    #[test]
    fn test_render_hovered() {
        let widget = LogoWidget::new(&LogoConfig {
            height: "32px".into(),
        });
        let html = widget.render(LogoVisualState::Hovered);

        assert!(html.contains("data-state=\"hovered\""));
        assert!(html.contains("style=\"height: 32px\""));
        assert!(!html.contains("mask-position: 0%;"));
    }

    #[test]
    fn test_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LogoVisualState::Hovered).unwrap(),
            "\"hovered\""
        );
    }
}
