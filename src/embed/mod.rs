//! Embedded static resources.
//!
//! - `init/theme.toml` - default theme written by `docthemer init`
//! - `logo/logo.svg`, `logo/logo.css` - brand mark and its hover sweep
//!
//! # Usage
//!
//! ```ignore
//! use embed::logo::{LOGO_SVG, SvgVars};
//!
//! let svg = LOGO_SVG.render(&SvgVars { height: "1.8rem".into() });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod logo {
    use super::{Template, TemplateVars};

    /// Variables for logo.svg.
    pub struct SvgVars {
        /// CSS height of the mark.
        pub height: String,
    }

    impl TemplateVars for SvgVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__HEIGHT__", &self.height)
        }
    }

    /// Variables for logo.css.
    pub struct CssVars {
        /// Resting `mask-position`, `0%` idle or `100%` hovered.
        pub mask_position: &'static str,
        /// Transition timing, e.g. `1s ease`.
        pub transition: &'static str,
    }

    impl TemplateVars for CssVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__MASK_POSITION__", self.mask_position)
                .replace("__TRANSITION__", self.transition)
        }
    }

    /// Brand mark (opaque path data).
    pub const LOGO_SVG: Template<SvgVars> = Template::new(include_str!("logo/logo.svg"));

    /// Masked-gradient sweep shown on hover.
    pub const LOGO_CSS: Template<CssVars> = Template::new(include_str!("logo/logo.css"));
}
