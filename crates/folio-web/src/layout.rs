//! Desktop/mobile switch driven by the configured breakpoint
//!
//! `style/main.css` holds the mobile-first base rules. The rules that swap in
//! the desktop nav are generated here so the stylesheet and the resize
//! handler read the same breakpoint.

use folio_types::Breakpoint;

/// Rules applied at and above `breakpoint`
pub fn breakpoint_styles(breakpoint: Breakpoint) -> String {
    format!(
        "@media {} {{\n\
         \x20 .mobile-icon-menu {{ display: none; }}\n\
         \x20 .desktop-menu {{ display: flex; }}\n\
         \x20 .slide-menu, .overlay {{ display: none; }}\n\
         }}\n",
        breakpoint.media_query()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::HeaderConfig;

    #[test]
    fn test_styles_follow_configured_breakpoint() {
        let config = HeaderConfig::from_toml_str("breakpoint_px = 1024").unwrap();
        let css = breakpoint_styles(config.breakpoint());

        assert!(css.starts_with("@media (min-width: 1024px) {"));
        assert!(css.contains(".desktop-menu { display: flex; }"));
        assert!(!css.contains("768px"));
    }

    #[test]
    fn test_default_breakpoint() {
        let css = breakpoint_styles(Breakpoint::default());
        assert!(css.contains("(min-width: 768px)"));
        assert!(css.contains(".slide-menu, .overlay { display: none; }"));
    }
}
