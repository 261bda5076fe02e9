// Page wiring constants: selectors, element ids and timings the DOM layer
// relies on. Kept free of web-sys types so host tests can include it.

// Previews
pub const PREVIEW_CANVAS_SELECTOR: &str = "canvas.previewCanvas";
pub const PREVIEW_KIND_ATTR: &str = "data-preview";

// Theme
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_COLOR_META_SELECTOR: &str = "meta[name=\"theme-color\"]";
pub const ACCENT_VAR: &str = "--accent";
pub const FOCAL_X_VAR: &str = "--mx";
pub const FOCAL_Y_VAR: &str = "--my";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.12;

// Ripple
pub const RIPPLE_HOST_SELECTOR: &str = ".iridescent";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: i32 = 650;

// Modal
pub const MODAL_ID: &str = "modal";
pub const MODAL_CONTENT_ID: &str = "modalContent";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal__close";
pub const LEARN_BUTTON_SELECTOR: &str = ".js-learn";
pub const CARD_SELECTOR: &str = ".card";
pub const PROJECT_ATTR: &str = "data-project";
pub const CLOSE_ATTR: &str = "data-close";

// Contact
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";
pub const COPY_EMAIL_ID: &str = "copyEmail";

// Footer
pub const YEAR_ID: &str = "year";
