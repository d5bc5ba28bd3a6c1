// DOM hooks and assets the page is expected to provide.

// Hero
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const HERO_RIGHT_SELECTOR: &str = ".hero-right";
pub const HERO_LEFT_SELECTOR: &str = ".hero-left";

// Projects
pub const PROJECT_SELECTOR: &str = ".project";
pub const PROJECT_MEDIA_SELECTOR: &str = ".project-media";
pub const PROJECT_INFO_SELECTOR: &str = ".project-info";

// About
pub const ABOUT_SECTION_SELECTOR: &str = ".about-me";
pub const ABOUT_TARGET_ID: &str = "about-typed";
pub const ABOUT_PORTRAIT_SELECTOR: &str = ".about-portrait img";

// Hackathon cards
pub const HACK_CARD_SELECTOR: &str = ".hack-card";
pub const CARD_INNER_SELECTOR: &str = ".card-inner";

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";

// Assets
pub const AVATAR_URL: &str = "avatar.png";
