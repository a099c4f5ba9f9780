/// Constants module to avoid magic numbers in the codebase

// Network Configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const CHAT_ENDPOINT: &str = "/chat";
pub const PROFILE_ENDPOINT: &str = "/profile";
pub const EXPERIENCES_ENDPOINT: &str = "/experiences";
pub const PROJECTS_ENDPOINT: &str = "/projects";
pub const SKILLS_ENDPOINT: &str = "/skills";
pub const HEALTH_ENDPOINT: &str = "/health";

// Timeouts
pub const HEALTH_CHECK_TIMEOUT_MS: u64 = 1500;

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const UI_SCROLL_LINES: u16 = 3;
pub const UI_PAGE_LINES: u16 = 10;

// Chat fallback messages shown in place of any backend or network failure
pub const FALLBACK_GATEWAY_TIMEOUT: &str =
    "The AI service is taking longer than expected. Please try again later.";
pub const FALLBACK_SERVER_ERROR: &str =
    "I am having trouble connecting to the AI service. Please try again later.";
pub const FALLBACK_UNCLASSIFIED: &str = "Sorry, I encountered an error. Please try again.";

// Hero defaults used when the profile omits a field
pub const DEFAULT_PROFILE_NAME: &str = "Viharahamed";
pub const DEFAULT_PROFILE_TITLE: &str = "Full Stack Developer";
pub const DEFAULT_PROFILE_BIO: &str = "A passionate Full Stack Developer, worked with frontend and built some applications using React.js and some other libraries and frameworks.";

// Chat widget copy
pub const CHAT_TITLE: &str = "AI Assistant";
pub const CHAT_SUBTITLE: &str = "Ask me anything about this portfolio!";
pub const CHAT_PLACEHOLDER: &str = "Ask me anything...";
pub const CHAT_WELCOME_LINES: &[&str] = &[
    "Hi! I'm an AI assistant trained on this portfolio.",
    "Ask me about:",
    "  - Work experience",
    "  - Technical skills",
    "  - Projects",
    "  - Education",
];
