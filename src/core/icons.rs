//! Icon names shared by the content registry and the `Icon` component

pub const ZAP: &str = "zap";
pub const SPARKLES: &str = "sparkles";
pub const SEARCH: &str = "search";
pub const MESSAGE: &str = "message";
pub const PEN_TOOL: &str = "pen-tool";
pub const CODE: &str = "code";
pub const SEND: &str = "send";
pub const CHECK: &str = "check";
pub const ARROW_RIGHT: &str = "arrow-right";
pub const CHEVRON_DOWN: &str = "chevron-down";
pub const MAIL: &str = "mail";
pub const MENU: &str = "menu";
pub const X: &str = "x";

/// Every icon name above
pub const ALL: [&str; 13] = [
    ZAP,
    SPARKLES,
    SEARCH,
    MESSAGE,
    PEN_TOOL,
    CODE,
    SEND,
    CHECK,
    ARROW_RIGHT,
    CHEVRON_DOWN,
    MAIL,
    MENU,
    X,
];
