//! Route paths.

pub const GET_ROOT: &str = "/";
pub const GET_API_HELLO: &str = "/api/hello";
pub const POST_API_CHAT: &str = "/api/chat";
pub const GET_API_MESSAGES: &str = "/api/messages";
pub const GET_TEST: &str = "/test";
