pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 8080;

/// Term records carry two base64-encoded signature images inline, so the
/// JSON body limit is generous.
pub const JSON_LIMIT: usize = 10 * 1024 * 1024;
