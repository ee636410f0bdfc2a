pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Prefixed strings for places that need the text rather than printing it
pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️  {}", msg)
}

pub fn wrap_msg(msg: Message) -> String {
    format!("\n{}\n", msg)
}
