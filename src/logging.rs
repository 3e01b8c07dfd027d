use tracing_subscriber::EnvFilter;

/// Target of the per-request `Received message:` / `Error:` lines.
///
/// The filter always enables it at info, whatever `RUST_LOG` or `LOG_LEVEL` say.
pub const REQUEST_LOG: &str = "chat";

pub fn env_filter(directives: &str) -> EnvFilter {
    let directives = directives.trim();
    if directives.is_empty() {
        EnvFilter::new(format!("info,{REQUEST_LOG}=info"))
    } else {
        EnvFilter::new(format!("{directives},{REQUEST_LOG}=info"))
    }
}
