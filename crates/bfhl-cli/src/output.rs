//! Output formatting for CLI responses.

use bfhl_types::ResponseEnvelope;

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Renders an envelope as pretty JSON.
pub fn render_envelope(envelope: &ResponseEnvelope) -> anyhow::Result<String> {
    serde_json::to_string_pretty(envelope)
        .map_err(|e| anyhow::anyhow!("failed to render response: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_types::OperationOutput;

    #[test]
    fn render_success_envelope() {
        let env = ResponseEnvelope::success("a@b.c", OperationOutput::Integer(2));
        let text = render_envelope(&env).expect("render");
        assert!(text.contains("\"is_success\": true"));
        assert!(text.contains("\"data\": 2"));
        assert!(!text.contains("error"));
    }

    #[test]
    fn render_failure_envelope() {
        let env = ResponseEnvelope::failure("a@b.c", "Invalid key");
        let text = render_envelope(&env).expect("render");
        assert!(text.contains("\"error\": \"Invalid key\""));
    }
}
