pub const YTDLP: &str = "yt-dlp";
pub const MPV: &str = "mpv";

#[derive(thiserror::Error, Debug)]
#[error("'{name}' not found in PATH. {hint}")]
pub struct MissingTool {
    pub name: &'static str,
    hint: &'static str,
}

/// Probe the executable search path for an external tool. Called before
/// entering any mode that needs the tool; absence carries an install hint.
pub fn require(name: &'static str) -> Result<(), MissingTool> {
    which::which(name).map(|_| ()).map_err(|_| MissingTool {
        name,
        hint: install_hint(name),
    })
}

fn install_hint(name: &str) -> &'static str {
    match name {
        "yt-dlp" => "Install yt-dlp (package or pip) and try again.",
        "mpv" => "Install mpv and try again.",
        _ => "Install it and try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_tool_is_found() {
        // sh is a safe bet on any unix test machine
        assert!(require("sh").is_ok());
    }

    #[test]
    fn absent_tool_reports_a_hint() {
        let err = require("ytp-rs-no-such-tool").expect_err("Tool should be absent");
        let msg = err.to_string();
        assert!(msg.contains("ytp-rs-no-such-tool"));
        assert!(msg.contains("not found in PATH"));
    }
}
