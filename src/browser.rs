use std::process::Command;

pub struct Browser;

impl Browser {
    /// Hand a URL to the user's default browser. Fire-and-forget: the
    /// spawned process is not waited on and launch failures are not retried.
    pub fn open(url: &str) -> Result<(), Box<dyn std::error::Error>> {
        // Try xdg-open first (works on most Linux systems)
        if Command::new("xdg-open").arg(url).spawn().is_ok() {
            return Ok(());
        }

        // Fallback: invoke a common browser directly
        let browsers = ["firefox", "google-chrome", "chromium", "brave-browser"];
        for browser in browsers {
            if Command::new(browser).arg(url).spawn().is_ok() {
                return Ok(());
            }
        }

        Err("Could not open browser".into())
    }
}
