//! Printing verdicts and deciding the exit code.

use std::process::ExitCode;

use owo_colors::OwoColorize;

/// Render the verdict line for one input.
pub fn verdict_line(label: &str, balanced: bool, color: bool) -> String {
    match (balanced, color) {
        (true, true) => format!("{label}: {}", "balanced".green()),
        (false, true) => format!("{label}: {}", "unbalanced".red().bold()),
        (true, false) => format!("{label}: balanced"),
        (false, false) => format!("{label}: unbalanced"),
    }
}

/// Running tally of outcomes across all inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub any_unbalanced: bool,
    pub any_error: bool,
}

impl Summary {
    pub const fn record_verdict(&mut self, balanced: bool) {
        if !balanced {
            self.any_unbalanced = true;
        }
    }

    pub const fn record_error(&mut self) {
        self.any_error = true;
    }

    /// 2 on any error, 1 if anything is unbalanced, else 0.
    pub const fn status(self) -> u8 {
        if self.any_error {
            2
        } else if self.any_unbalanced {
            1
        } else {
            0
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.status())
    }
}
