//! Terminal rendering for debatecomps-core types.
//!
//! Extension traits that add colored output using owo_colors.

use debatecomps_core::date_range::Assumptions;
use debatecomps_core::export::format_date_range_for_display;
use debatecomps_core::tournament::{TournamentRecord, is_placeholder};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TournamentRecord {
    fn render(&self) -> String {
        let mut lines = vec![
            self.competition_name.bold().to_string(),
            format!(
                "   {}",
                format_date_range_for_display(&self.date).cyan()
            ),
        ];

        let fields = [
            ("Location", self.location.as_str()),
            ("Timezone", self.timezone.as_str()),
            ("Format", self.format.as_str()),
            ("Fees", self.fees.as_str()),
            ("Team cap", self.team_cap.as_str()),
            ("Judges", self.judge_rule.as_str()),
            ("Status", self.profit_status.as_str()),
            ("Register", self.reg_link.as_str()),
            ("Info", self.info_link.as_str()),
        ];

        for (label, value) in fields {
            if !is_placeholder(value) {
                lines.push(format!("   {} {}", format!("{label}:").dimmed(), value));
            }
        }

        lines.join("\n")
    }
}

impl Render for Assumptions {
    /// One line per fallback taken, empty when none were.
    fn render(&self) -> String {
        let notes = [
            (self.year_inferred, "no year given, assumed the current year"),
            (self.month_defaulted, "no month found, assumed January"),
            (self.day_defaulted, "no day found, assumed the 1st"),
            (self.day_rolled_over, "day does not exist in that month, rolled over"),
            (self.end_clamped, "end came before start, treated as a single day"),
            (self.unrepresentable, "date out of range, used today"),
        ];

        notes
            .iter()
            .filter(|(taken, _)| *taken)
            .map(|(_, note)| format!("  ! {note}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
