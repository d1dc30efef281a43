use std::fmt::Write;
use terminal_size::{terminal_size, Width};
use crate::config::constants::MIN_AUTO_BAR_WIDTH;
use crate::enums::dashboard_view::DashboardView;
use crate::structs::category_stats::CategoryStats;
use crate::structs::dashboard_statistics::DashboardStatistics;
use crate::structs::trivia::api_error::ApiError;
use crate::structs::trivia::trivia_category::TriviaCategory;

const RULE: &str = "═══════════════════════════════════════";

pub struct DashboardPrinter {
    bar_width: usize,
}

impl DashboardPrinter {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width: Self::resolve_bar_width(bar_width),
        }
    }

    /// A configured width of 0 takes a third of the terminal.
    fn resolve_bar_width(configured: usize) -> usize {
        if configured > 0 {
            return configured;
        }

        match terminal_size() {
            Some((Width(columns), _)) => (columns as usize / 3).max(MIN_AUTO_BAR_WIDTH),
            None => MIN_AUTO_BAR_WIDTH,
        }
    }

    pub fn print(&self, view: &DashboardView) {
        println!("{}", self.render(view));
    }

    pub fn render(&self, view: &DashboardView) -> String {
        match view {
            DashboardView::Loading => "⏳ Loading OpenTriviaDB data...".to_string(),
            DashboardView::Error(error) => Self::render_error(error),
            DashboardView::Empty => Self::render_empty(),
            DashboardView::Ready(stats) => self.render_ready(stats),
        }
    }

    pub fn render_error(error: &ApiError) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "❌ Unable to load OpenTriviaDB data");
        let _ = writeln!(out, "   {}", error.message);
        if !error.is_transport_failure() {
            let _ = writeln!(out, "   (response code {})", error.code);
        }
        let _ = write!(out, "🔄 Try Again: run the command again to reload");
        out
    }

    pub fn render_empty() -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📭 No questions available");
        let _ = writeln!(out, "   No OpenTriviaDB questions were found. Try adjusting your settings or reload to fetch new data.");
        let _ = write!(out, "🔄 Reload: run the command again");
        out
    }

    pub fn render_ready(&self, stats: &DashboardStatistics) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n🧠 OpenTriviaDB Dashboard");
        let _ = writeln!(out, "{}", RULE);

        let _ = writeln!(out, "📈 Overview:");
        let _ = writeln!(out, "   Total Questions: {}", stats.total_questions);
        let _ = writeln!(out, "   Categories: {}", stats.category_count);
        let _ = writeln!(out, "   Difficulty Levels: {}", stats.difficulty_levels);
        let _ = writeln!(
            out,
            "   Filter: {}",
            stats.selected_category.as_deref().unwrap_or("All Categories")
        );

        if !stats.category_options.is_empty() {
            let _ = writeln!(out, "\n🏷️ Filter by Category:");
            let all_marker = if stats.selected_category.is_none() { "[x]" } else { "[ ]" };
            let _ = writeln!(out, "   {} All Categories", all_marker);
            for option in &stats.category_options {
                let marker = match (option.selected, option.has_questions) {
                    (true, _) => "[x]",
                    (false, true) => "[ ]",
                    (false, false) => "[-]",
                };
                let _ = writeln!(out, "   {} {}", marker, option.category.name);
            }
        }

        let _ = writeln!(out, "\n📊 Questions by Category:");
        out.push_str(&self.render_category_bars(&stats.categories));

        let _ = writeln!(out, "\n🥧 Questions by Difficulty:");
        for difficulty in &stats.difficulties {
            let _ = writeln!(
                out,
                "   {:<14} ({})",
                difficulty.label(stats.total_questions),
                difficulty.count
            );
        }

        let _ = writeln!(out, "\n📋 Category Overview:");
        let name_width = Self::name_width(&stats.categories);
        for category in &stats.categories {
            let _ = writeln!(
                out,
                "   {:<width$}  {:>5.1}%  {:>3}",
                category.name,
                category.percentage_of(stats.total_questions),
                category.count,
                width = name_width
            );
        }

        let _ = write!(out, "{}", RULE);
        out
    }

    pub fn render_category_bars(&self, categories: &[CategoryStats]) -> String {
        let mut out = String::new();
        let max = categories.iter().map(|c| c.count).max().unwrap_or(0);
        let name_width = Self::name_width(categories);

        for category in categories {
            let _ = writeln!(
                out,
                "   {:<width$}  {} {}",
                category.name,
                "█".repeat(self.bar_length(category.count, max)),
                category.count,
                width = name_width
            );
        }
        out
    }

    pub fn render_categories(categories: &[TriviaCategory]) -> String {
        if categories.is_empty() {
            return "📭 No categories available".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "📚 {} categories:", categories.len());
        for category in categories {
            let _ = writeln!(out, "   {:>3}  {}", category.id, category.name);
        }
        out.trim_end().to_string()
    }

    fn bar_length(&self, count: usize, max: usize) -> usize {
        if count == 0 || max == 0 {
            return 0;
        }
        ((count * self.bar_width) / max).max(1)
    }

    fn name_width(categories: &[CategoryStats]) -> usize {
        categories.iter().map(|c| c.name.chars().count()).max().unwrap_or(0)
    }
}
