use chrono::{DateTime, Utc};
use colored::Colorize;
use pastebox::api::{CmdMessage, ListedPaste, MessageLevel};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_full_pastes(pastes: &[ListedPaste]) {
    for (i, lp) in pastes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            lp.paste.id.yellow(),
            lp.paste.title.bold()
        );
        println!(
            "{}",
            lp.paste.created_at.format("%B %-d, %Y").to_string().dimmed()
        );
        println!("--------------------------------");
        println!("{}", lp.paste.content);
    }
}

pub(crate) fn print_pastes(pastes: &[ListedPaste], preview_width: usize) {
    if pastes.is_empty() {
        println!("No pastes found.");
        return;
    }

    let line_width = terminal_width();
    let id_width = pastes.iter().map(|lp| lp.paste.id.width()).max().unwrap_or(0);
    let pos_width = pastes
        .iter()
        .map(|lp| lp.position.to_string().len())
        .max()
        .unwrap_or(1);

    for lp in pastes {
        let pos_str = format!("{:>w$}. ", lp.position, w = pos_width);
        let id_str = format!("{:<w$}  ", lp.paste.id, w = id_width);

        let preview: String = lp
            .paste
            .content
            .chars()
            .take(preview_width)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title = if lp.paste.title.is_empty() {
            "(untitled)".to_string()
        } else {
            lp.paste.title.clone()
        };
        let title_content = if preview.is_empty() {
            title
        } else {
            format!("{} {}", title, preview)
        };

        let fixed = pos_str.width() + id_str.width() + TIME_WIDTH;
        let available = line_width.saturating_sub(fixed);
        let shown = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{}{}{}{}",
            pos_str,
            id_str.cyan(),
            shown,
            " ".repeat(padding),
            format_time_ago(lp.paste.created_at).dimmed()
        );
    }
}

fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_LINE_WIDTH)
}

pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
