use colored::*;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 10;

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let prefix: ColoredString = ">".bright_black();
    println!(
        "{} {}{}{} {}",
        prefix,
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
}

pub fn verdict(valid: bool) {
    let word: ColoredString = if valid { "valid".green().bold() } else { "invalid".red().bold() };
    println!("{}", word);
}
