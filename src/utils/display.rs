use colored::*;

pub fn print_header(text: &str) {
    eprintln!("\n{}", text.bright_cyan().bold());
    eprintln!("{}", "=".repeat(text.len()).bright_cyan());
}

pub fn print_success(text: &str) {
    eprintln!("{}", text.green());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red().bold());
}

pub fn print_info(text: &str) {
    eprintln!("{}", text.blue());
}

/// Two-column `name  description` line for tool listings
pub fn print_tool_line(name: &str, description: &str, width: usize) {
    let padded = format!("{:<width$}", name, width = width);
    println!("{}  {}", padded.yellow().bold(), description);
}
