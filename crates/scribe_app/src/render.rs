use scribe_core::{DisplayState, StepStatus};

/// Print the current view to stdout, one block per change.
pub fn render(view: &DisplayState) {
    println!();
    println!("{}", view.message);

    if !view.show_timeline {
        return;
    }

    for step in &view.steps {
        let marker = match step.status {
            StepStatus::Done => "✔",
            StepStatus::Active => "▶",
            StepStatus::Pending => "·",
        };
        println!("  {} {} {}", marker, step.icon, step.label);
    }

    println!("  [{}] {}%", bar(view.progress), view.progress);
}

/// Progress bar body: width in characters equals the percentage, so the
/// rendered width is a monotonic, deterministic function of progress.
fn bar(progress: u8) -> String {
    let filled = usize::from(progress.min(100));
    let mut body = "#".repeat(filled);
    body.push_str(&"-".repeat(100 - filled));
    body
}
