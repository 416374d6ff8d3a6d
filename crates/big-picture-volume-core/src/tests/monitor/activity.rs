use crate::{ActivityMonitor, ActivityProbe, TARGET_WINDOW_TITLE};

struct FakeProbe {
    titles: Vec<String>,
}

impl ActivityProbe for FakeProbe {
    fn window_titles(&mut self) -> Vec<String> {
        self.titles.clone()
    }
}

fn monitor_over(titles: &[&str]) -> ActivityMonitor<FakeProbe> {
    let probe = FakeProbe {
        titles: titles.iter().map(|t| t.to_string()).collect(),
    };
    ActivityMonitor::new(probe, TARGET_WINDOW_TITLE)
}

/// WHAT: An empty window list yields an inactive signal
/// WHY: Boundary condition; no windows means the target cannot be active
#[test]
fn given_no_windows_when_polling_then_inactive() {
    let mut monitor = monitor_over(&[]);

    assert!(!monitor.poll());
}

/// WHAT: A title containing the target substring yields an active signal
/// WHY: The target runs embedded in a longer live window title
#[test]
fn given_matching_title_when_polling_then_active() {
    // Given: Unrelated windows plus one carrying the target fragment
    let mut monitor = monitor_over(&[
        "Untitled - Notepad",
        "Steam Big Picture Mode - Library",
        "Task Manager",
    ]);

    // When/Then: The signal is active
    assert!(monitor.poll());
}

/// WHAT: The substring match is case-sensitive
/// WHY: The target title is emitted verbatim by the application
#[test]
fn given_case_mismatched_title_when_polling_then_inactive() {
    let mut monitor = monitor_over(&["steam big picture mode"]);

    assert!(!monitor.poll());
}

/// WHAT: Unrelated titles never trip the signal
/// WHY: A partial or reordered fragment must not count as a match
#[test]
fn given_unrelated_titles_when_polling_then_inactive() {
    let mut monitor = monitor_over(&["Steam", "Big Picture of cats.png - Photos"]);

    assert!(!monitor.poll());
}
