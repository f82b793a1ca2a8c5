// File: crates/chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the side-by-side plain/spline comparison window.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = chart_dioxus::ui::run_demo_ui() {
        eprintln!("spline compare error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    match chart_dioxus::run_demo_ui() {
        Ok(()) => {}
        Err(e) => eprintln!("{e}"),
    }
}
