//! `dcm window` – print a reporting date window.

use dcm_core::window;

use crate::cli::WindowKind;

pub fn run_window(which: WindowKind) {
    let (start, end) = match which {
        WindowKind::LastMonth => window::last_month(),
        WindowKind::FirstHalf => window::first_half(),
    };
    println!("{start} {end}");
}
