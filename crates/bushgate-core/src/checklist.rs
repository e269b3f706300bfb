//! Static game-drive checklist.

/// The drive checklist, in display order. Static advisory text; the display
/// sink owns any checked/unchecked state.
pub fn checklist_items() -> &'static [&'static str] {
    &[
        "Enter via Nyalazi Gate if Big 5 is the priority.",
        "Drive 20-30 km/h (spot more, stress less).",
        "Scan road edges and shaded bushes.",
        "Slow down at waterholes and river crossings.",
        "If cars are stopped, pause and observe from a safe distance.",
        "If alarm calls or animals running: stop and scan.",
    ]
}
