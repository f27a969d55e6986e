/// Ensures the selected line is visible within the scroll viewport.
pub fn ensure_selected_visible(
    scroll_offset: &mut usize,
    selected: usize,
    line_count: usize,
    visible_height: usize,
) {
    if line_count == 0 || visible_height == 0 {
        *scroll_offset = 0;
        return;
    }
    if selected < *scroll_offset {
        *scroll_offset = selected;
    }
    if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected - visible_height + 1;
    }

    let max_scroll = line_count.saturating_sub(visible_height);
    if *scroll_offset > max_scroll {
        *scroll_offset = max_scroll;
    }
}

/// Glyph telling the user which directions still have content.
#[must_use]
pub fn scroll_arrows(scroll_offset: usize, total: usize, visible_height: usize) -> &'static str {
    let can_scroll_up = scroll_offset > 0;
    let can_scroll_down = total > scroll_offset + visible_height;
    match (can_scroll_up, can_scroll_down) {
        (true, true) => super::theme::GLYPH_SCROLL_BOTH,
        (true, false) => super::theme::GLYPH_SCROLL_UP,
        (false, true) => super::theme::GLYPH_SCROLL_DOWN,
        (false, false) => "",
    }
}
