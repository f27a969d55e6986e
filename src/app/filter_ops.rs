use log::debug;

use crate::catalog;

use super::App;

impl App {
    /// Recomputes the visible list if the selected-tag set changed since the last run.
    /// Returns true when the filter was re-evaluated.
    pub(super) fn refresh_visible(&mut self) -> bool {
        let key = self.tag_selection.sorted();
        if key == self.visible_key {
            return false;
        }

        let visible: Vec<usize> = catalog::apply(self.catalog.projects(), key.as_slice())
            .into_iter()
            .filter_map(|p| self.catalog.position(&p.id))
            .collect();

        debug!(
            "event=filter_applied tags={} visible={}",
            key.len(),
            visible.len()
        );

        self.visible = visible;
        self.visible_key = key;
        self.filter_runs += 1;
        self.project_cursor = self
            .project_cursor
            .min(self.visible.len().saturating_sub(1));
        self.scroll_offset = 0;
        true
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let now_selected = self.tag_selection.toggle(tag);
        debug!("event=tag_toggled tag={tag} selected={now_selected}");
        self.refresh_visible();
    }

    pub fn toggle_current_tag(&mut self) {
        if let Some(tag) = self.current_tag().map(str::to_string) {
            self.toggle_tag(&tag);
        }
    }

    /// Toggle the tag bound to a digit in `favorite_tags`.
    pub fn toggle_favorite_tag(&mut self, key: char) {
        let Some(tag) = self.config.get_favorite_tag(key).map(str::to_string) else {
            self.set_status(format!("No favorite tag on {key}"));
            return;
        };
        self.toggle_tag(&tag);
        if let Some(pos) = self.vocabulary.iter().position(|t| *t == tag) {
            self.tag_cursor = pos;
        }
    }

    pub fn clear_filters(&mut self) {
        if !self.tag_selection.is_active() {
            return;
        }
        self.tag_selection.clear();
        debug!("event=filters_cleared");
        self.refresh_visible();
    }
}
