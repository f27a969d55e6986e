use super::{App, Focus};

impl App {
    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tags => Focus::Projects,
            Focus::Projects => Focus::Tags,
        };
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Tags => {
                if self.tag_cursor + 1 < self.vocabulary.len() {
                    self.tag_cursor += 1;
                }
            }
            Focus::Projects => {
                if self.project_cursor + 1 < self.visible.len() {
                    self.project_cursor += 1;
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Tags => self.tag_cursor = self.tag_cursor.saturating_sub(1),
            Focus::Projects => self.project_cursor = self.project_cursor.saturating_sub(1),
        }
    }

    pub fn jump_to_first(&mut self) {
        match self.focus {
            Focus::Tags => self.tag_cursor = 0,
            Focus::Projects => self.project_cursor = 0,
        }
    }

    pub fn jump_to_last(&mut self) {
        match self.focus {
            Focus::Tags => self.tag_cursor = self.vocabulary.len().saturating_sub(1),
            Focus::Projects => self.project_cursor = self.visible.len().saturating_sub(1),
        }
    }

    pub fn scroll_help_down(&mut self, total_lines: usize, visible_height: usize) {
        let max_scroll = total_lines.saturating_sub(visible_height);
        if self.help_scroll < max_scroll {
            self.help_scroll += 1;
        }
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll = 0;
    }
}
